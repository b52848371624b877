//! Example Repository Adapters

mod postgres;

pub use postgres::PostgresExampleRepository;
