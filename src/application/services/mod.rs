//! Application Services
//!
//! Business-logic seams between the driving adapters and the domain ports.

pub mod example_service;

pub use example_service::{DefaultExampleService, ExampleService};
