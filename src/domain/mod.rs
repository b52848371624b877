//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::example_repository::ExampleRepository;
pub use models::example::{CreateExampleData, Example, ExampleId, UpdateExampleData};
