//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod example;

pub use example::{CreateExampleData, Example, ExampleId, UpdateExampleData};
