//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod example;

pub use example::{CreateExampleDto, ExampleResponseDto, UpdateExampleDto};
