//! Application Layer
//!
//! Services that sit between the HTTP surface and the domain gateways.
//! They depend on abstractions, not concrete implementations.

pub mod services;

pub use services::{DefaultExampleService, ExampleService};
