//! Example CRUD API
//!
//! A Rust microservice exposing a single resource over REST, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
