//! Health Handlers
//!
//! Plain-text endpoints outside the JSON envelope.

/// GET / - Root greeting
pub async fn root() -> &'static str {
    "Hello World"
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "health check"
}
