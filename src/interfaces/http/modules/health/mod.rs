//! Liveness and readiness endpoints

pub mod handlers;

pub use handlers::*;
