//! Apps module: permission-filtered app CRUD and membership removal

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
