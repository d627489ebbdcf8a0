//! Outbound HTTP: inter-node health pings and webhook-style calls

pub mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientError};
