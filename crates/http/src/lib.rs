//! Bistro HTTP client
//!
//! Typed client for the restaurant API. Builds on native targets (for tests
//! and tooling) and on `wasm32` where requests go through the browser's fetch.

pub mod client;
pub mod types;

pub use client::{ClientBuilder, RestaurantClient, error::ClientError};
