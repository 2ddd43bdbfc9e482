//! Vocalize HTTP presentation layer
//!
//! This crate provides the browser-facing form surface and the JSON API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
