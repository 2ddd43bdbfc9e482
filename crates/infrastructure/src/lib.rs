//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the synthesis engine
//! adapter and the in-memory session store, plus application configuration.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::TtsEngineAdapter;
pub use config::{AppConfig, ServerConfig};
pub use persistence::InMemorySessionStore;
