//! Tournament management server library.
//!
//! Manages tournaments and the players registered in them, exposed over a
//! REST API built with Axum.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{AppState, create_router, run};
