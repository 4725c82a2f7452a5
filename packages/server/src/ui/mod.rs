//! Tournament HTTP server implementation.

mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use handler::ApiError;
pub use router::create_router;
pub use runner::run;
pub use state::AppState;
