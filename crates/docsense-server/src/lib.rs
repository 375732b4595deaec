//! docsense HTTP server
//!
//! Accepts extracted document text, runs it through the
//! [`FallbackCoordinator`](docsense_analysis::FallbackCoordinator) and keeps
//! the resulting records in memory for later lookup.

pub mod cli;
pub mod config;
pub mod document;
pub mod routes;
pub mod state;
pub mod store;

pub use cli::Cli;
pub use config::ServerConfig;
pub use document::{DocumentRecord, TextMetrics};
pub use routes::{create_router, AppError};
pub use state::AppState;
pub use store::DocumentStore;
