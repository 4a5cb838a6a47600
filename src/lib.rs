pub mod api;
pub mod api_docs;
pub mod config;
pub mod domain;
pub mod modules;
pub mod services;
pub mod state;

// Re-exports for the binary and integration tests
pub use config::Config;
pub use state::AppState;
