//! HealthGauge Server
//!
//! The HTTP surface of the HealthGauge prediction service: request
//! validation, dispatch to the loaded classifiers, and response
//! shaping, plus the configuration and shared state behind it.

pub mod cli;
pub mod config;
pub mod predict;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
