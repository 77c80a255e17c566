//! # Reservas Service
//!
//! Hotel reservation REST service backed by a flat JSON file.
//!
//! ## Architecture
//!
//! - **domain**: reservation entity, filtering and patch logic, error types
//! - **infrastructure**: flat-file storage (one load-modify-save cycle per request)
//! - **api**: REST API with Swagger documentation
//! - **config**: TOML configuration

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export storage types for easy access
pub use infrastructure::{JsonFileStore, ReservationStore};

// Re-export API router
pub use api::create_api_router;
