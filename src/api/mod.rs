//! REST API module
//!
//! HTTP endpoints for managing hotel reservations, plus the Swagger UI.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
