//! API Handlers

use std::sync::Arc;

use crate::infrastructure::ReservationStore;

pub mod health;
pub mod reservations;

/// Shared state for reservation handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReservationStore>,
}
