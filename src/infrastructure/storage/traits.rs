//! Storage trait definitions

use async_trait::async_trait;

use crate::domain::{
    DomainResult, NewReservation, Reservation, ReservationFilter, ReservationPatch,
};

/// Persistence operations over the reservation collection
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Assign the next id, append and persist the record.
    async fn create(&self, new: NewReservation) -> DomainResult<Reservation>;

    /// Records matching the conjunction of supplied filters.
    ///
    /// An empty result is `DomainError::NoMatches`, never `Ok(vec![])`.
    async fn list(&self, filter: &ReservationFilter) -> DomainResult<Vec<Reservation>>;

    /// The record with the given id.
    async fn get(&self, id: u32) -> DomainResult<Reservation>;

    /// Overwrite the provided fields of an existing record and persist.
    async fn update(&self, id: u32, patch: ReservationPatch) -> DomainResult<Reservation>;

    /// Remove the record with the given id and persist the rest.
    async fn delete(&self, id: u32) -> DomainResult<()>;
}
