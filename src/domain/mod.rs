//! Domain types for hotel reservations

pub mod error;
pub mod reservation;

pub use error::{DomainError, DomainResult};
pub use reservation::{NewReservation, Reservation, ReservationFilter, ReservationPatch};
