//! API DTOs

pub mod common;
pub mod reservation;

pub use common::ApiResponse;
pub use reservation::{
    CreateReservationRequest, GuestCount, ListReservationsQuery, ReservationDto,
    UpdateReservationRequest,
};
