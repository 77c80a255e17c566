//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::Reservation;

/// Guest count as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum GuestCount {
    Number(i64),
    Text(String),
}

impl GuestCount {
    /// The contained value as a count, if it is a valid non-negative integer.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request to create a new reservation; every field is required
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    /// Hotel name
    #[validate(
        required(message = "hotel is required"),
        custom(function = "not_blank", message = "hotel is required")
    )]
    pub hotel: Option<String>,
    /// Room type
    #[validate(
        required(message = "room_type is required"),
        custom(function = "not_blank", message = "room_type is required")
    )]
    pub room_type: Option<String>,
    /// Number of guests; a numeric string is accepted
    #[validate(required(message = "guest_count is required"))]
    pub guest_count: Option<GuestCount>,
    /// Reservation date (free-form)
    #[validate(
        required(message = "date is required"),
        custom(function = "not_blank", message = "date is required")
    )]
    pub date: Option<String>,
    /// Reservation status
    #[validate(
        required(message = "status is required"),
        custom(function = "not_blank", message = "status is required")
    )]
    pub status: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Partial update; omitted fields keep their stored values
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReservationRequest {
    /// New hotel name
    pub hotel: Option<String>,
    /// New room type
    pub room_type: Option<String>,
    /// New number of guests; a numeric string is accepted
    pub guest_count: Option<GuestCount>,
    /// New reservation date
    pub date: Option<String>,
    /// New reservation status
    pub status: Option<String>,
}

/// List filters; all supplied filters must match
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListReservationsQuery {
    /// Hotel name (case-insensitive exact match)
    pub hotel: Option<String>,
    /// Room type (case-insensitive exact match)
    pub room_type: Option<String>,
    /// Status (case-insensitive exact match)
    pub status: Option<String>,
    /// Exact guest count
    pub guest_count: Option<String>,
    /// Minimum guest count (inclusive)
    pub guest_count_min: Option<String>,
    /// Maximum guest count (inclusive)
    pub guest_count_max: Option<String>,
}

/// Reservation as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    /// Unique reservation ID
    pub id: u32,
    /// Hotel name
    pub hotel: String,
    /// Room type
    pub room_type: String,
    /// Number of guests
    pub guest_count: u32,
    /// Reservation date
    pub date: String,
    /// Reservation status
    pub status: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            hotel: r.hotel,
            room_type: r.room_type,
            guest_count: r.guest_count,
            date: r.date,
            status: r.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(GuestCount::Number(4).as_count(), Some(4));
        assert_eq!(GuestCount::Text(" 4 ".to_string()).as_count(), Some(4));
    }

    #[test]
    fn guest_count_rejects_garbage() {
        assert_eq!(GuestCount::Number(-1).as_count(), None);
        assert_eq!(GuestCount::Text("abc".to_string()).as_count(), None);
        assert_eq!(GuestCount::Text("".to_string()).as_count(), None);
    }

    #[test]
    fn create_request_requires_every_field() {
        let req: CreateReservationRequest = serde_json::from_str("{}").unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 5);
    }

    #[test]
    fn create_request_rejects_blank_strings() {
        let req: CreateReservationRequest = serde_json::from_value(serde_json::json!({
            "hotel": "   ",
            "room_type": "Doble",
            "guest_count": 2,
            "date": "2025-02-10",
            "status": "Confirmada"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hotel"));
    }
}
