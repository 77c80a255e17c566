//! Reservation domain entity and filtering logic

use serde::{Deserialize, Serialize};

/// Single hotel booking record.
///
/// Serialization uses the legacy Spanish field names of the backing file,
/// so existing `reservas.json` files keep working unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation ID, assigned at creation
    pub id: u32,
    /// Hotel name
    pub hotel: String,
    /// Room type (e.g. "Doble", "Suite")
    #[serde(rename = "tipo_habitacion")]
    pub room_type: String,
    /// Number of guests
    #[serde(rename = "num_huespedes")]
    pub guest_count: u32,
    /// Reservation date, stored as given (not validated as a calendar date)
    #[serde(rename = "fecha")]
    pub date: String,
    /// Reservation status (e.g. "Confirmada", "Pendiente")
    #[serde(rename = "estado")]
    pub status: String,
}

impl Reservation {
    /// Build a record from validated input, trimming string fields.
    pub fn from_new(id: u32, new: NewReservation) -> Self {
        Self {
            id,
            hotel: new.hotel.trim().to_string(),
            room_type: new.room_type.trim().to_string(),
            guest_count: new.guest_count,
            date: new.date.trim().to_string(),
            status: new.status.trim().to_string(),
        }
    }

    /// Apply a partial update in place.
    ///
    /// String fields that are absent or trim to empty keep their previous
    /// value; a guest count of zero likewise keeps the previous value.
    pub fn apply(&mut self, patch: &ReservationPatch) {
        if let Some(hotel) = non_blank(patch.hotel.as_deref()) {
            self.hotel = hotel;
        }
        if let Some(room_type) = non_blank(patch.room_type.as_deref()) {
            self.room_type = room_type;
        }
        if let Some(guest_count) = patch.guest_count.filter(|n| *n > 0) {
            self.guest_count = guest_count;
        }
        if let Some(date) = non_blank(patch.date.as_deref()) {
            self.date = date;
        }
        if let Some(status) = non_blank(patch.status.as_deref()) {
            self.status = status;
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validated input for a new reservation; every field is required
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub hotel: String,
    pub room_type: String,
    pub guest_count: u32,
    pub date: String,
    pub status: String,
}

/// Partial field set for updates; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub hotel: Option<String>,
    pub room_type: Option<String>,
    pub guest_count: Option<u32>,
    pub date: Option<String>,
    pub status: Option<String>,
}

/// Conjunction of list filters; every supplied field must match
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Hotel name, case-insensitive exact match after trimming
    pub hotel: Option<String>,
    /// Room type, case-insensitive exact match after trimming
    pub room_type: Option<String>,
    /// Status, case-insensitive exact match after trimming
    pub status: Option<String>,
    /// Exact guest count
    pub guest_count: Option<u32>,
    /// Inclusive lower bound on guest count
    pub guest_count_min: Option<u32>,
    /// Inclusive upper bound on guest count
    pub guest_count_max: Option<u32>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if !text_matches(self.hotel.as_deref(), &reservation.hotel) {
            return false;
        }
        if !text_matches(self.room_type.as_deref(), &reservation.room_type) {
            return false;
        }
        if !text_matches(self.status.as_deref(), &reservation.status) {
            return false;
        }
        if let Some(n) = self.guest_count {
            if reservation.guest_count != n {
                return false;
            }
        }
        if let Some(min) = self.guest_count_min {
            if reservation.guest_count < min {
                return false;
            }
        }
        if let Some(max) = self.guest_count_max {
            if reservation.guest_count > max {
                return false;
            }
        }
        true
    }
}

fn text_matches(wanted: Option<&str>, stored: &str) -> bool {
    match wanted {
        Some(wanted) => stored.trim().to_lowercase() == wanted.trim().to_lowercase(),
        None => true,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation {
            id: 1,
            hotel: "Hotel Molina".to_string(),
            room_type: "Doble".to_string(),
            guest_count: 2,
            date: "2025-02-10".to_string(),
            status: "Confirmada".to_string(),
        }
    }

    #[test]
    fn from_new_trims_string_fields() {
        let r = Reservation::from_new(
            7,
            NewReservation {
                hotel: "  Hotel Molina ".to_string(),
                room_type: " Suite".to_string(),
                guest_count: 3,
                date: " 2025-03-01 ".to_string(),
                status: "Pendiente ".to_string(),
            },
        );
        assert_eq!(r.id, 7);
        assert_eq!(r.hotel, "Hotel Molina");
        assert_eq!(r.room_type, "Suite");
        assert_eq!(r.date, "2025-03-01");
        assert_eq!(r.status, "Pendiente");
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ReservationFilter::default();
        assert!(filter.matches(&sample_reservation()));
    }

    #[test]
    fn hotel_filter_is_case_insensitive_and_trimmed() {
        let filter = ReservationFilter {
            hotel: Some("  hotel molina ".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&sample_reservation()));
    }

    #[test]
    fn all_supplied_filters_must_match() {
        let filter = ReservationFilter {
            hotel: Some("hotel molina".to_string()),
            status: Some("cancelada".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&sample_reservation()));
    }

    #[test]
    fn guest_count_filter_is_exact() {
        let mut filter = ReservationFilter {
            guest_count: Some(2),
            ..Default::default()
        };
        assert!(filter.matches(&sample_reservation()));
        filter.guest_count = Some(3);
        assert!(!filter.matches(&sample_reservation()));
    }

    #[test]
    fn guest_count_bounds_are_inclusive() {
        let filter = ReservationFilter {
            guest_count_min: Some(2),
            guest_count_max: Some(2),
            ..Default::default()
        };
        assert!(filter.matches(&sample_reservation()));

        let too_low = ReservationFilter {
            guest_count_min: Some(3),
            ..Default::default()
        };
        assert!(!too_low.matches(&sample_reservation()));

        let too_high = ReservationFilter {
            guest_count_max: Some(1),
            ..Default::default()
        };
        assert!(!too_high.matches(&sample_reservation()));
    }

    #[test]
    fn apply_overwrites_only_provided_fields() {
        let mut r = sample_reservation();
        r.apply(&ReservationPatch {
            status: Some(" Cancelada ".to_string()),
            guest_count: Some(4),
            ..Default::default()
        });
        assert_eq!(r.status, "Cancelada");
        assert_eq!(r.guest_count, 4);
        assert_eq!(r.hotel, "Hotel Molina");
        assert_eq!(r.room_type, "Doble");
        assert_eq!(r.date, "2025-02-10");
    }

    #[test]
    fn apply_keeps_previous_values_for_blank_or_zero_fields() {
        let mut r = sample_reservation();
        r.apply(&ReservationPatch {
            hotel: Some("   ".to_string()),
            guest_count: Some(0),
            ..Default::default()
        });
        assert_eq!(r.hotel, "Hotel Molina");
        assert_eq!(r.guest_count, 2);
    }

    #[test]
    fn serialization_uses_legacy_field_names() {
        let json = serde_json::to_value(sample_reservation()).unwrap();
        assert_eq!(json["tipo_habitacion"], "Doble");
        assert_eq!(json["num_huespedes"], 2);
        assert_eq!(json["fecha"], "2025-02-10");
        assert_eq!(json["estado"], "Confirmada");
        assert_eq!(json["hotel"], "Hotel Molina");
    }
}
