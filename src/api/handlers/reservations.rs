//! Reservation REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::{
    ApiResponse, CreateReservationRequest, GuestCount, ListReservationsQuery, ReservationDto,
    UpdateReservationRequest,
};
use crate::api::handlers::AppState;
use crate::domain::{DomainError, NewReservation, ReservationFilter, ReservationPatch};

/// Create a new reservation
///
/// All five fields are required; blank strings and a guest count of zero
/// count as missing.
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    req.validate().map_err(|errors| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(validation_message(&errors))),
        )
    })?;

    let guest_count = match req.guest_count.as_ref().map(GuestCount::as_count) {
        Some(Some(n)) if n > 0 => n,
        Some(Some(_)) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("guest_count is required")),
            ));
        }
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("guest_count must be a valid number")),
            ));
        }
    };

    // Presence was checked above; missing fields cannot reach this point.
    let new = NewReservation {
        hotel: req.hotel.unwrap_or_default(),
        room_type: req.room_type.unwrap_or_default(),
        guest_count,
        date: req.date.unwrap_or_default(),
        status: req.status.unwrap_or_default(),
    };

    match state.store.create(new).await {
        Ok(created) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(created.into())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

/// List reservations, optionally filtered
///
/// All supplied filters must match. A filter set that matches nothing —
/// including an unfiltered request over an empty collection — yields 404,
/// never an empty list.
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "Reservations",
    params(ListReservationsQuery),
    responses(
        (status = 200, description = "Matching reservations", body = ApiResponse<Vec<ReservationDto>>),
        (status = 400, description = "Invalid guest count filter"),
        (status = 404, description = "No reservations matched")
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = ReservationFilter {
        hotel: supplied(query.hotel),
        room_type: supplied(query.room_type),
        status: supplied(query.status),
        guest_count: parse_count_filter(query.guest_count.as_deref(), "guest_count")?,
        guest_count_min: parse_count_filter(query.guest_count_min.as_deref(), "guest_count_min")?,
        guest_count_max: parse_count_filter(query.guest_count_max.as_deref(), "guest_count_max")?,
    };

    match state.store.list(&filter).await {
        Ok(reservations) => {
            let dtos: Vec<ReservationDto> = reservations.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(dtos)))
        }
        Err(e @ DomainError::NoMatches) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = u32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.store.get(id).await {
        Ok(reservation) => Ok(Json(ApiResponse::success(reservation.into()))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

/// Update a reservation
///
/// Partial update — send only the fields to change. Blank strings and a
/// guest count of zero keep the stored values.
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = u32, Path, description = "Reservation ID")),
    request_body = UpdateReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid guest count"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let guest_count = match req.guest_count.as_ref().map(GuestCount::as_count) {
        None => None,
        Some(Some(n)) => Some(n),
        Some(None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("guest_count must be a valid number")),
            ));
        }
    };

    let patch = ReservationPatch {
        hotel: req.hotel,
        room_type: req.room_type,
        guest_count,
        date: req.date,
        status: req.status,
    };

    match state.store.update(id, patch).await {
        Ok(updated) => Ok(Json(ApiResponse::success(updated.into()))),
        Err(e @ DomainError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = u32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = ApiResponse<String>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.store.delete(id).await {
        Ok(()) => Ok(Json(ApiResponse::success(
            "Reservation deleted".to_string(),
        ))),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

/// Blank query values are treated as absent filters.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse an integer query filter; absent or blank parameters yield `None`.
fn parse_count_filter(
    value: Option<&str>,
    field: &str,
) -> Result<Option<u32>, (StatusCode, Json<ApiResponse<()>>)> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "{} must be a valid number",
                    field
                ))),
            )
        }),
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {:?}", field, e.code))
            })
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
