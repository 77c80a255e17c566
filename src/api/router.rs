//! API Router with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{
    ApiResponse, CreateReservationRequest, GuestCount, ReservationDto, UpdateReservationRequest,
};
use crate::api::handlers::{health, reservations, AppState};
use crate::infrastructure::ReservationStore;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Reservations
        reservations::list_reservations,
        reservations::create_reservation,
        reservations::get_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
    ),
    components(
        schemas(
            ApiResponse<ReservationDto>,
            ApiResponse<String>,
            ReservationDto,
            CreateReservationRequest,
            UpdateReservationRequest,
            GuestCount,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service availability checks."),
        (name = "Reservations", description = "CRUD operations over hotel reservations. Listing supports filters on hotel, room type, status and guest count (exact, minimum, maximum); all supplied filters must match. A filter set matching nothing yields 404, never an empty list."),
    ),
    info(
        title = "Hotel Reservation API",
        version = "1.0.0",
        description = "REST API for managing hotel reservations.

## Response format

Every REST response is wrapped in a standard envelope:
```json
{\"success\": true, \"data\": {...}}
```

On failure:
```json
{\"success\": false, \"data\": null, \"error\": \"description\"}
```

## Persistence

Reservations live in a single JSON file. Each request reads the full
collection and mutating requests write it back. There is no locking:
concurrent writers race and the last write wins.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(store: Arc<dyn ReservationStore>) -> Router {
    let state = AppState { store };

    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        // Combine GET + PUT + DELETE on the same path in a single .route() call
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
        .with_state(state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Service banner
        .route("/", get(health::root))
        // Health
        .route("/health", get(health::health_check))
        // Reservations
        .nest("/reservations", reservation_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
