use crate::error::BookingError;
use crate::store::BookingStore;
use crate::types::{ClientDetails, Service, TIME_FORMAT};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityRequest {
    date: NaiveDate,
    services: Vec<String>,
    employee: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AvailabilityResponse {
    Available {
        start: String,
        duration_minutes: i64,
        services: Vec<String>,
    },
    NoSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookRequest {
    date: NaiveDate,
    services: Vec<String>,
    employee: String,
    client: ClientDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookedResponse {
    date: NaiveDate,
    employee: String,
    start: String,
    duration_minutes: i64,
    services: Vec<String>,
}

pub fn create_app<T: BookingStore>(state: AppState<T>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/dates", get(get_dates))
        .route("/employees", get(get_employees))
        .route("/services", get(get_services))
        .route("/availability", post(check_availability))
        .route("/book", post(book))
        .with_state(state)
        .layer(cors)
}

/// Outermost pipeline boundary: every error kind collapses to one status and
/// one user-facing message here.
fn error_response(err: BookingError) -> (StatusCode, String) {
    let status = match &err {
        BookingError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        BookingError::IncompleteSelection | BookingError::IncompleteConfirmationForm(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        BookingError::SlotTaken => StatusCode::CONFLICT,
        BookingError::PartialPersistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(%err, "booking attempt aborted");
    }
    (status, err.to_string())
}

async fn get_dates<T: BookingStore>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<NaiveDate>>, (StatusCode, String)> {
    state
        .scheduler
        .bookable_dates()
        .map(Json)
        .map_err(error_response)
}

async fn get_employees<T: BookingStore>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    state
        .scheduler
        .employees()
        .map(Json)
        .map_err(error_response)
}

async fn get_services<T: BookingStore>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Service>>, (StatusCode, String)> {
    state.scheduler.services().map(Json).map_err(error_response)
}

async fn check_availability<T: BookingStore>(
    State(state): State<AppState<T>>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    let quote = state
        .scheduler
        .quote(&request.services, request.date, &request.employee)
        .map_err(error_response)?;

    // A full day is a normal outcome, reported with 200 unlike the errors.
    Ok(Json(match quote {
        Some(quote) => AvailabilityResponse::Available {
            start: quote.start.format(TIME_FORMAT).to_string(),
            duration_minutes: quote.duration_minutes,
            services: quote.services,
        },
        None => AvailabilityResponse::NoSlot,
    }))
}

async fn book<T: BookingStore>(
    State(state): State<AppState<T>>,
    Json(request): Json<BookRequest>,
) -> impl IntoResponse {
    match state.scheduler.confirm(
        &request.services,
        request.date,
        &request.employee,
        &request.client,
    ) {
        Ok(booking) => (
            StatusCode::CREATED,
            Json(BookedResponse {
                date: booking.date,
                employee: booking.employee,
                start: booking.start.format(TIME_FORMAT).to_string(),
                duration_minutes: booking.duration_minutes,
                services: booking.services,
            }),
        )
            .into_response(),
        Err(err) => error_response(err).into_response(),
    }
}
