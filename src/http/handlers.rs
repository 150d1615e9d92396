//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    DemandRow, Event, EventCreatedResponse, EventListResponse, EventUpdatedResponse,
    HealthResponse, PropagateRequest, PropagateResponse, RangeReport, ValidateRangesRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{EventId, PhaseDateFields};
use crate::db::services as db_services;
use crate::services::draft;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Event CRUD
// =============================================================================

/// GET /v1/events
///
/// List all events, ordered by runtime start date.
pub async fn list_events(State(state): State<AppState>) -> HandlerResult<EventListResponse> {
    let events = db_services::list_events(state.repository.as_ref()).await?;
    let total = events.len();

    Ok(Json(EventListResponse { events, total }))
}

/// POST /v1/events
///
/// Create a new event. The phase dates must satisfy the contiguity
/// invariant; range policy violations are returned as warnings.
pub async fn create_event(
    State(state): State<AppState>,
    Json(event): Json<Event>,
) -> Result<(axum::http::StatusCode, Json<EventCreatedResponse>), AppError> {
    let (event_id, range_report) =
        db_services::store_event(state.repository.as_ref(), event).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(EventCreatedResponse {
            event_id,
            range_report,
            message: format!("Event {} created successfully", event_id),
        }),
    ))
}

/// GET /v1/events/{event_id}
///
/// Fetch a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<Event> {
    let event =
        db_services::get_event(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(event))
}

/// PUT /v1/events/{event_id}
///
/// Replace an existing event. Same validation as creation.
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(event): Json<Event>,
) -> HandlerResult<EventUpdatedResponse> {
    let range_report =
        db_services::update_event(state.repository.as_ref(), EventId::new(event_id), event)
            .await?;

    Ok(Json(EventUpdatedResponse {
        range_report,
        message: "Event updated successfully".to_string(),
    }))
}

/// DELETE /v1/events/{event_id}
///
/// Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<serde_json::Value> {
    db_services::delete_event(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(serde_json::json!({
        "message": "Event deleted successfully"
    })))
}

/// GET /v1/events/{event_id}/demands
///
/// Per-day demand rows of an event.
pub async fn get_event_demands(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<Vec<DemandRow>> {
    let rows =
        db_services::fetch_event_demands(state.repository.as_ref(), EventId::new(event_id))
            .await?;
    Ok(Json(rows))
}

// =============================================================================
// Phase Date Editing
// =============================================================================

/// POST /v1/phase-dates/propagate
///
/// Stateless date propagation for the event editing flows. Takes the
/// current draft state plus one boundary edit and returns the repaired
/// six-date state, the range policy report, and the rebuilt demand maps.
pub async fn propagate_dates(
    Json(request): Json<PropagateRequest>,
) -> HandlerResult<PropagateResponse> {
    let dates = request.dates.to_phase_set();
    let update = draft::apply_edit(
        &dates,
        &request.demands,
        request.phase,
        request.boundary,
        &request.value,
    );

    Ok(Json(PropagateResponse {
        dates: PhaseDateFields::from_phase_set(&update.dates),
        range_report: update.range_report,
        demands: update.demands,
    }))
}

/// POST /v1/phase-dates/validate
///
/// Stateless range policy check over a six-date state.
pub async fn validate_ranges(
    Json(request): Json<ValidateRangesRequest>,
) -> HandlerResult<RangeReport> {
    let dates = request.dates.to_phase_set();
    Ok(Json(crate::services::range_policy::check_ranges(&dates)))
}
