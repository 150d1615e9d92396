//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Core payload types already derive Serialize/Deserialize and are
//! re-exported from the api module.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Core payloads
    Event, EventId, PhaseDateFields, PhaseDemands,
    // Listing
    EventInfo,
    // Validation
    PhaseRangeCheck, RangeReport,
};
pub use crate::db::models::DemandRow;
pub use crate::models::{Boundary, PhaseName};

/// Response for event creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreatedResponse {
    /// Assigned event ID
    pub event_id: EventId,
    /// Range policy result for the stored dates (warnings only)
    pub range_report: RangeReport,
    /// Message about the operation
    pub message: String,
}

/// Response for event update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventUpdatedResponse {
    /// Range policy result for the stored dates (warnings only)
    pub range_report: RangeReport,
    /// Message about the operation
    pub message: String,
}

/// Request body for the stateless date propagation endpoint.
///
/// Carries the full draft state because the engine is pure: the server
/// holds no per-draft session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropagateRequest {
    /// Current six-date state of the draft
    #[serde(default)]
    pub dates: PhaseDateFields,
    /// Which phase was edited
    pub phase: PhaseName,
    /// Which boundary of that phase was edited
    pub boundary: Boundary,
    /// Raw edited value as typed; unparseable input is a no-op
    pub value: String,
    /// Current demand maps, rebuilt against the repaired intervals
    #[serde(default)]
    pub demands: PhaseDemands,
}

/// Response of the date propagation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropagateResponse {
    /// Repaired six-date state
    pub dates: PhaseDateFields,
    /// Range policy result for the repaired state
    pub range_report: RangeReport,
    /// Demand maps with rebuilt day keys
    pub demands: PhaseDemands,
}

/// Request body for the stateless range check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRangesRequest {
    #[serde(default)]
    pub dates: PhaseDateFields,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}

/// Event list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    /// List of events
    pub events: Vec<EventInfo>,
    /// Total count
    pub total: usize,
}
