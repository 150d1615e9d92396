//! Service layer for event storage.
//!
//! These functions sit between the HTTP handlers and the repository trait.
//! They own the cross-cutting concerns of a write: payload validation,
//! checksum computation, and the range policy report returned alongside the
//! stored ID. Use these instead of calling the repository directly.

use log::{debug, info};

use crate::api::{Event, EventId, EventInfo, RangeReport};
use crate::db::checksum::calculate_checksum;
use crate::db::models::DemandRow;
use crate::db::repository::{
    DemandRepository, EventRepository, FullRepository, RepositoryError, RepositoryResult,
};
use crate::services::range_policy;

/// Check that the repository is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List all events, ordered by runtime start date.
pub async fn list_events(repo: &dyn FullRepository) -> RepositoryResult<Vec<EventInfo>> {
    repo.list_events().await
}

/// Fetch a single event.
pub async fn get_event(repo: &dyn FullRepository, id: EventId) -> RepositoryResult<Event> {
    repo.get_event(id).await
}

/// Validate and store a new event.
///
/// A payload whose populated phase dates break the contiguity invariant is
/// rejected; stored events must always round-trip into a consistent editing
/// state. Range policy violations do NOT reject: they are returned in the
/// report and left to the caller to present.
pub async fn store_event(
    repo: &dyn FullRepository,
    event: Event,
) -> RepositoryResult<(EventId, RangeReport)> {
    let report = validate_event(&event).map_err(|e| e.with_operation("store_event"))?;
    let checksum = payload_checksum(&event)?;

    let id = repo.store_event(event, checksum).await?;
    info!("Stored event {}", id);
    Ok((id, report))
}

/// Validate and replace an existing event.
pub async fn update_event(
    repo: &dyn FullRepository,
    id: EventId,
    event: Event,
) -> RepositoryResult<RangeReport> {
    let report = validate_event(&event).map_err(|e| e.with_operation("update_event"))?;
    let checksum = payload_checksum(&event)?;

    repo.update_event(id, event, checksum).await?;
    info!("Updated event {}", id);
    Ok(report)
}

/// Delete an event.
pub async fn delete_event(repo: &dyn FullRepository, id: EventId) -> RepositoryResult<()> {
    repo.delete_event(id).await?;
    info!("Deleted event {}", id);
    Ok(())
}

/// Fetch the per-day demand rows of an event.
pub async fn fetch_event_demands(
    repo: &dyn FullRepository,
    id: EventId,
) -> RepositoryResult<Vec<DemandRow>> {
    repo.fetch_demands(id).await
}

fn validate_event(event: &Event) -> RepositoryResult<RangeReport> {
    if event.name.trim().is_empty() {
        return Err(RepositoryError::validation("Event name must not be empty"));
    }

    let dates = event.phase_set();
    if !dates.is_contiguous() {
        return Err(RepositoryError::validation(
            "Phase dates are not contiguous: each phase must start the day after the previous one ends",
        ));
    }

    let report = range_policy::check_ranges(&dates);
    if report.has_violations() {
        debug!(
            "Event '{}' has {} phase range violation(s)",
            event.name,
            report.violations().count()
        );
    }
    Ok(report)
}

fn payload_checksum(event: &Event) -> RepositoryResult<String> {
    let json = serde_json::to_string(event)
        .map_err(|e| RepositoryError::serialization(format!("Failed to encode event: {}", e)))?;
    Ok(calculate_checksum(&json))
}
