//! Repository trait definitions.
//!
//! These traits are the abstract storage interface of the backend. The
//! application only ever talks to `dyn FullRepository`; concrete backends
//! (the in-memory implementation, or a future SQL one) live in
//! [`super::repositories`].

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Event, EventId, EventInfo};
use crate::db::models::DemandRow;

/// Storage operations on events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List all events, ordered by runtime start date.
    async fn list_events(&self) -> RepositoryResult<Vec<EventInfo>>;

    /// Fetch a single event by ID.
    async fn get_event(&self, id: EventId) -> RepositoryResult<Event>;

    /// Store a new event and return its assigned ID. The checksum is
    /// computed by the service layer over the canonical payload.
    async fn store_event(&self, event: Event, checksum: String) -> RepositoryResult<EventId>;

    /// Replace an existing event.
    async fn update_event(
        &self,
        id: EventId,
        event: Event,
        checksum: String,
    ) -> RepositoryResult<()>;

    /// Delete an event.
    async fn delete_event(&self, id: EventId) -> RepositoryResult<()>;
}

/// Storage operations on per-day demand values.
#[async_trait]
pub trait DemandRepository: Send + Sync {
    /// Fetch all demand rows of an event, ordered by phase and day.
    async fn fetch_demands(&self, event_id: EventId) -> RepositoryResult<Vec<DemandRow>>;
}

/// Full repository interface combining all operation groups.
pub trait FullRepository: EventRepository + DemandRepository {}

impl<T: EventRepository + DemandRepository> FullRepository for T {}
