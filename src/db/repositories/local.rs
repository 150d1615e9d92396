//! In-memory repository implementation.
//!
//! Used for unit testing and local development. Events live in a map behind
//! a `parking_lot` read-write lock; IDs are assigned from a monotonically
//! increasing counter, mirroring a serial primary key.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{Event, EventId, EventInfo};
use crate::db::models::DemandRow;
use crate::db::repository::{
    DemandRepository, ErrorContext, EventRepository, RepositoryError, RepositoryResult,
};
use crate::models::PhaseName;

/// Stored event plus bookkeeping the wire payload does not carry.
#[derive(Debug, Clone)]
struct StoredEvent {
    event: Event,
    checksum: String,
}

/// In-memory event store.
pub struct LocalRepository {
    events: RwLock<HashMap<i64, StoredEvent>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Stored checksum of an event, if present. Exposed for tests and
    /// deduplication checks.
    pub fn checksum_of(&self, id: EventId) -> Option<String> {
        self.events
            .read()
            .get(&id.value())
            .map(|stored| stored.checksum.clone())
    }

    fn missing(id: EventId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Event {} not found", id),
            ErrorContext::new(operation)
                .with_entity("event")
                .with_entity_id(id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_events(&self) -> RepositoryResult<Vec<EventInfo>> {
        let events = self.events.read();
        let mut entries: Vec<_> = events
            .iter()
            .map(|(id, stored)| {
                let runtime_start = stored.event.phase_set().runtime.start;
                (runtime_start, *id, stored.event.name.clone())
            })
            .collect();
        // Same ordering the event overview uses: by runtime start, then ID.
        entries.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        Ok(entries
            .into_iter()
            .map(|(_, id, name)| EventInfo {
                event_id: EventId::new(id),
                event_name: name,
            })
            .collect())
    }

    async fn get_event(&self, id: EventId) -> RepositoryResult<Event> {
        let events = self.events.read();
        let stored = events
            .get(&id.value())
            .ok_or_else(|| Self::missing(id, "get_event"))?;
        let mut event = stored.event.clone();
        event.id = Some(id);
        Ok(event)
    }

    async fn store_event(&self, event: Event, checksum: String) -> RepositoryResult<EventId> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut events = self.events.write();
        let mut event = event;
        event.id = Some(EventId::new(id));
        events.insert(id, StoredEvent { event, checksum });
        Ok(EventId::new(id))
    }

    async fn update_event(
        &self,
        id: EventId,
        event: Event,
        checksum: String,
    ) -> RepositoryResult<()> {
        let mut events = self.events.write();
        let slot = events
            .get_mut(&id.value())
            .ok_or_else(|| Self::missing(id, "update_event"))?;
        let mut event = event;
        event.id = Some(id);
        *slot = StoredEvent { event, checksum };
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> RepositoryResult<()> {
        let mut events = self.events.write();
        events
            .remove(&id.value())
            .ok_or_else(|| Self::missing(id, "delete_event"))?;
        Ok(())
    }
}

#[async_trait]
impl DemandRepository for LocalRepository {
    async fn fetch_demands(&self, event_id: EventId) -> RepositoryResult<Vec<DemandRow>> {
        let events = self.events.read();
        let stored = events
            .get(&event_id.value())
            .ok_or_else(|| Self::missing(event_id, "fetch_demands"))?;

        let mut rows = Vec::new();
        for phase in PhaseName::SEQUENCE {
            for (date, demand) in stored.event.demands.map(phase) {
                rows.push(DemandRow::new(event_id, phase, *date, *demand));
            }
        }
        Ok(rows)
    }
}
