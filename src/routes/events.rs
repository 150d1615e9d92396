use serde::{Deserialize, Serialize};

use crate::api::EventId;

/// Lightweight event listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    pub event_id: EventId,
    pub event_name: String,
}
