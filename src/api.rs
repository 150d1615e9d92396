//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types shared by the storage layer and the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{Boundary, CalendarDate, PhaseInterval, PhaseName, PhaseSet};
pub use crate::routes::events::EventInfo;
pub use crate::routes::validation::{PhaseRangeCheck, RangeReport};
pub use crate::services::demand::{DemandMap, PhaseDemands};

use serde::{Deserialize, Serialize};

/// Event identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(pub i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EventId> for i64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// The six phase boundary dates in their flat wire form, one optional
/// `YYYY-MM-DD` string per field. Anything unparseable maps to an unset
/// boundary; the engine never sees raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDateFields {
    #[serde(default)]
    pub assembly_start_date: Option<String>,
    #[serde(default)]
    pub assembly_end_date: Option<String>,
    #[serde(default)]
    pub runtime_start_date: Option<String>,
    #[serde(default)]
    pub runtime_end_date: Option<String>,
    #[serde(default)]
    pub disassembly_start_date: Option<String>,
    #[serde(default)]
    pub disassembly_end_date: Option<String>,
}

impl PhaseDateFields {
    /// Map the raw fields 1:1 into a typed phase set.
    pub fn to_phase_set(&self) -> PhaseSet {
        fn parse(field: &Option<String>) -> Option<CalendarDate> {
            field.as_deref().and_then(CalendarDate::parse)
        }

        PhaseSet {
            assembly: PhaseInterval::new(
                parse(&self.assembly_start_date),
                parse(&self.assembly_end_date),
            ),
            runtime: PhaseInterval::new(
                parse(&self.runtime_start_date),
                parse(&self.runtime_end_date),
            ),
            disassembly: PhaseInterval::new(
                parse(&self.disassembly_start_date),
                parse(&self.disassembly_end_date),
            ),
        }
    }

    /// Render a typed phase set back into the flat wire form.
    pub fn from_phase_set(set: &PhaseSet) -> Self {
        fn format(date: Option<CalendarDate>) -> Option<String> {
            date.map(|d| d.to_string())
        }

        Self {
            assembly_start_date: format(set.assembly.start),
            assembly_end_date: format(set.assembly.end),
            runtime_start_date: format(set.runtime.start),
            runtime_end_date: format(set.runtime.end),
            disassembly_start_date: format(set.disassembly.start),
            disassembly_end_date: format(set.disassembly.end),
        }
    }
}

/// A planned event with its phase dates and per-day demand tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<EventId>,
    /// Event name
    pub name: String,
    /// Display color for timeline and map views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Occupied hall names
    #[serde(default)]
    pub halls: Vec<String>,
    /// Assigned entrance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
    /// Phase boundary dates in flat wire form
    #[serde(flatten)]
    pub dates: PhaseDateFields,
    /// Per-day demand values, one map per phase
    #[serde(default)]
    pub demands: PhaseDemands,
}

impl Event {
    /// Typed view of the phase dates.
    pub fn phase_set(&self) -> PhaseSet {
        self.dates.to_phase_set()
    }
}
