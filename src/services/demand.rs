//! Per-day demand maps.
//!
//! Each phase carries a table of expected vehicle demand keyed by calendar
//! day. Whenever the phase's date interval changes, the key set is rebuilt
//! from the new interval: days that left the range are dropped, days still
//! in range keep their entered value verbatim, and newly covered days start
//! blank. Values are never recomputed here, only key membership.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, PhaseInterval, PhaseName, PhaseSet};

/// Demand values keyed by day. `None` marks a day whose demand has not been
/// entered yet.
pub type DemandMap = BTreeMap<CalendarDate, Option<u32>>;

/// The three per-phase demand maps of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDemands {
    #[serde(default)]
    pub assembly: DemandMap,
    #[serde(default)]
    pub runtime: DemandMap,
    #[serde(default)]
    pub disassembly: DemandMap,
}

impl PhaseDemands {
    pub fn map(&self, phase: PhaseName) -> &DemandMap {
        match phase {
            PhaseName::Assembly => &self.assembly,
            PhaseName::Runtime => &self.runtime,
            PhaseName::Disassembly => &self.disassembly,
        }
    }

    pub fn map_mut(&mut self, phase: PhaseName) -> &mut DemandMap {
        match phase {
            PhaseName::Assembly => &mut self.assembly,
            PhaseName::Runtime => &mut self.runtime,
            PhaseName::Disassembly => &mut self.disassembly,
        }
    }

    /// Rebuild all three maps against a (possibly changed) set of phase
    /// intervals.
    pub fn regenerate_all(&self, dates: &PhaseSet) -> PhaseDemands {
        PhaseDemands {
            assembly: regenerate(&dates.assembly, &self.assembly),
            runtime: regenerate(&dates.runtime, &self.runtime),
            disassembly: regenerate(&dates.disassembly, &self.disassembly),
        }
    }
}

/// Rebuild one demand map against a new interval.
///
/// The result holds exactly the days of the closed interval `[start, end]`.
/// An interval missing a boundary (or reversed) yields an empty map.
pub fn regenerate(interval: &PhaseInterval, existing: &DemandMap) -> DemandMap {
    interval
        .days()
        .into_iter()
        .map(|day| (day, existing.get(&day).copied().flatten()))
        .collect()
}
