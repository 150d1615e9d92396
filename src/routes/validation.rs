use serde::{Deserialize, Serialize};

use crate::models::PhaseName;

/// Range policy result for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRangeCheck {
    pub phase: PhaseName,
    /// Signed span `end - start` in days.
    pub span_days: i64,
    pub violated: bool,
}

/// Range policy report over a full phase set. Only phases with both dates
/// populated appear; the span of a half-filled phase is undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeReport {
    pub checks: Vec<PhaseRangeCheck>,
}

impl RangeReport {
    /// True when at least one phase exceeds the allowed span.
    pub fn has_violations(&self) -> bool {
        self.checks.iter().any(|check| check.violated)
    }

    /// The violated checks only.
    pub fn violations(&self) -> impl Iterator<Item = &PhaseRangeCheck> {
        self.checks.iter().filter(|check| check.violated)
    }
}
