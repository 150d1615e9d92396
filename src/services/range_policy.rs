//! Phase range policy.
//!
//! A single phase may span at most one year. The check is informational
//! only: it never mutates the dates, and the caller decides whether a
//! violation blocks submission or is merely surfaced as a warning.
//! Auto-shrinking a user-chosen range would be surprising, so repair is
//! deliberately out of scope here.

use crate::models::{PhaseName, PhaseSet};
use crate::routes::validation::{PhaseRangeCheck, RangeReport};

/// Maximum allowed span of a single phase, `end - start` in days.
pub const MAX_PHASE_SPAN_DAYS: i64 = 365;

/// Check every fully dated phase against the span limit.
///
/// Phases with an unset boundary are skipped; their span is not yet
/// defined. The report carries the computed span so callers can render it.
pub fn check_ranges(set: &PhaseSet) -> RangeReport {
    let mut checks = Vec::new();
    for phase in PhaseName::SEQUENCE {
        if let Some(span_days) = set.interval(phase).span_days() {
            checks.push(PhaseRangeCheck {
                phase,
                span_days,
                violated: span_days > MAX_PHASE_SPAN_DAYS,
            });
        }
    }
    RangeReport { checks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarDate, PhaseInterval};

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).expect("valid test date")
    }

    fn interval(start: &str, end: &str) -> PhaseInterval {
        PhaseInterval::new(Some(date(start)), Some(date(end)))
    }

    #[test]
    fn test_all_phases_within_limit() {
        let set = PhaseSet {
            assembly: interval("2025-03-08", "2025-03-10"),
            runtime: interval("2025-03-11", "2025-03-15"),
            disassembly: interval("2025-03-16", "2025-03-17"),
        };
        let report = check_ranges(&set);
        assert_eq!(report.checks.len(), 3);
        assert!(!report.has_violations());
    }

    #[test]
    fn test_exactly_365_days_is_allowed() {
        let set = PhaseSet {
            runtime: interval("2025-01-01", "2026-01-01"),
            ..PhaseSet::default()
        };
        let report = check_ranges(&set);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].span_days, 365);
        assert!(!report.checks[0].violated);
    }

    #[test]
    fn test_366_days_is_flagged() {
        let set = PhaseSet {
            disassembly: interval("2025-01-01", "2026-01-02"),
            ..PhaseSet::default()
        };
        let report = check_ranges(&set);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].phase, PhaseName::Disassembly);
        assert_eq!(report.checks[0].span_days, 366);
        assert!(report.checks[0].violated);
        assert!(report.has_violations());
    }

    #[test]
    fn test_incomplete_phases_are_skipped() {
        let set = PhaseSet {
            assembly: PhaseInterval::new(Some(date("2025-03-08")), None),
            runtime: interval("2025-03-11", "2025-03-15"),
            ..PhaseSet::default()
        };
        let report = check_ranges(&set);
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].phase, PhaseName::Runtime);
    }

    #[test]
    fn test_check_does_not_mutate() {
        let set = PhaseSet {
            runtime: interval("2020-01-01", "2025-01-01"),
            ..PhaseSet::default()
        };
        let snapshot = set.clone();
        let report = check_ranges(&set);
        assert!(report.has_violations());
        assert_eq!(set, snapshot);
    }
}
