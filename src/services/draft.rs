//! Draft edit orchestration.
//!
//! One user edit to a single date field is one complete state transition:
//! propagate the edit across all six boundaries, check the range policy on
//! the result, and rebuild the per-day demand maps against the repaired
//! intervals. Callers replace their draft wholesale with the returned
//! state; nothing here mutates in place, so a half-applied edit can never
//! become visible.

use crate::models::{Boundary, PhaseName, PhaseSet};
use crate::routes::validation::RangeReport;
use crate::services::demand::PhaseDemands;
use crate::services::{propagation, range_policy};

/// The complete outcome of a single boundary edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftUpdate {
    /// Repaired six-date state; always contiguous.
    pub dates: PhaseSet,
    /// Range policy result for the repaired state. Informational only.
    pub range_report: RangeReport,
    /// Demand maps rebuilt against the repaired intervals.
    pub demands: PhaseDemands,
}

/// Apply one raw date edit to a draft.
///
/// An unparseable `raw_value` leaves the dates untouched; the demand maps
/// are still rebuilt so their key sets always match the current intervals.
pub fn apply_edit(
    dates: &PhaseSet,
    demands: &PhaseDemands,
    phase: PhaseName,
    boundary: Boundary,
    raw_value: &str,
) -> DraftUpdate {
    let next = propagation::propagate_raw(dates, phase, boundary, raw_value);
    let range_report = range_policy::check_ranges(&next);
    let demands = demands.regenerate_all(&next);
    DraftUpdate {
        dates: next,
        range_report,
        demands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarDate;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).expect("valid test date")
    }

    #[test]
    fn test_edit_flows_through_to_demand_maps() {
        let update = apply_edit(
            &PhaseSet::default(),
            &PhaseDemands::default(),
            PhaseName::Assembly,
            Boundary::Start,
            "2025-03-10",
        );

        assert!(update.dates.is_contiguous());
        assert!(!update.range_report.has_violations());
        assert_eq!(update.demands.assembly.len(), 1);
        assert_eq!(update.demands.runtime.len(), 1);
        assert_eq!(update.demands.disassembly.len(), 1);
        assert_eq!(update.demands.runtime.get(&date("2025-03-11")), Some(&None));
    }

    #[test]
    fn test_entered_values_survive_a_shift() {
        let first = apply_edit(
            &PhaseSet::default(),
            &PhaseDemands::default(),
            PhaseName::Assembly,
            Boundary::Start,
            "2025-03-10",
        );
        let mut demands = first.demands;
        demands.assembly.insert(date("2025-03-10"), Some(25));

        // Widen assembly by one day; the entered value must be preserved.
        let second = apply_edit(
            &first.dates,
            &demands,
            PhaseName::Assembly,
            Boundary::End,
            "2025-03-11",
        );

        assert_eq!(second.demands.assembly.len(), 2);
        assert_eq!(second.demands.assembly.get(&date("2025-03-10")), Some(&Some(25)));
        assert_eq!(second.demands.assembly.get(&date("2025-03-11")), Some(&None));
    }

    #[test]
    fn test_invalid_value_keeps_dates() {
        let first = apply_edit(
            &PhaseSet::default(),
            &PhaseDemands::default(),
            PhaseName::Assembly,
            Boundary::Start,
            "2025-03-10",
        );
        let second = apply_edit(
            &first.dates,
            &first.demands,
            PhaseName::Runtime,
            Boundary::End,
            "garbage",
        );

        assert_eq!(second.dates, first.dates);
        assert_eq!(second.demands, first.demands);
    }

    #[test]
    fn test_oversized_phase_is_reported_not_repaired() {
        let first = apply_edit(
            &PhaseSet::default(),
            &PhaseDemands::default(),
            PhaseName::Disassembly,
            Boundary::Start,
            "2025-01-01",
        );
        let second = apply_edit(
            &first.dates,
            &first.demands,
            PhaseName::Disassembly,
            Boundary::End,
            "2026-06-01",
        );

        assert!(second.dates.is_contiguous());
        assert_eq!(second.dates.disassembly.end, Some(date("2026-06-01")));
        let violated: Vec<_> = second
            .range_report
            .violations()
            .map(|check| check.phase)
            .collect();
        assert_eq!(violated, vec![PhaseName::Disassembly]);
    }
}
