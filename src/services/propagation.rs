//! Phase date propagation engine.
//!
//! Editing any one of the six phase boundary dates must leave the three
//! phases as a gapless, non-overlapping sequence. The engine takes the
//! current six-date state plus one edit and derives a fully repaired state:
//! the edited field is authoritative, and repair expands outward from the
//! edit point in both directions until every adjacent pair is back-to-back
//! again.
//!
//! A boundary that is still consistent with the new state is never touched,
//! so a manually widened phase survives edits elsewhere as long as it
//! satisfies the ordering invariant. The engine has no opinion on the
//! 365-day range policy; see [`super::range_policy`].

use crate::models::{Boundary, CalendarDate, PhaseName, PhaseSet};

/// Derive a new [`PhaseSet`] from one boundary edit.
///
/// The returned set always satisfies the contiguity invariant and always
/// carries `value` at the edited position. The input set is never mutated.
pub fn propagate(
    current: &PhaseSet,
    phase: PhaseName,
    boundary: Boundary,
    value: CalendarDate,
) -> PhaseSet {
    let mut next = current.clone();
    next.interval_mut(phase).set_boundary(boundary, Some(value));

    match boundary {
        Boundary::Start => {
            // A new start fixes the tail of everything before it, may push
            // this phase's own end, and then cascades forward.
            repair_backward_from(&mut next, phase);
            let own = next.interval_mut(phase);
            if own.end.map_or(true, |end| end < value) {
                own.end = Some(value);
            }
            repair_forward_from(&mut next, phase);
        }
        Boundary::End => {
            // Mirror image: cascade forward off the new end first, then pull
            // this phase's own start, then fix everything before it.
            repair_forward_from(&mut next, phase);
            let own = next.interval_mut(phase);
            if own.start.map_or(true, |start| start > value) {
                own.start = Some(value);
            }
            repair_backward_from(&mut next, phase);
        }
    }

    next
}

/// Parse-and-propagate for raw form input. A string that is not a valid
/// calendar date leaves the set unchanged; bad input never corrupts state.
pub fn propagate_raw(
    current: &PhaseSet,
    phase: PhaseName,
    boundary: Boundary,
    raw_value: &str,
) -> PhaseSet {
    match CalendarDate::parse(raw_value) {
        Some(value) => propagate(current, phase, boundary, value),
        None => current.clone(),
    }
}

/// Walk from `phase` toward disassembly, forcing each later phase to start
/// the day after its predecessor ends and raising its end when the existing
/// end would fall before the new start.
fn repair_forward_from(set: &mut PhaseSet, phase: PhaseName) {
    let mut current = phase;
    while let Some(later) = current.successor() {
        let Some(prev_end) = set.interval(current).end else {
            return;
        };
        let start = prev_end.next_day();
        let interval = set.interval_mut(later);
        interval.start = Some(start);
        if interval.end.map_or(true, |end| end < start) {
            interval.end = Some(start);
        }
        current = later;
    }
}

/// Walk from `phase` toward assembly, forcing each earlier phase to end the
/// day before its successor starts and lowering its start when the existing
/// start would fall after the new end.
fn repair_backward_from(set: &mut PhaseSet, phase: PhaseName) {
    let mut current = phase;
    while let Some(earlier) = current.predecessor() {
        let Some(next_start) = set.interval(current).start else {
            return;
        };
        let end = next_start.prev_day();
        let interval = set.interval_mut(earlier);
        interval.end = Some(end);
        if interval.start.map_or(true, |start| start > end) {
            interval.start = Some(end);
        }
        current = earlier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhaseInterval;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).expect("valid test date")
    }

    fn interval(start: &str, end: &str) -> PhaseInterval {
        PhaseInterval::new(Some(date(start)), Some(date(end)))
    }

    fn contiguous_set() -> PhaseSet {
        PhaseSet {
            assembly: interval("2025-03-08", "2025-03-10"),
            runtime: interval("2025-03-11", "2025-03-15"),
            disassembly: interval("2025-03-16", "2025-03-17"),
        }
    }

    #[test]
    fn test_first_edit_on_empty_draft_populates_all_six() {
        let set = propagate(
            &PhaseSet::default(),
            PhaseName::Assembly,
            Boundary::Start,
            date("2025-03-10"),
        );

        assert_eq!(set.assembly, interval("2025-03-10", "2025-03-10"));
        assert_eq!(set.runtime, interval("2025-03-11", "2025-03-11"));
        assert_eq!(set.disassembly, interval("2025-03-12", "2025-03-12"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_extending_runtime_end_advances_disassembly() {
        let set = propagate(
            &PhaseSet::default(),
            PhaseName::Assembly,
            Boundary::Start,
            date("2025-03-10"),
        );
        let set = propagate(&set, PhaseName::Runtime, Boundary::End, date("2025-03-20"));

        assert_eq!(set.disassembly, interval("2025-03-21", "2025-03-21"));
        // Assembly was already consistent and must survive untouched.
        assert_eq!(set.assembly, interval("2025-03-10", "2025-03-10"));
        assert_eq!(set.runtime, interval("2025-03-11", "2025-03-20"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_runtime_start_repairs_assembly_end() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Runtime,
            Boundary::Start,
            date("2025-03-13"),
        );

        assert_eq!(set.assembly, interval("2025-03-08", "2025-03-12"));
        assert_eq!(set.runtime, interval("2025-03-13", "2025-03-15"));
        assert_eq!(set.disassembly, interval("2025-03-16", "2025-03-17"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_runtime_start_before_assembly_start_collapses_assembly() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Runtime,
            Boundary::Start,
            date("2025-03-05"),
        );

        // Assembly must end on 03-04; its old start (03-08) now exceeds that
        // end and is pulled down with it.
        assert_eq!(set.assembly, interval("2025-03-04", "2025-03-04"));
        assert_eq!(set.runtime, interval("2025-03-05", "2025-03-15"));
        assert_eq!(set.disassembly, interval("2025-03-16", "2025-03-17"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_disassembly_start_repairs_both_earlier_phases() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Disassembly,
            Boundary::Start,
            date("2025-03-09"),
        );

        assert_eq!(set.runtime, interval("2025-03-08", "2025-03-08"));
        assert_eq!(set.assembly, interval("2025-03-07", "2025-03-07"));
        assert_eq!(set.disassembly, interval("2025-03-09", "2025-03-17"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_assembly_end_cascades_forward() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Assembly,
            Boundary::End,
            date("2025-03-20"),
        );

        assert_eq!(set.assembly, interval("2025-03-08", "2025-03-20"));
        assert_eq!(set.runtime, interval("2025-03-21", "2025-03-21"));
        assert_eq!(set.disassembly, interval("2025-03-22", "2025-03-22"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_disassembly_end_pulls_start_when_needed() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Disassembly,
            Boundary::End,
            date("2025-03-14"),
        );

        // New end precedes the old start (03-16), so the start is pulled to
        // it and the earlier phases shrink to stay back-to-back.
        assert_eq!(set.disassembly, interval("2025-03-14", "2025-03-14"));
        assert_eq!(set.runtime, interval("2025-03-11", "2025-03-13"));
        assert_eq!(set.assembly, interval("2025-03-08", "2025-03-10"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_widening_disassembly_end_leaves_earlier_phases_alone() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Disassembly,
            Boundary::End,
            date("2025-04-01"),
        );

        assert_eq!(set.disassembly, interval("2025-03-16", "2025-04-01"));
        assert_eq!(set.runtime, contiguous_set().runtime);
        assert_eq!(set.assembly, contiguous_set().assembly);
    }

    #[test]
    fn test_edit_on_partially_filled_draft() {
        // Only disassembly.end is known; editing disassembly.start must fill
        // in everything before it.
        let draft = PhaseSet {
            disassembly: PhaseInterval::new(None, Some(date("2025-03-17"))),
            ..PhaseSet::default()
        };
        let set = propagate(
            &draft,
            PhaseName::Disassembly,
            Boundary::Start,
            date("2025-03-16"),
        );

        assert_eq!(set.disassembly, interval("2025-03-16", "2025-03-17"));
        assert_eq!(set.runtime, interval("2025-03-15", "2025-03-15"));
        assert_eq!(set.assembly, interval("2025-03-14", "2025-03-14"));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_edited_value_is_authoritative() {
        let set = propagate(
            &contiguous_set(),
            PhaseName::Runtime,
            Boundary::End,
            date("2025-02-01"),
        );
        assert_eq!(set.runtime.end, Some(date("2025-02-01")));
        assert!(set.is_contiguous());
    }

    #[test]
    fn test_propagate_is_idempotent() {
        let once = propagate(
            &contiguous_set(),
            PhaseName::Runtime,
            Boundary::Start,
            date("2025-03-05"),
        );
        let twice = propagate(&once, PhaseName::Runtime, Boundary::Start, date("2025-03-05"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_input_is_a_no_op() {
        let current = contiguous_set();
        for garbage in ["", "not-a-date", "2025-02-30", "2025/03/10", "tomorrow"] {
            let set = propagate_raw(&current, PhaseName::Runtime, Boundary::Start, garbage);
            assert_eq!(set, current, "input {:?} must not change the set", garbage);
        }
    }

    #[test]
    fn test_propagate_raw_parses_and_applies() {
        let set = propagate_raw(
            &PhaseSet::default(),
            PhaseName::Assembly,
            Boundary::Start,
            "2025-03-10",
        );
        assert_eq!(set.assembly.start, Some(date("2025-03-10")));
        assert!(set.is_contiguous());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = CalendarDate> {
            (0i64..7300).prop_map(|offset| {
                CalendarDate::from_ymd(2020, 1, 1)
                    .expect("valid base date")
                    .add_days(offset)
                    .expect("offset stays in range")
            })
        }

        fn arb_boundary_value() -> impl Strategy<Value = Option<CalendarDate>> {
            proptest::option::of(arb_date())
        }

        fn arb_phase_set() -> impl Strategy<Value = PhaseSet> {
            (
                (arb_boundary_value(), arb_boundary_value()),
                (arb_boundary_value(), arb_boundary_value()),
                (arb_boundary_value(), arb_boundary_value()),
            )
                .prop_map(|(a, r, d)| PhaseSet {
                    assembly: PhaseInterval::new(a.0, a.1),
                    runtime: PhaseInterval::new(r.0, r.1),
                    disassembly: PhaseInterval::new(d.0, d.1),
                })
        }

        fn arb_phase() -> impl Strategy<Value = PhaseName> {
            prop_oneof![
                Just(PhaseName::Assembly),
                Just(PhaseName::Runtime),
                Just(PhaseName::Disassembly),
            ]
        }

        fn arb_boundary() -> impl Strategy<Value = Boundary> {
            prop_oneof![Just(Boundary::Start), Just(Boundary::End)]
        }

        proptest! {
            #[test]
            fn any_edit_restores_contiguity(
                set in arb_phase_set(),
                phase in arb_phase(),
                boundary in arb_boundary(),
                value in arb_date(),
            ) {
                let next = propagate(&set, phase, boundary, value);
                prop_assert!(next.is_complete());
                prop_assert!(next.is_contiguous());
            }

            #[test]
            fn edited_boundary_keeps_its_value(
                set in arb_phase_set(),
                phase in arb_phase(),
                boundary in arb_boundary(),
                value in arb_date(),
            ) {
                let next = propagate(&set, phase, boundary, value);
                prop_assert_eq!(next.interval(phase).boundary(boundary), Some(value));
            }

            #[test]
            fn repeating_an_edit_changes_nothing(
                set in arb_phase_set(),
                phase in arb_phase(),
                boundary in arb_boundary(),
                value in arb_date(),
            ) {
                let once = propagate(&set, phase, boundary, value);
                let twice = propagate(&once, phase, boundary, value);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn input_set_is_never_mutated(
                set in arb_phase_set(),
                phase in arb_phase(),
                boundary in arb_boundary(),
                value in arb_date(),
            ) {
                let snapshot = set.clone();
                let _ = propagate(&set, phase, boundary, value);
                prop_assert_eq!(set, snapshot);
            }
        }
    }
}
