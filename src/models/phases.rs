//! Event phase model.
//!
//! An event runs in three sequential operational phases: assembly (setup),
//! runtime (the event itself), disassembly (teardown). The phases form a
//! single gapless, non-overlapping sequence of date intervals: each phase
//! begins the day after the previous one ends.

use serde::{Deserialize, Serialize};

use super::date::CalendarDate;

/// The three operational phases of an event, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    Assembly,
    Runtime,
    Disassembly,
}

impl PhaseName {
    /// All phases in sequence order.
    pub const SEQUENCE: [PhaseName; 3] =
        [PhaseName::Assembly, PhaseName::Runtime, PhaseName::Disassembly];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::Assembly => "assembly",
            PhaseName::Runtime => "runtime",
            PhaseName::Disassembly => "disassembly",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PhaseName::Assembly => "Assembly",
            PhaseName::Runtime => "Runtime",
            PhaseName::Disassembly => "Disassembly",
        }
    }

    /// The phase immediately before this one in sequence order.
    pub fn predecessor(&self) -> Option<PhaseName> {
        match self {
            PhaseName::Assembly => None,
            PhaseName::Runtime => Some(PhaseName::Assembly),
            PhaseName::Disassembly => Some(PhaseName::Runtime),
        }
    }

    /// The phase immediately after this one in sequence order.
    pub fn successor(&self) -> Option<PhaseName> {
        match self {
            PhaseName::Assembly => Some(PhaseName::Runtime),
            PhaseName::Runtime => Some(PhaseName::Disassembly),
            PhaseName::Disassembly => None,
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PhaseName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assembly" => Ok(PhaseName::Assembly),
            "runtime" => Ok(PhaseName::Runtime),
            "disassembly" => Ok(PhaseName::Disassembly),
            _ => Err(format!("Unknown phase name: {}", s)),
        }
    }
}

/// One of the two date fields of a phase interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Start => "start",
            Boundary::End => "end",
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Boundary::Start),
            "end" => Ok(Boundary::End),
            _ => Err(format!("Unknown boundary: {}", s)),
        }
    }
}

/// Date interval of a single phase. Either field may still be unset while
/// a draft is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseInterval {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl PhaseInterval {
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// Both boundaries populated.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both boundaries populated and correctly ordered.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        }
    }

    /// Signed span `end - start` in days, when both boundaries are set.
    pub fn span_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(start.days_until(&end)),
            _ => None,
        }
    }

    /// Read one boundary.
    pub fn boundary(&self, boundary: Boundary) -> Option<CalendarDate> {
        match boundary {
            Boundary::Start => self.start,
            Boundary::End => self.end,
        }
    }

    /// Write one boundary.
    pub fn set_boundary(&mut self, boundary: Boundary, value: Option<CalendarDate>) {
        match boundary {
            Boundary::Start => self.start = value,
            Boundary::End => self.end = value,
        }
    }

    /// Every day of the closed interval `[start, end]`, in order.
    /// Empty when either boundary is unset or the interval is reversed.
    pub fn days(&self) -> Vec<CalendarDate> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Vec::new();
        };
        if start > end {
            return Vec::new();
        }
        let mut days = Vec::with_capacity(start.days_until(&end) as usize + 1);
        let mut day = start;
        while day <= end {
            days.push(day);
            day = day.next_day();
        }
        days
    }
}

/// The full six-date state of an event draft: one interval per phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSet {
    pub assembly: PhaseInterval,
    pub runtime: PhaseInterval,
    pub disassembly: PhaseInterval,
}

impl PhaseSet {
    pub fn interval(&self, phase: PhaseName) -> &PhaseInterval {
        match phase {
            PhaseName::Assembly => &self.assembly,
            PhaseName::Runtime => &self.runtime,
            PhaseName::Disassembly => &self.disassembly,
        }
    }

    pub fn interval_mut(&mut self, phase: PhaseName) -> &mut PhaseInterval {
        match phase {
            PhaseName::Assembly => &mut self.assembly,
            PhaseName::Runtime => &mut self.runtime,
            PhaseName::Disassembly => &mut self.disassembly,
        }
    }

    /// All six boundaries populated.
    pub fn is_complete(&self) -> bool {
        PhaseName::SEQUENCE
            .iter()
            .all(|phase| self.interval(*phase).is_complete())
    }

    /// Check the contiguity invariant among populated dates: each phase is
    /// internally ordered, and each phase starts the day after the previous
    /// one ends. Pairs with an unset side are not checked, so a partially
    /// filled draft is still considered contiguous.
    pub fn is_contiguous(&self) -> bool {
        for phase in PhaseName::SEQUENCE {
            let interval = self.interval(phase);
            if interval.is_complete() && !interval.is_ordered() {
                return false;
            }
            if let Some(next_phase) = phase.successor() {
                if let (Some(end), Some(next_start)) =
                    (interval.end, self.interval(next_phase).start)
                {
                    if next_start != end.next_day() {
                        return false;
                    }
                }
            }
        }
        true
    }
}
