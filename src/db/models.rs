//! Shared data models re-exported for database layer consumers.

pub use crate::api::{Event, EventId, EventInfo, PhaseDateFields, RangeReport};
pub use crate::models::{CalendarDate, PhaseName};
pub use crate::services::demand::{DemandMap, PhaseDemands};

/// One per-day demand row, the flat shape served to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DemandRow {
    pub event_id: EventId,
    pub phase: PhaseName,
    pub date: CalendarDate,
    /// Demand value; `None` while not yet entered.
    pub demand: Option<u32>,
}

impl DemandRow {
    pub fn new(
        event_id: EventId,
        phase: PhaseName,
        date: CalendarDate,
        demand: Option<u32>,
    ) -> Self {
        Self {
            event_id,
            phase,
            date,
            demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_row_serde() {
        let row = DemandRow::new(
            EventId::new(5),
            PhaseName::Runtime,
            CalendarDate::parse("2025-03-11").unwrap(),
            Some(120),
        );
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["event_id"], 5);
        assert_eq!(json["phase"], "runtime");
        assert_eq!(json["date"], "2025-03-11");
        assert_eq!(json["demand"], 120);
    }
}
