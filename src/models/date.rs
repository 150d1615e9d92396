use serde::*;

/// Calendar date with whole-day precision.
/// Serialized as an ISO `YYYY-MM-DD` string; carries no time zone or
/// time-of-day component, so day arithmetic can never shift across DST
/// boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(chrono::NaiveDate);

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl CalendarDate {
    /// Create a new calendar date from a chrono date.
    pub fn new(date: chrono::NaiveDate) -> Self {
        Self(date)
    }

    /// Create from year/month/day. Returns `None` for out-of-range components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        chrono::NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
            .ok()
            .map(Self)
    }

    /// Raw chrono value.
    pub fn value(&self) -> chrono::NaiveDate {
        self.0
    }

    /// The following day. Saturates at the representable date limits.
    pub fn next_day(&self) -> Self {
        self.0.succ_opt().map(Self).unwrap_or(*self)
    }

    /// The preceding day. Saturates at the representable date limits.
    pub fn prev_day(&self) -> Self {
        self.0.pred_opt().map(Self).unwrap_or(*self)
    }

    /// Shift by a signed number of days.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(chrono::TimeDelta::days(days)).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid calendar date: {}", s))
    }
}
