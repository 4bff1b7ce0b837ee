//! Per-row decisions: which activities a row produces.

use super::layout::{Column, RowView};
use crate::models::activity_type::ActivityType;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{2})").unwrap_or_else(|e| panic!("{e}")));
static FLIGHT_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}\d+$").unwrap_or_else(|e| panic!("{e}")));

/// Wall-clock value read from a 4-digit `HHMM` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockTime {
    /// `day` at midnight plus this many hours and minutes; `2400` lands on the next day.
    pub fn on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(NaiveTime::MIN)
            + Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
    }
}

/// First `\d{2}\d{2}` group of a field. Suffixes such as `+1` or `-1` are ignored.
pub fn decode_time(field: &str) -> Option<ClockTime> {
    let caps = HHMM.captures(field)?;
    Some(ClockTime {
        hours: caps[1].parse().ok()?,
        minutes: caps[2].parse().ok()?,
    })
}

/// Classification of the activity-code column. Exactly one applies to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duty {
    Flight,
    DayOff,
    StandBy,
    Unknown,
}

impl Duty {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            Duty::Flight => ActivityType::Flight,
            Duty::DayOff => ActivityType::DayOff,
            Duty::StandBy => ActivityType::StandBy,
            Duty::Unknown => ActivityType::Unknown,
        }
    }
}

/// Precedence: flight number, then `OFF`, then `SBY`, else unknown.
pub fn classify_code(code: &str) -> Duty {
    if FLIGHT_CODE.is_match(code) {
        Duty::Flight
    } else if code.contains("OFF") {
        Duty::DayOff
    } else if code.contains("SBY") {
        Duty::StandBy
    } else {
        Duty::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlan {
    pub check_in: Option<ClockTime>,
    pub check_out: Option<ClockTime>,
    pub duty: Duty,
}

impl RowPlan {
    /// Number of activities the row yields, between 1 and 3.
    pub fn activity_count(&self) -> usize {
        1 + usize::from(self.check_in.is_some()) + usize::from(self.check_out.is_some())
    }
}

pub fn classify(row: &RowView<'_>) -> RowPlan {
    RowPlan {
        check_in: decode_time(row.get(Column::CheckIn)),
        check_out: decode_time(row.get(Column::CheckOut)),
        duty: classify_code(row.get(Column::Activity)),
    }
}
