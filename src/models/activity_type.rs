use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of schedule event produced from a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    DayOff,
    StandBy,
    Flight,
    CheckIn,
    CheckOut,
    Unknown,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::DayOff,
        ActivityType::StandBy,
        ActivityType::Flight,
        ActivityType::CheckIn,
        ActivityType::CheckOut,
        ActivityType::Unknown,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActivityType::DayOff => "DO",
            ActivityType::StandBy => "SBY",
            ActivityType::Flight => "FLT",
            ActivityType::CheckIn => "CI",
            ActivityType::CheckOut => "CO",
            ActivityType::Unknown => "UNK",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "DO" => Some(ActivityType::DayOff),
            "SBY" => Some(ActivityType::StandBy),
            "FLT" => Some(ActivityType::Flight),
            "CI" => Some(ActivityType::CheckIn),
            "CO" => Some(ActivityType::CheckOut),
            "UNK" => Some(ActivityType::Unknown),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        ActivityType::from_db_str(&code.trim().to_uppercase())
    }

    pub fn is_flight(&self) -> bool {
        matches!(self, ActivityType::Flight)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::DayOff => "Day off",
            ActivityType::StandBy => "Stand-by",
            ActivityType::Flight => "Flight",
            ActivityType::CheckIn => "Check-in",
            ActivityType::CheckOut => "Check-out",
            ActivityType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl Serialize for ActivityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_db_str())
    }
}
