use super::{activity_type::ActivityType, airport::Airport};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>, // ⇔ activities.id, None until stored
    #[serde(rename = "type")]
    pub kind: ActivityType, // ⇔ activities.type ('DO','SBY','FLT','CI','CO','UNK')
    pub location: Airport, // ⇔ activities.location
    pub to: Option<Airport>, // ⇔ activities."to", flights only
    #[serde(serialize_with = "ser_datetime")]
    pub occurred_at: NaiveDateTime,
    #[serde(serialize_with = "ser_opt_datetime")]
    pub scheduled_time_departure: Option<NaiveDateTime>,
    #[serde(serialize_with = "ser_opt_datetime")]
    pub scheduled_time_arrival: Option<NaiveDateTime>,
}

impl Activity {
    /// Flight-only fields are either all present (flights) or all absent.
    pub fn is_consistent(&self) -> bool {
        let flight_fields = [
            self.to.is_some(),
            self.scheduled_time_departure.is_some(),
            self.scheduled_time_arrival.is_some(),
        ];
        if self.kind.is_flight() {
            flight_fields.iter().all(|f| *f)
        } else {
            flight_fields.iter().all(|f| !*f)
        }
    }

    pub fn occurred_at_str(&self) -> String {
        self.occurred_at.format(DATETIME_FORMAT).to_string()
    }
}

fn ser_datetime<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
}

fn ser_opt_datetime<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
    match dt {
        Some(dt) => ser_datetime(dt, s),
        None => s.serialize_none(),
    }
}
