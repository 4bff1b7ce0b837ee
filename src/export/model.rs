// src/export/model.rs

use crate::models::activity::{Activity, DATETIME_FORMAT};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat activity record for CSV / JSON export. Absent values are empty strings.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ActivityExport {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub to: String,
    pub occurred_at: String,
    pub scheduled_time_departure: String,
    pub scheduled_time_arrival: String,
}

fn fmt_opt(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format(DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

impl From<&Activity> for ActivityExport {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.unwrap_or_default(),
            kind: a.kind.to_db_str().to_string(),
            location: a.location.code().to_string(),
            to: a.to.as_ref().map(|t| t.code().to_string()).unwrap_or_default(),
            occurred_at: a.occurred_at_str(),
            scheduled_time_departure: fmt_opt(a.scheduled_time_departure),
            scheduled_time_arrival: fmt_opt(a.scheduled_time_arrival),
        }
    }
}
