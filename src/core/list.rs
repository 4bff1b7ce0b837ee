use crate::errors::{AppError, AppResult};
use crate::models::activity::{Activity, DATETIME_FORMAT};
use crate::utils::table::Table;
use chrono::NaiveDateTime;

const HEADERS: [&str; 7] = ["ID", "TYPE", "OCCURRED AT", "FROM", "TO", "STD", "STA"];

pub struct ListLogic;

impl ListLogic {
    pub fn render_table(activities: &[Activity]) -> String {
        let mut table = Table::with_headers(&HEADERS);
        for a in activities {
            table.add_row(vec![
                a.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
                a.kind.to_db_str().to_string(),
                a.occurred_at_str(),
                a.location.code().to_string(),
                a.to.as_ref()
                    .map(|t| t.code().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                time_or_dash(a.scheduled_time_departure),
                time_or_dash(a.scheduled_time_arrival),
            ]);
        }
        table.render()
    }

    pub fn render_json(activities: &[Activity]) -> AppResult<String> {
        serde_json::to_string_pretty(activities)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
    }
}

fn time_or_dash(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}
