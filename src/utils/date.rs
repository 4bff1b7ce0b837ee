use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Date format accepted by the query filters (`DD-MM-YYYY`).
pub const FILTER_DATE_FORMAT: &str = "%d-%m-%Y";

pub fn parse_filter_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), FILTER_DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(format!("{s} (expected DD-MM-YYYY)")))
}

pub fn parse_optional_filter_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_filter_date(s)).transpose()
}
