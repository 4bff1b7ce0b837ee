//! Period anchor: the caption stating the first day of the roster.

use super::element_text;
use super::structure::PERIOD_ANCHOR;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Period: (\d{2}[A-Za-z]{3}\d{2})").unwrap_or_else(|e| panic!("{e}"))
});

/// Start date of the period stated by the document's anchor element.
pub fn resolve(document: &Html) -> AppResult<NaiveDate> {
    let text = document
        .select(&PERIOD_ANCHOR)
        .next()
        .map(element_text)
        .unwrap_or_default();

    parse_period(&text)
}

/// Extract `DDMmmYY` following `Period: `, e.g. `Period: 10Jan22 to 23Jan22` → 2022-01-10.
pub fn parse_period(text: &str) -> AppResult<NaiveDate> {
    let malformed = || AppError::MalformedPeriodAnchor(text.to_string());

    let token = PERIOD
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or_else(malformed)?;

    NaiveDate::parse_from_str(token.as_str(), "%d%b%y").map_err(|_| malformed())
}
