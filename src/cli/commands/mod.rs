pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod parse;

use crate::cli::parser::FilterArgs;
use crate::db::queries::ActivityFilter;
use crate::errors::{AppError, AppResult};
use crate::models::activity_type::ActivityType;
use crate::models::airport::Airport;
use crate::utils::date::parse_optional_filter_date;

/// Validate CLI filters before any database access.
pub fn build_filter(args: &FilterArgs) -> AppResult<ActivityFilter> {
    let location = args
        .location
        .as_deref()
        .map(Airport::new)
        .transpose()?;

    let kind = args
        .kind
        .as_deref()
        .map(|k| ActivityType::from_code(k).ok_or_else(|| AppError::InvalidActivityType(k.to_string())))
        .transpose()?;

    Ok(ActivityFilter {
        occurred_from: parse_optional_filter_date(args.from.as_ref())?,
        occurred_to: parse_optional_filter_date(args.to.as_ref())?,
        location,
        kind,
    })
}
