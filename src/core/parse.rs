use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::save_activities;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::report_format::ReportFormat;
use crate::parser::ActivityParser;
use std::fs;
use std::path::Path;

pub struct ParseLogic;

impl ParseLogic {
    /// Read a report file, refusing anything larger than `max_kb` kilobytes.
    pub fn read_report(path: &Path, max_kb: u64) -> AppResult<String> {
        let size_kb = fs::metadata(path)?.len().div_ceil(1024);
        if size_kb > max_kb {
            return Err(AppError::ReportTooLarge {
                size_kb,
                limit_kb: max_kb,
            });
        }

        Ok(fs::read_to_string(path)?)
    }

    /// Parse `data` and, when a pool is given, store the result in one transaction.
    ///
    /// Stored activities come back with their ids set. A parse failure stores nothing.
    pub fn import(
        pool: Option<&mut DbPool>,
        parser: &dyn ActivityParser,
        data: &str,
        format: ReportFormat,
        source: &str,
    ) -> AppResult<Vec<Activity>> {
        let mut activities = parser.parse(data, format)?;
        tracing::info!(count = activities.len(), %format, source, "report parsed");

        let Some(pool) = pool else {
            return Ok(activities);
        };

        let ids = save_activities(pool, &activities)?;
        for (activity, id) in activities.iter_mut().zip(ids) {
            activity.id = Some(id);
        }

        //
        // Audit trail (non-blocking)
        //
        if let Err(e) = ttlog(
            &pool.conn,
            "import",
            source,
            &format!("Imported {} activities ({format})", activities.len()),
        ) {
            tracing::warn!(error = %e, "failed to write internal log");
        }

        Ok(activities)
    }
}
