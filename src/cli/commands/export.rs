use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = build_filter(filter)?;
        let pool = DbPool::open_initialized(&cfg.database)?;

        let count = ExportLogic::export(&pool, *format, file, &filter, *force)?;

        if count == 0 {
            return Ok(());
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {count} activities ({})", format.as_str()),
        ) {
            tracing::warn!(error = %e, "failed to write internal log");
        }
    }
    Ok(())
}
