use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info: show_info, migrate } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            let applied = run_pending_migrations(&pool.conn)?;
            if applied.is_empty() {
                info("Database schema is up to date.");
            } else {
                success(format!("Applied migrations: {}", applied.join(", ")));
            }
        }

        if *show_info {
            run_pending_migrations(&pool.conn)?;
            print_db_info(&pool, &cfg.database)?;
        }
    }
    Ok(())
}
