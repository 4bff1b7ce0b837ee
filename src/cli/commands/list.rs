use crate::cli::commands::build_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::db::queries::find_activities;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, json } = cmd {
        let filter = build_filter(filter)?;
        let pool = DbPool::open_initialized(&cfg.database)?;

        let activities = find_activities(&pool, &filter)?;

        if *json {
            println!("{}", ListLogic::render_json(&activities)?);
        } else if activities.is_empty() {
            println!("No activities found.");
        } else {
            print!("{}", ListLogic::render_table(&activities));
        }
    }
    Ok(())
}
