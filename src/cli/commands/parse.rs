use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::parse::ParseLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::activity_type::ActivityType;
use crate::parser::ParserRegistry;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_type};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse {
        file,
        format,
        dry_run,
        json,
    } = cmd
    {
        //
        // 1. Resolve format and read the report
        //
        let format = match format {
            Some(f) => *f,
            None => cfg.report_format()?,
        };
        let data = ParseLogic::read_report(Path::new(file), cfg.max_report_kb)?;

        //
        // 2. Parse (and store)
        //
        let registry = ParserRegistry::with_defaults();
        let activities = if *dry_run {
            ParseLogic::import(None, &registry, &data, format, file)?
        } else {
            let mut pool = DbPool::open_initialized(&cfg.database)?;
            ParseLogic::import(Some(&mut pool), &registry, &data, format, file)?
        };

        //
        // 3. Output
        //
        if *json {
            println!("{}", ListLogic::render_json(&activities)?);
            return Ok(());
        }

        print!("{}", ListLogic::render_table(&activities));
        for kind in ActivityType::ALL {
            let n = activities.iter().filter(|a| a.kind == kind).count();
            if n > 0 {
                info(format!("{}{:<10}{RESET} {n}", color_for_type(kind), kind.label()));
            }
        }

        if *dry_run {
            info(format!("Dry run: {} activities parsed, nothing stored", activities.len()));
        } else {
            success(format!("Imported {} activities from {file}", activities.len()));
        }
    }
    Ok(())
}
