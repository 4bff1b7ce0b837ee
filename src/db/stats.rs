use crate::db::pool::DbPool;
use crate::db::queries::count_by_type;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ACTIVITIES, PER TYPE
    //
    let per_type = count_by_type(pool)?;
    let total: i64 = per_type.iter().map(|(_, n)| n).sum();
    println!(
        "{}• Total activities:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    for (kind, n) in per_type {
        println!("    {GREY}{:<4}{RESET} {:<10} {}", kind.to_db_str(), kind.label(), n);
    }

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(occurred_at), MAX(occurred_at) FROM activities",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match range {
        Some((Some(first), Some(last))) => {
            println!("{}• Range:{} {} → {}", CYAN, RESET, first, last);
        }
        _ => println!("{}• Range:{} {}(empty){}", CYAN, RESET, GREY, RESET),
    }

    Ok(())
}
