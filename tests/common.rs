#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn crew() -> Command {
    cargo_bin_cmd!("crewroster")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewroster.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn fixture_path() -> String {
    format!("{}/tests/fixtures/roster.html", env!("CARGO_MANIFEST_DIR"))
}

/// Two-week roster: 5 data rows yielding 10 activities.
pub fn roster_html() -> String {
    fs::read_to_string(fixture_path()).expect("read roster fixture")
}

/// Cells of one activity-grid row (18 columns, unread ones empty).
#[allow(clippy::too_many_arguments)]
pub fn row(
    date: &str,
    check_in: &str,
    check_out: &str,
    code: &str,
    from: &str,
    std: &str,
    to: &str,
    sta: &str,
) -> Vec<String> {
    let mut cells = vec![String::new(); 18];
    cells[1] = date.to_string();
    cells[5] = check_in.to_string();
    cells[7] = check_out.to_string();
    cells[8] = code.to_string();
    cells[11] = from.to_string();
    cells[13] = std.to_string();
    cells[15] = to.to_string();
    cells[17] = sta.to_string();
    cells
}

fn tr(cells: &[String]) -> String {
    let tds: String = cells
        .iter()
        .map(|c| {
            if c.is_empty() {
                "<td>&nbsp;</td>".to_string()
            } else {
                format!("<td>{c}</td>")
            }
        })
        .collect();
    format!("<tr>{tds}</tr>\n")
}

/// Minimal report: anchor caption `Period: {start} to ...` and an activity grid
/// with a header row followed by `rows`.
pub fn report(start: &str, rows: &[Vec<String>]) -> String {
    let header = tr(&(0..18).map(|i| format!("H{i}")).collect::<Vec<_>>());
    let body: String = rows.iter().map(|r| tr(r)).collect();
    format!(
        r#"<div class="row printOnly"><b>Period: {start} to 23Jan22 (ILV - Test Crew)</b></div>
<table id="ctl00_Main_activityGrid"><tbody>
{header}{body}</tbody></table>"#
    )
}
