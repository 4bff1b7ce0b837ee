mod common;
use common::temp_out;

use crewroster::config::{Config, DEFAULT_MAX_REPORT_KB};
use crewroster::errors::AppError;
use crewroster::logging::default_directive;
use crewroster::models::report_format::ReportFormat;
use crewroster::utils::date::parse_filter_date;
use crewroster::utils::table::Table;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_config_file_yields_defaults() {
    let cfg = Config::load_from(Path::new("/nonexistent/crewroster.conf")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.max_report_kb, DEFAULT_MAX_REPORT_KB);
    assert_eq!(cfg.report_format().unwrap(), ReportFormat::Html);
}

#[test]
fn test_partial_config_takes_defaults() {
    let cfg = Config::from_yaml("database: /tmp/roster.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/roster.sqlite");
    assert_eq!(cfg.max_report_kb, 12288);
    assert_eq!(cfg.default_format, "html");
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_out("config_round_trip", "conf");
    let cfg = Config {
        database: "/tmp/other.sqlite".to_string(),
        max_report_kb: 64,
        default_format: "json".to_string(),
    };
    fs::write(&path, cfg.to_yaml().unwrap()).unwrap();

    let loaded = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.report_format().unwrap(), ReportFormat::Json);
    fs::remove_file(&path).ok();
}

#[test]
fn test_bad_config_is_reported() {
    assert!(matches!(
        Config::from_yaml("max_report_kb: lots\n"),
        Err(AppError::Config(_))
    ));

    let cfg = Config {
        default_format: "pdf".to_string(),
        ..Config::default()
    };
    assert!(matches!(cfg.report_format(), Err(AppError::Config(_))));
}

#[test]
fn test_filter_dates() {
    assert_eq!(
        parse_filter_date("22-01-2022").unwrap(),
        NaiveDate::from_ymd_opt(2022, 1, 22).unwrap()
    );
    assert!(matches!(parse_filter_date("2022-01-22"), Err(AppError::InvalidDate(_))));
    assert!(matches!(parse_filter_date("31-02-2022"), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_table_columns_fit_widest_cell() {
    let mut table = Table::with_headers(&["ID", "TYPE"]);
    table.add_row(vec!["1".to_string(), "FLT".to_string()]);
    table.add_row(vec!["10".to_string()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines, vec!["ID TYPE ", "1  FLT  ", "10      "]);
}

#[test]
fn test_log_level_follows_verbosity() {
    assert_eq!(default_directive(0), "crewroster=warn");
    assert_eq!(default_directive(1), "crewroster=info");
    assert_eq!(default_directive(5), "crewroster=debug");
}
