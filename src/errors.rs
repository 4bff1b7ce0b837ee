//! Unified application error type.
//! Parser, db, core and cli all return AppError so that `main` has a single
//! place where failures are reported.

use crate::models::report_format::ReportFormat;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Report parsing
    // ---------------------------
    #[error("Expected format {expected}, got {got}")]
    UnsupportedFormat {
        expected: ReportFormat,
        got: ReportFormat,
    },

    #[error("Parser for format {0} not found")]
    NoParser(ReportFormat),

    #[error("Invalid report")]
    InvalidReport,

    #[error("Malformed period anchor: {0:?}")]
    MalformedPeriodAnchor(String),

    #[error("Malformed column layout in row {row}: expected at least {expected} columns, found {found}")]
    MalformedColumnLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed date label in row {row}: {label:?}")]
    MalformedDateLabel { row: usize, label: String },

    #[error("Malformed {column} time in row {row}: {value:?}")]
    MalformedTime {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Report too large: {size_kb} KB exceeds the {limit_kb} KB limit")]
    ReportTooLarge { size_kb: u64, limit_kb: u64 },

    // ---------------------------
    // Value parsing
    // ---------------------------
    #[error("Invalid airport code: {0:?}")]
    InvalidAirport(String),

    #[error("Invalid activity type: {0}")]
    InvalidActivityType(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
