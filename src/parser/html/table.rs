//! Activity table extraction.

use super::element_text;
use super::structure::{CELL, table_rows};
use scraper::Html;

/// Trimmed cell texts of one table row, in column order.
pub type Row = Vec<String>;

/// Data rows of the activity table in document order. The header row is dropped.
pub fn extract(document: &Html) -> Vec<Row> {
    table_rows(document)
        .skip(1)
        .map(|tr| tr.select(&CELL).map(element_text).collect())
        .collect()
}
