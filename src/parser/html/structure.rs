//! Structural check run before anything is extracted.

use crate::errors::{AppError, AppResult};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

pub const PERIOD_ANCHOR_SELECTOR: &str = ".printOnly";
pub const ACTIVITY_TABLE_SELECTOR: &str = "#ctl00_Main_activityGrid";

pub(crate) static PERIOD_ANCHOR: LazyLock<Selector> = LazyLock::new(|| compile(PERIOD_ANCHOR_SELECTOR));
pub(crate) static ACTIVITY_TABLE: LazyLock<Selector> =
    LazyLock::new(|| compile(ACTIVITY_TABLE_SELECTOR));
pub(crate) static ROW: LazyLock<Selector> = LazyLock::new(|| compile("tr"));
pub(crate) static CELL: LazyLock<Selector> = LazyLock::new(|| compile("td"));

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Every `tr` under every element carrying the activity table id, in document order.
pub(crate) fn table_rows(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .select(&ACTIVITY_TABLE)
        .flat_map(|table| table.select(&ROW))
}

/// Counts found in a document that decide whether it is a roster report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureCounts {
    pub anchors: usize,
    pub tables: usize,
    pub rows: usize,
}

impl StructureCounts {
    pub fn of(document: &Html) -> Self {
        Self {
            anchors: document.select(&PERIOD_ANCHOR).count(),
            tables: document.select(&ACTIVITY_TABLE).count(),
            rows: table_rows(document).count(),
        }
    }

    /// Exactly one anchor, and either exactly one table or more than one row.
    ///
    /// A document with an irregular table count but several rows passes.
    pub fn is_valid(&self) -> bool {
        self.anchors == 1 && (self.tables == 1 || self.rows > 1)
    }
}

pub fn validate(document: &Html) -> AppResult<()> {
    let counts = StructureCounts::of(document);
    if counts.is_valid() {
        Ok(())
    } else {
        tracing::warn!(?counts, "report failed structure validation");
        Err(AppError::InvalidReport)
    }
}
