//! Parser for the HTML crew roster ("activity grid") report.
//!
//! Pipeline: document → structure check → period anchor → row table →
//! day-cursor fold with per-row classification → activities.

pub mod anchor;
pub mod assemble;
pub mod classify;
pub mod layout;
pub mod structure;
pub mod table;

pub use layout::{Column, ColumnLayout};

use super::{ActivityFactory, ActivityParser};
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::report_format::ReportFormat;
use scraper::{ElementRef, Html};

pub struct HtmlReportParser {
    factory: Box<dyn ActivityFactory>,
    layout: ColumnLayout,
}

impl HtmlReportParser {
    pub fn new(factory: impl ActivityFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            layout: ColumnLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    fn create_activities(&self, data: &str) -> AppResult<Vec<Activity>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let document = Html::parse_document(data);

        structure::validate(&document)?;
        let anchor = anchor::resolve(&document)?;
        let rows = table::extract(&document);

        tracing::debug!(%anchor, rows = rows.len(), "roster table extracted");

        assemble::assemble(self.factory.as_ref(), &self.layout, anchor, &rows)
    }
}

impl ActivityParser for HtmlReportParser {
    fn supports(&self, format: ReportFormat) -> bool {
        format == ReportFormat::Html
    }

    fn parse(&self, data: &str, format: ReportFormat) -> AppResult<Vec<Activity>> {
        if !self.supports(format) {
            return Err(AppError::UnsupportedFormat {
                expected: ReportFormat::Html,
                got: format,
            });
        }

        self.create_activities(data)
    }
}

/// Text of an element with whitespace runs collapsed and the ends trimmed.
/// Non-breaking spaces count as whitespace.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
