//! Report parsers.
//!
//! Every input format is handled by a value implementing [`ActivityParser`].
//! Callers normally go through [`ParserRegistry`], which picks the first
//! registered parser that supports the requested format.

pub mod factory;
pub mod html;
pub mod registry;

pub use factory::{ActivityFactory, DefaultActivityFactory};
pub use html::HtmlReportParser;
pub use registry::ParserRegistry;

use crate::errors::AppResult;
use crate::models::activity::Activity;
use crate::models::report_format::ReportFormat;

/// A format handler turning one report document into an ordered list of activities.
pub trait ActivityParser: Send + Sync {
    fn supports(&self, format: ReportFormat) -> bool;

    /// Parse `data` as `format`. Activities come back in document order.
    fn parse(&self, data: &str, format: ReportFormat) -> AppResult<Vec<Activity>>;
}
