use super::{ActivityParser, DefaultActivityFactory, HtmlReportParser};
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::report_format::ReportFormat;

/// Ordered list of parsers; the first one supporting a format wins.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn ActivityParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in parser.
    pub fn with_defaults() -> Self {
        Self::new().register(HtmlReportParser::new(DefaultActivityFactory))
    }

    pub fn register(mut self, parser: impl ActivityParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    fn select(&self, format: ReportFormat) -> AppResult<&dyn ActivityParser> {
        self.parsers
            .iter()
            .find(|p| p.supports(format))
            .map(|p| &**p)
            .ok_or(AppError::NoParser(format))
    }
}

impl ActivityParser for ParserRegistry {
    fn supports(&self, format: ReportFormat) -> bool {
        self.select(format).is_ok()
    }

    fn parse(&self, data: &str, format: ReportFormat) -> AppResult<Vec<Activity>> {
        let parser = self.select(format)?;
        tracing::debug!(%format, "dispatching report to parser");
        parser.parse(data, format)
    }
}
