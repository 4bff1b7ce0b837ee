pub mod activity;
pub mod activity_type;
pub mod airport;
pub mod report_format;
