pub mod list;
pub mod log;
pub mod parse;
