use crate::models::activity_type::ActivityType;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color used for an activity type in listings.
pub fn color_for_type(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::Flight => BLUE,
        ActivityType::CheckIn => GREEN,
        ActivityType::CheckOut => RED,
        ActivityType::DayOff => MAGENTA,
        ActivityType::StandBy => YELLOW,
        ActivityType::Unknown => GREY,
    }
}
