//! ANSI color helper utilities for terminal output.
use crate::models::Status;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Badge color of a status.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Applied => BLUE,
        Status::Interviewing => YELLOW,
        Status::Offer => GREEN,
        Status::Rejected => RED,
    }
}

/// Colorize an already padded status cell.
pub fn colorize_status(status: Status, cell: &str) -> String {
    format!("{}{cell}{RESET}", color_for_status(status))
}

/// Grey out empty optional values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
