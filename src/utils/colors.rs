/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Calendar badge color: rescue → info, due → warn, event → ok.
pub fn color_for_mark(kind: &str) -> &'static str {
    match kind {
        "rescue" => CYAN,
        "due" => YELLOW,
        "event" => GREEN,
        _ => RESET,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

pub fn dim(value: &str) -> String {
    format!("{DIM}{value}{RESET}")
}
