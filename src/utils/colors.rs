/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Gain color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_gain(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        GREY
    }
}

/// Maxed skills stand out, anything at 90+ is close.
pub fn color_for_level(level: u32) -> &'static str {
    if level >= crate::core::MAX_LEVEL {
        YELLOW
    } else if level >= 90 {
        CYAN
    } else {
        RESET
    }
}

/// Status strings from the ETA helpers are shown dimmed.
pub fn color_for_eta(eta: &str) -> &'static str {
    match eta {
        crate::core::progress::MAX_LEVEL_REACHED => YELLOW,
        crate::core::progress::INSUFFICIENT_DATA | "N/A" => GREY,
        _ => RESET,
    }
}
