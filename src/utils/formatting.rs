//! Formatting utilities used for CLI and export outputs.

use crate::config::Config;
use crate::ui::messages::colors_enabled;

/// Rendering context derived once from the configuration and CLI flags,
/// then passed to every printer. `NO_COLOR` turns colors off as well.
#[derive(Debug, Clone)]
pub struct Style {
    pub color: bool,
    pub separator: char,
    pub thousands: String,
}

impl Style {
    pub fn from_config(cfg: &Config, no_color: bool) -> Self {
        Self {
            color: cfg.color && !no_color && colors_enabled(),
            separator: cfg.separator_char.chars().next().unwrap_or('-'),
            thousands: cfg.thousands_separator.clone(),
        }
    }

    pub fn number(&self, n: i64) -> String {
        format_number(n, &self.thousands)
    }
}

/// `1234567` → `"1,234,567"` with `sep` as the group separator.
pub fn format_number(n: i64, sep: &str) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len() + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }

    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// One decimal, e.g. `"42.5%"`.
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p)
}

/// Signed gain, `+1,200` / `-3` / `0`.
pub fn format_gain(n: i64, sep: &str) -> String {
    if n > 0 {
        format!("+{}", format_number(n, sep))
    } else {
        format_number(n, sep)
    }
}
