use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Kind::Info => FG_BLUE,
            Kind::Success => FG_GREEN,
            Kind::Warning => FG_YELLOW,
            Kind::Error => FG_RED,
        }
    }
}

/// False when `NO_COLOR` is set. Callers combine this with `--no-color`
/// and the configuration before passing `color` below.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn render<T: fmt::Display>(kind: Kind, msg: T, color: bool) -> String {
    if color {
        format!("{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg)
    } else {
        format!("{} {}", kind.icon(), msg)
    }
}

fn emit<T: fmt::Display>(kind: Kind, msg: T, color: bool) {
    let line = render(kind, msg, color);
    match kind {
        Kind::Info | Kind::Success => println!("{line}"),
        Kind::Warning | Kind::Error => eprintln!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T, color: bool) {
    emit(Kind::Info, msg, color);
}

pub fn success<T: fmt::Display>(msg: T, color: bool) {
    emit(Kind::Success, msg, color);
}

pub fn warning<T: fmt::Display>(msg: T, color: bool) {
    emit(Kind::Warning, msg, color);
}

pub fn error<T: fmt::Display>(msg: T, color: bool) {
    emit(Kind::Error, msg, color);
}

/// Section header, e.g. before a table.
pub fn header<T: fmt::Display>(msg: T, color: bool) {
    if color {
        println!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("== {} ==", msg);
    }
}
