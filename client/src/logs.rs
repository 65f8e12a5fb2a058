//! Leveled, colored terminal output. Errors go to stderr, everything else to stdout.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

/// The palette shared by log lines and the pretty printers.
#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Info,
    Error,
    Muted,
}

impl From<LogColor> for Color {
    fn from(color: LogColor) -> Color {
        let (r, g, b) = match color {
            LogColor::Highlight => (255, 215, 87),
            LogColor::Label => (40, 100, 153),
            LogColor::Info => (0, 95, 255),
            LogColor::Error => (255, 0, 45),
            LogColor::Muted => (192, 192, 192),
        };
        Color::TrueColor { r, g, b }
    }
}

#[derive(Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Error,
}

impl Level {
    fn color(self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Error => LogColor::Error,
        }
    }
}

fn format_line(level: Level, label: impl Display, msg: impl Display) -> String {
    format!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black()
    )
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    let line = format_line(level, label, msg);
    match level {
        Level::Error => eprintln!("{line}"),
        Level::Info | Level::Success => println!("{line}"),
    }
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Level::Success, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}

/// Formats a key/value pair with the key muted.
pub fn fmt_kv(key: impl Display, value: impl Display) -> String {
    format!("{}: {}", key.to_string().color(LogColor::Muted), value)
}

#[macro_export]
macro_rules! print_kv {
    ($key:expr, $value:expr $(,)?) => {
        println!("{}", $crate::logs::fmt_kv(&$key, &$value))
    };
}
