use colored::Colorize;
use expense_config::Config;
use std::env;
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub color_enabled: bool,
}

impl OutputPreferences {
    /// Derives preferences from the loaded config. Colour is only enabled when
    /// stdout is a terminal and `NO_COLOR` is unset.
    pub fn from_config(config: &Config) -> Self {
        let color_enabled = config.ui_color_enabled
            && env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            plain_mode: config.plain_mode(),
            screen_reader_mode: config.accessibility.screen_reader,
            high_contrast_mode: config.accessibility.high_contrast,
            color_enabled,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("", ""),
        MessageKind::Success => ("OK", "✔"),
        MessageKind::Warning => ("WARNING", "⚠"),
        MessageKind::Error => ("ERROR", "✖"),
        MessageKind::Section => ("", ""),
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        _ => {
            let (label, icon) = build_label(kind);
            if prefs.plain_mode || prefs.screen_reader_mode {
                format!("{label}: {text}")
            } else {
                format!("{icon} {text}")
            }
        }
    };

    if prefs.screen_reader_mode || !prefs.color_enabled {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Bold title text when colour is on; unchanged otherwise.
pub fn emphasize(text: &str) -> String {
    let prefs = current_preferences();
    if prefs.color_enabled && !prefs.screen_reader_mode {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn blank_line() {
    println!();
}
