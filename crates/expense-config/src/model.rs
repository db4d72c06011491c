use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use expense_domain::CategoryGrouping;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_show_banner")]
    pub show_banner: bool,
    #[serde(default)]
    pub summary: SummarySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            show_banner: Self::default_show_banner(),
            summary: SummarySettings::default(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_show_banner() -> bool {
        true
    }

    /// Plain output drops icons and box-drawing glyphs.
    pub fn plain_mode(&self) -> bool {
        matches!(self.theme, Theme::Plain) || self.accessibility.plain_output
    }

    pub fn category_grouping(&self) -> CategoryGrouping {
        if self.summary.fold_category_case {
            CategoryGrouping::CaseInsensitive
        } else {
            CategoryGrouping::Exact
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_else(Theme::default)
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Iconic
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub screen_reader: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarySettings {
    /// Merge "Food" and "food" into one summary bucket (first-seen spelling wins).
    #[serde(default)]
    pub fold_category_case: bool,
}
