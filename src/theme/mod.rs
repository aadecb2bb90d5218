//! Light/dark theme selection.
//!
//! A theme is chosen in priority order:
//!
//! 1. the persisted preferred theme, if any
//! 2. for an `auto` default, `dark` between 18:00 and 06:00 local time, else `light`
//! 3. the configured default theme verbatim
//!
//! [`ThemeSelector`] applies the choice by pointing the stylesheet links in its
//! [`StyleHead`] at entries of the injected [`ThemePaths`] table, and persists it.

pub mod head;
pub mod paths;
pub mod selector;
pub mod store;
pub mod stylesheet;

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

pub use head::{StyleHead, StyleLink, BASE_LINK_ID, THEME_LINK_ID};
pub use paths::ThemePaths;
pub use selector::ThemeSelector;
pub use store::{FileStore, MemoryStore, PreferenceStore, PREFERRED_THEME_KEY};

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";
pub const AUTO: &str = "auto";

/// Night runs from this hour (inclusive)...
const NIGHT_START_HOUR: u32 = 18;
/// ...until this hour (exclusive)
const NIGHT_END_HOUR: u32 = 6;

/// Configured default theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultTheme {
    /// Pick light or dark from the local time of day
    Auto,
    Named(String),
}

impl fmt::Display for DefaultTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultTheme::Auto => f.write_str(AUTO),
            DefaultTheme::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for DefaultTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("theme name must not be empty".to_string()),
            AUTO => Ok(DefaultTheme::Auto),
            name => Ok(DefaultTheme::Named(name.to_string())),
        }
    }
}

impl TryFrom<String> for DefaultTheme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DefaultTheme> for String {
    fn from(value: DefaultTheme) -> Self {
        value.to_string()
    }
}

/// Source of the local wall-clock hour
pub trait Clock {
    /// Hour of the day in local time, `0..24`
    fn local_hour(&self) -> u32;
}

/// The system's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock stuck at one hour
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}

/// Theme picked from the time of day alone
pub fn theme_for_hour(hour: u32) -> &'static str {
    if hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR {
        DARK
    } else {
        LIGHT
    }
}

/// Decide which theme to apply
///
/// An empty persisted value counts as no preference.
pub fn resolve_theme(persisted: Option<&str>, default: &DefaultTheme, hour: u32) -> String {
    match persisted {
        Some(theme) if !theme.is_empty() => theme.to_string(),
        _ => match default {
            DefaultTheme::Auto => theme_for_hour(hour).to_string(),
            DefaultTheme::Named(name) => name.clone(),
        },
    }
}
