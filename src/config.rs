//! Configuration: built-in defaults, the optional config file, and CLI overrides
//!
//! The config file is TOML:
//!
//! ```toml
//! default_theme = "auto"   # "auto", "light", "dark" or any name in theme_paths
//!
//! [theme_paths]
//! sepia = "/home/me/.config/surveydeck/sepia.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::theme::DefaultTheme;

/// Resolved theme configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub default_theme: DefaultTheme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            default_theme: DefaultTheme::Auto,
        }
    }
}

impl ThemeConfig {
    /// Shallow merge: every key the user set replaces the current value
    pub fn merge(self, user: UserConfig) -> Self {
        ThemeConfig {
            default_theme: user.default_theme.unwrap_or(self.default_theme),
        }
    }
}

/// Theme configuration as supplied by the user; unset keys keep their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub default_theme: Option<DefaultTheme>,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_theme: Option<DefaultTheme>,
    /// Extra or replacement stylesheets, keyed by theme name
    #[serde(default)]
    pub theme_paths: FxHashMap<String, String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, SurveyError> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path`; a missing file yields the empty config
    pub fn load(path: &Path) -> Result<Self, SurveyError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SurveyError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply a command-line default theme on top of the file's value
    pub fn user_config(&self, cli_default: Option<DefaultTheme>) -> UserConfig {
        UserConfig {
            default_theme: cli_default.or_else(|| self.default_theme.clone()),
        }
    }
}

/// `~/.config/surveydeck/config.toml`, when a config directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("surveydeck").join("config.toml"))
}
