//! Theme path table: theme name to stylesheet href

use rustc_hash::FxHashMap;

use crate::error::ThemeError;

/// Name of the stylesheet every theme is layered over
pub const BASE: &str = "base";

/// Prefix for stylesheets compiled into the binary
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Stylesheet hrefs keyed by theme name
///
/// Always contains a `base` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    paths: FxHashMap<String, String>,
}

impl ThemePaths {
    /// Wrap a table, rejecting one without a `base` entry
    pub fn new(paths: FxHashMap<String, String>) -> Result<Self, ThemeError> {
        if !paths.contains_key(BASE) {
            return Err(ThemeError::MissingBasePath);
        }
        Ok(ThemePaths { paths })
    }

    /// The table of stylesheets shipped with the binary
    pub fn builtin() -> Self {
        let paths = ["base", "light", "dark"]
            .into_iter()
            .map(|name| (name.to_string(), format!("{}{}", BUILTIN_PREFIX, name)))
            .collect();
        ThemePaths { paths }
    }

    /// Overlay user entries on top of this table; user entries win
    pub fn merged(mut self, overrides: &FxHashMap<String, String>) -> Self {
        for (name, href) in overrides {
            self.paths.insert(name.clone(), href.clone());
        }
        self
    }

    pub fn get(&self, theme: &str) -> Option<&str> {
        self.paths.get(theme).map(String::as_str)
    }

    pub fn base(&self) -> &str {
        self.get(BASE).unwrap_or_default()
    }

    pub fn contains(&self, theme: &str) -> bool {
        self.paths.contains_key(theme)
    }

    /// Theme names other than `base`, sorted
    pub fn theme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .paths
            .keys()
            .map(String::as_str)
            .filter(|name| *name != BASE)
            .collect();
        names.sort_unstable();
        names
    }
}
