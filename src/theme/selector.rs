//! Resolves and applies the active theme

use tracing::{debug, info, warn};

use super::head::{StyleHead, BASE_LINK_ID, THEME_LINK_ID};
use super::paths::ThemePaths;
use super::store::{PreferenceStore, PREFERRED_THEME_KEY};
use super::stylesheet::palette_for_head;
use super::{resolve_theme, Clock, DARK, LIGHT};
use crate::config::{ThemeConfig, UserConfig};
use crate::error::ThemeError;
use crate::ui::theme::Palette;

pub struct ThemeSelector {
    config: ThemeConfig,
    paths: ThemePaths,
    head: StyleHead,
    store: Box<dyn PreferenceStore>,
    clock: Box<dyn Clock>,
    /// Preference kept for the session when the store is unavailable
    session_preference: Option<String>,
    /// Set once a write fails; the session copy then outranks the store
    storage_degraded: bool,
    current: Option<String>,
}

impl ThemeSelector {
    pub fn new(
        config: ThemeConfig,
        paths: ThemePaths,
        store: Box<dyn PreferenceStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        ThemeSelector {
            config,
            paths,
            head: StyleHead::new(),
            store,
            clock,
            session_preference: None,
            storage_degraded: false,
            current: None,
        }
    }

    /// Merge `user` over the defaults, then resolve and apply a theme
    pub fn initialize(
        user: UserConfig,
        paths: ThemePaths,
        store: Box<dyn PreferenceStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ThemeError> {
        let config = ThemeConfig::default().merge(user);
        let mut selector = Self::new(config, paths, store, clock);

        let mut theme = selector.resolve();
        if !selector.paths.contains(&theme) {
            if let Some(stale) = selector.preferred_theme().filter(|p| *p == theme) {
                warn!(theme = %stale, "ignoring stored preference with no stylesheet");
                theme = resolve_theme(
                    None,
                    &selector.config.default_theme,
                    selector.clock.local_hour(),
                );
            }
        }
        selector.apply(&theme)?;
        info!(theme = %theme, default = %selector.config.default_theme, "theme initialized");
        Ok(selector)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn paths(&self) -> &ThemePaths {
        &self.paths
    }

    pub fn head(&self) -> &StyleHead {
        &self.head
    }

    /// Theme most recently applied
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The persisted preference, or the session copy if storage failed
    pub fn preferred_theme(&self) -> Option<String> {
        if self.storage_degraded {
            return self.session_preference.clone();
        }
        match self.store.get(PREFERRED_THEME_KEY) {
            Ok(Some(value)) => Some(value),
            Ok(None) => self.session_preference.clone(),
            Err(e) => {
                warn!(error = %e, "preference storage unavailable, using session value");
                self.session_preference.clone()
            }
        }
    }

    /// Decide the theme from the stored preference, config and clock
    pub fn resolve(&self) -> String {
        let persisted = self.preferred_theme();
        resolve_theme(
            persisted.as_deref(),
            &self.config.default_theme,
            self.clock.local_hour(),
        )
    }

    /// Point the stylesheet links at `theme` and persist it as the preference
    pub fn apply(&mut self, theme: &str) -> Result<(), ThemeError> {
        let href = self
            .paths
            .get(theme)
            .ok_or_else(|| ThemeError::UnknownTheme(theme.to_string()))?
            .to_string();

        self.head.ensure_stylesheet(BASE_LINK_ID).href = self.paths.base().to_string();
        self.head.ensure_stylesheet(THEME_LINK_ID).href = href;

        self.session_preference = Some(theme.to_string());
        match self.store.set(PREFERRED_THEME_KEY, theme) {
            Ok(()) => self.storage_degraded = false,
            Err(e) => {
                warn!(
                    error = %e,
                    "could not persist theme preference, keeping it for this session"
                );
                self.storage_degraded = true;
            }
        }
        self.current = Some(theme.to_string());
        debug!(theme, "theme applied");
        Ok(())
    }

    /// Switch between light and dark
    ///
    /// Any other current theme switches to light.
    pub fn toggle(&mut self) -> Result<(), ThemeError> {
        let next = match self.current.as_deref() {
            Some(LIGHT) => DARK,
            _ => LIGHT,
        };
        self.apply(next)
    }

    /// Colors produced by the currently linked stylesheets
    pub fn palette(&self) -> Palette {
        palette_for_head(&self.head)
    }
}
