//! Stylesheet loading: TOML color sheets cascaded into a [`Palette`]
//!
//! A sheet only lists the colors it changes:
//!
//! ```toml
//! [colors]
//! bg = "#1e1e2e"
//! accent = "#3b82f6"
//! ```
//!
//! Hrefs starting with `builtin:` name sheets compiled into the binary; any
//! other href is a filesystem path.

use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::warn;

use super::head::StyleHead;
use super::paths::BUILTIN_PREFIX;
use crate::error::ThemeError;
use crate::ui::theme::Palette;

const BUILTIN_BASE: &str = include_str!("../../assets/themes/base.toml");
const BUILTIN_LIGHT: &str = include_str!("../../assets/themes/light.toml");
const BUILTIN_DARK: &str = include_str!("../../assets/themes/dark.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub colors: SheetColors,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetColors {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub button: Option<String>,
    pub background_image: Option<String>,
    pub menu_bg: Option<String>,
    pub menu_border: Option<String>,
    pub status_bg: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl StyleSheet {
    pub fn parse(href: &str, text: &str) -> Result<Self, ThemeError> {
        let sheet: StyleSheet = toml::from_str(text).map_err(|e| ThemeError::StylesheetParse {
            href: href.to_string(),
            message: e.to_string(),
        })?;
        sheet.validate(href)?;
        Ok(sheet)
    }

    /// Overwrite the colors this sheet sets
    pub fn apply_to(&self, palette: &mut Palette) {
        let c = &self.colors;
        let slots: [(&Option<String>, &mut Color); 11] = [
            (&c.bg, &mut palette.bg),
            (&c.fg, &mut palette.fg),
            (&c.muted, &mut palette.muted),
            (&c.accent, &mut palette.accent),
            (&c.button, &mut palette.button),
            (&c.background_image, &mut palette.background_image),
            (&c.menu_bg, &mut palette.menu_bg),
            (&c.menu_border, &mut palette.menu_border),
            (&c.status_bg, &mut palette.status_bg),
            (&c.error, &mut palette.error),
            (&c.success, &mut palette.success),
        ];
        for (value, slot) in slots {
            if let Some(color) = value.as_deref().and_then(parse_hex) {
                *slot = color;
            }
        }
    }

    fn validate(&self, href: &str) -> Result<(), ThemeError> {
        let c = &self.colors;
        let values = [
            &c.bg,
            &c.fg,
            &c.muted,
            &c.accent,
            &c.button,
            &c.background_image,
            &c.menu_bg,
            &c.menu_border,
            &c.status_bg,
            &c.error,
            &c.success,
        ];
        for value in values.into_iter().flatten() {
            if parse_hex(value).is_none() {
                return Err(ThemeError::StylesheetParse {
                    href: href.to_string(),
                    message: format!("invalid hex color: {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb` into an RGB color
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Fetch and parse the stylesheet at `href`
pub fn load_stylesheet(href: &str) -> Result<StyleSheet, ThemeError> {
    if let Some(name) = href.strip_prefix(BUILTIN_PREFIX) {
        let text = match name {
            "base" => BUILTIN_BASE,
            "light" => BUILTIN_LIGHT,
            "dark" => BUILTIN_DARK,
            other => return Err(ThemeError::UnknownBuiltin(other.to_string())),
        };
        return StyleSheet::parse(href, text);
    }
    let path = PathBuf::from(href);
    let text = fs::read_to_string(&path)
        .map_err(|source| ThemeError::StylesheetIo { path, source })?;
    StyleSheet::parse(href, &text)
}

/// Cascade every linked stylesheet, in link order, over the default palette
///
/// A sheet that fails to load is skipped with a warning.
pub fn palette_for_head(head: &StyleHead) -> Palette {
    let mut palette = Palette::default();
    for link in head.links() {
        if link.href.is_empty() {
            continue;
        }
        match load_stylesheet(&link.href) {
            Ok(sheet) => sheet.apply_to(&mut palette),
            Err(e) => warn!(link = %link.id, error = %e, "skipping stylesheet"),
        }
    }
    palette
}
