use ratatui::style::Color;

/// Colors used by every part of the survey renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,            // Inactive panel content, descriptions
    pub accent: Color,           // Active menu entry, input element tag
    pub button: Color,           // Nav button glyphs
    pub background_image: Color, // Background image placeholder line
    pub menu_bg: Color,
    pub menu_border: Color,
    pub status_bg: Color,
    pub error: Color,
    pub success: Color,
}

pub const DEFAULT_PALETTE: Palette = Palette {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(59, 130, 246), // Blue
    button: Color::Rgb(205, 214, 244),
    background_image: Color::Rgb(69, 71, 90),
    menu_bg: Color::Rgb(49, 50, 68),
    menu_border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    error: Color::Rgb(243, 139, 168),
    success: Color::Rgb(166, 227, 161),
};

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}
