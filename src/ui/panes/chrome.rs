//! Navigation buttons, menu button and the slide-out section menu

use crate::navigator::{ClickTarget, SurveyDocument};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Full width of the open section menu
pub const MENU_WIDTH: u16 = 32;

const UP_GLYPH: &str = "▲";
const DOWN_GLYPH: &str = "▼";
const MENU_GLYPH: &str = "☰";

/// Screen regions that respond to clicks, recorded on every draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub up: Option<Rect>,
    pub down: Option<Rect>,
    pub menu_button: Option<Rect>,
    pub menu_items: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Topmost clickable element under a cell
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        if let Some((_, index)) = self
            .menu_items
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
        {
            return Some(ClickTarget::MenuItem(*index));
        }
        if self.menu_button.is_some_and(|r| contains(r, column, row)) {
            return Some(ClickTarget::MenuButton);
        }
        if self.up.is_some_and(|r| contains(r, column, row)) {
            return Some(ClickTarget::NavUp);
        }
        if self.down.is_some_and(|r| contains(r, column, row)) {
            return Some(ClickTarget::NavDown);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draw the chrome over the survey area and return its click regions
///
/// `menu_reveal` is how many columns of the menu have slid into view.
pub fn render_chrome(
    frame: &mut Frame,
    area: Rect,
    document: &SurveyDocument,
    menu_reveal: u16,
    palette: &Palette,
) -> HitMap {
    let mut hits = HitMap::default();
    if area.width < 3 || area.height < 2 {
        return hits;
    }

    let button_style = Style::default()
        .fg(palette.button)
        .bg(palette.bg)
        .add_modifier(Modifier::BOLD);
    let center = area.x + area.width / 2;

    if !document.up_button.hidden {
        let rect = Rect::new(center.saturating_sub(1), area.y, 3, 1);
        frame.render_widget(Paragraph::new(format!(" {} ", UP_GLYPH)).style(button_style), rect);
        hits.up = Some(rect);
    }
    if !document.down_button.hidden {
        let rect = Rect::new(center.saturating_sub(1), area.bottom() - 1, 3, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} ", DOWN_GLYPH)).style(button_style),
            rect,
        );
        hits.down = Some(rect);
    }

    if menu_reveal > 0 {
        hits.menu_items = render_menu(frame, area, document, menu_reveal, palette);
    }

    if !document.menu_button.hidden {
        let rect = Rect::new(area.right() - 3, area.y, 3, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} ", MENU_GLYPH))
                .style(Style::default().fg(palette.fg).bg(palette.menu_border)),
            rect,
        );
        hits.menu_button = Some(rect);
    }

    hits
}

fn render_menu(
    frame: &mut Frame,
    area: Rect,
    document: &SurveyDocument,
    reveal: u16,
    palette: &Palette,
) -> Vec<(Rect, usize)> {
    let width = reveal.min(MENU_WIDTH).min(area.width);
    let rect = Rect::new(area.right() - width, area.y, width, area.height);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", document.menu.heading),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::LEFT | Borders::TOP)
        .border_style(Style::default().fg(palette.menu_border))
        .padding(Padding::new(1, 1, 1, 0))
        .style(Style::default().bg(palette.menu_bg).fg(palette.fg));
    let inner = block.inner(rect);

    let items: Vec<ListItem> = document
        .menu
        .items
        .iter()
        .map(|item| {
            let style = if item.active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(item.title.as_str()).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), rect);

    // Only a fully open menu takes clicks
    if width < MENU_WIDTH.min(area.width) {
        return Vec::new();
    }
    document
        .menu
        .items
        .iter()
        .take(inner.height as usize)
        .enumerate()
        .map(|(row, item)| {
            (
                Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                item.index,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items_take_precedence() {
        let hits = HitMap {
            up: Some(Rect::new(10, 0, 3, 1)),
            down: None,
            menu_button: Some(Rect::new(37, 0, 3, 1)),
            menu_items: vec![(Rect::new(10, 0, 20, 1), 4)],
        };
        assert_eq!(hits.target_at(11, 0), Some(ClickTarget::MenuItem(4)));
        assert_eq!(hits.target_at(38, 0), Some(ClickTarget::MenuButton));
        assert_eq!(hits.target_at(5, 5), None);
    }
}
