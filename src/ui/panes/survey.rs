//! Question panels inside the scrolled viewport

use crate::navigator::{PanelNode, SurveyDocument};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the question content column gets, in cells
const MAX_CONTENT_WIDTH: u16 = 64;

/// Paint the slice of the panel strip visible at `scroll_offset`
///
/// Every panel is exactly `area.height` rows tall; panel `i` starts at row
/// `i * area.height` of the strip.
pub fn render_survey_pane(
    frame: &mut Frame,
    area: Rect,
    document: &SurveyDocument,
    scroll_offset: u32,
    palette: &Palette,
) {
    let height = u32::from(area.height);
    let base = Style::default().bg(palette.bg).fg(palette.fg);

    if document.panels.is_empty() || height == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No questions to show",
            Style::default().fg(palette.muted),
        )))
        .style(base)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
    let indent = (area.width.saturating_sub(content_width) / 2) as usize;

    let panels: Vec<Vec<Line>> = document
        .panels
        .iter()
        .map(|panel| panel_lines(panel, content_width as usize, indent, palette))
        .collect();

    let mut rows: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in 0..height {
        let absolute = scroll_offset + row;
        let index = (absolute / height) as usize;
        let within = (absolute % height) as usize;
        let Some(panel) = document.panels.get(index) else {
            rows.push(Line::default());
            continue;
        };

        if within == 0 && !panel.background_image.is_empty() {
            rows.push(background_line(panel, palette));
            continue;
        }

        let lines = &panels[index];
        let top = (height as usize).saturating_sub(lines.len()) / 2;
        match within.checked_sub(top).and_then(|i| lines.get(i)) {
            Some(line) => rows.push(line.clone()),
            None => rows.push(Line::default()),
        }
    }

    frame.render_widget(Paragraph::new(rows).style(base), area);
}

/// Content lines of one panel, before vertical centering
///
/// Inactive panels are drawn muted; the active one is revealed in full color.
fn panel_lines<'a>(
    panel: &'a PanelNode,
    width: usize,
    indent: usize,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let pad = " ".repeat(indent);
    let (title_style, body_style, input_style) = if panel.active {
        (
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            Style::default().fg(palette.fg),
            Style::default().fg(palette.accent),
        )
    } else {
        let muted = Style::default().fg(palette.muted);
        (muted, muted, muted)
    };

    let mut lines = Vec::new();
    for chunk in wrap_text(&panel.title, width) {
        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(chunk, title_style),
        ]));
    }
    lines.push(Line::default());

    if !panel.description.is_empty() {
        for chunk in wrap_text(&panel.description, width) {
            lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(chunk, body_style),
            ]));
        }
        lines.push(Line::default());
    }

    for chunk in wrap_text(&panel.input.to_markup(), width) {
        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(chunk, input_style),
        ]));
    }
    lines
}

fn background_line<'a>(panel: &'a PanelNode, palette: &Palette) -> Line<'a> {
    Line::from(Span::styled(
        format!(" ▒ {}", panel.background_image),
        Style::default()
            .fg(palette.background_image)
            .add_modifier(Modifier::ITALIC),
    ))
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
