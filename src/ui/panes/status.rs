//! Status bar with position, theme and keybindings

use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `position` is `None` for an empty survey.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: Option<(usize, usize)>,
    theme: &str,
    palette: &Palette,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let position_text = match position {
        Some((index, total)) => format!(" {}/{} ", index + 1, total),
        None => " 0/0 ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            position_text,
            Style::default()
                .bg(palette.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", theme),
            Style::default().bg(palette.status_bg).fg(palette.muted),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(palette.status_bg).fg(palette.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(palette.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(palette.muted).fg(Color::Black);
    let desc_style = Style::default().bg(palette.status_bg).fg(palette.fg);
    let sep_style = Style::default().bg(palette.status_bg).fg(palette.muted);

    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" m ", key_style),
        Span::styled(" menu ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" t ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(palette.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
