//! Main TUI application state and logic

use crate::navigator::{ClickTarget, PanelNavigator, UiEvent};
use crate::survey::load_questions;
use crate::theme::ThemeSelector;
use crate::ui::panes::{self, HitMap, MENU_WIDTH};
use crate::ui::theme::Palette;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Columns the menu slides per frame
const MENU_SLIDE_STEP: u16 = 8;

/// Input poll interval, roughly one animation frame
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The main application state
pub struct App {
    pub navigator: PanelNavigator,
    pub themes: ThemeSelector,

    /// Colors from the currently linked stylesheets
    palette: Palette,

    /// File the questions were loaded from, for reloading
    questions_path: Option<PathBuf>,

    /// Click regions from the last draw
    hit_map: HitMap,

    /// Columns of the section menu currently slid into view
    menu_reveal: u16,

    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    /// Create a new app; the navigator is attached if it was not already
    pub fn new(
        mut navigator: PanelNavigator,
        themes: ThemeSelector,
        questions_path: Option<PathBuf>,
    ) -> Self {
        if !navigator.is_attached() {
            navigator.attach();
        }
        let palette = themes.palette();
        App {
            navigator,
            themes,
            palette,
            questions_path,
            hit_map: HitMap::default(),
            menu_reveal: 0,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key, Instant::now());
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse, Instant::now()),
                    _ => {}
                }
            }

            self.tick(Instant::now());
        }

        Ok(())
    }

    /// Advance animations
    pub fn tick(&mut self, now: Instant) {
        self.navigator.handle_event(UiEvent::Tick, now);
        if self.navigator.menu_open() {
            self.menu_reveal = (self.menu_reveal + MENU_SLIDE_STEP).min(MENU_WIDTH);
        } else {
            self.menu_reveal = self.menu_reveal.saturating_sub(MENU_SLIDE_STEP);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());
        let survey_area = chunks[0];
        let status_area = chunks[1];

        self.navigator.set_viewport_height(survey_area.height);

        panes::render_survey_pane(
            frame,
            survey_area,
            self.navigator.document(),
            self.navigator.scroll_offset(),
            &self.palette,
        );

        self.hit_map = panes::render_chrome(
            frame,
            survey_area,
            self.navigator.document(),
            self.menu_reveal,
            &self.palette,
        );

        let position = (!self.navigator.is_empty())
            .then(|| (self.navigator.current_index(), self.navigator.len()));
        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            position,
            self.themes.current().unwrap_or_default(),
            &self.palette,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let page = i32::from(self.navigator.container().viewport_height());
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.click(ClickTarget::NavUp, now),
            KeyCode::Down | KeyCode::Char('j') => self.click(ClickTarget::NavDown, now),
            KeyCode::Char('m') => self.click(ClickTarget::MenuButton, now),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.click(ClickTarget::MenuItem(digit as usize - 1), now);
                }
            }
            KeyCode::Home => self.click(ClickTarget::MenuItem(0), now),
            KeyCode::End => {
                let last = self.navigator.len().saturating_sub(1);
                self.click(ClickTarget::MenuItem(last), now);
            }
            KeyCode::PageDown => self.navigator.handle_event(UiEvent::Wheel(page), now),
            KeyCode::PageUp => self.navigator.handle_event(UiEvent::Wheel(-page), now),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.reload_questions(),
            _ => {}
        }
    }

    /// Handle mouse wheel and clicks
    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.navigator.handle_event(UiEvent::Wheel(WHEEL_ROWS), now);
            }
            MouseEventKind::ScrollUp => {
                self.navigator.handle_event(UiEvent::Wheel(-WHEEL_ROWS), now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hit_map.target_at(mouse.column, mouse.row) {
                    self.click(target, now);
                }
            }
            _ => {}
        }
    }

    fn click(&mut self, target: ClickTarget, now: Instant) {
        self.navigator.handle_event(UiEvent::Click(target), now);
    }

    fn toggle_theme(&mut self) {
        match self.themes.toggle() {
            Ok(()) => {
                self.palette = self.themes.palette();
                self.status_message = format!(
                    "Switched to {} theme",
                    self.themes.current().unwrap_or_default()
                );
            }
            Err(e) => {
                warn!(error = %e, "theme toggle failed");
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn reload_questions(&mut self) {
        let Some(path) = self.questions_path.clone() else {
            self.status_message = "Nothing to reload".to_string();
            return;
        };
        match load_questions(&path) {
            Ok(questions) => {
                let count = questions.len();
                self.navigator.set_questions(questions);
                self.navigator.attach();
                self.status_message = format!("Reloaded {} question(s)", count);
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.status_message = format!("Reload failed: {}", e);
            }
        }
    }
}
