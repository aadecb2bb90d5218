//! Panel navigation and synchronization state machine.
//!
//! [`PanelNavigator`] owns the scroll container, the rendered
//! [`SurveyDocument`], the current panel index and the menu state. It keeps
//! three dependent pieces of the document in step with the scroll position:
//!
//! - the active panel
//! - the highlighted menu entry
//! - the visibility of the up/down buttons
//!
//! The index only ever changes in [`PanelNavigator::on_scroll`], which derives
//! it from the observed scroll offset. Explicit navigation starts a smooth
//! scroll and returns; the index catches up on later [`UiEvent::Tick`]s.

pub mod document;
pub mod scroll;

use std::time::Instant;

use tracing::debug;

use crate::survey::QuestionDescriptor;

pub use document::{ButtonNode, MenuItem, MenuNode, PanelNode, SurveyDocument};
pub use scroll::{ScrollContainer, SMOOTH_SCROLL_DURATION};

/// Clickable parts of the survey chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NavUp,
    NavDown,
    MenuButton,
    MenuItem(usize),
}

/// Input delivered to the navigator by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click(ClickTarget),
    /// User scroll by a number of rows (positive is down)
    Wheel(i32),
    /// Animation frame
    Tick,
}

pub struct PanelNavigator {
    questions: Vec<QuestionDescriptor>,
    document: SurveyDocument,
    container: ScrollContainer,
    current_index: usize,
    menu_open: bool,
    /// Whether scroll and click listeners are registered on the current document
    attached: bool,
}

impl PanelNavigator {
    /// Render `questions` into a viewport of `viewport_height` rows
    ///
    /// The navigator starts detached; call [`attach`](Self::attach) before
    /// delivering events.
    pub fn new(questions: Vec<QuestionDescriptor>, viewport_height: u16) -> Self {
        let mut navigator = PanelNavigator {
            document: SurveyDocument::build(&[]),
            questions,
            container: ScrollContainer::new(viewport_height),
            current_index: 0,
            menu_open: false,
            attached: false,
        };
        navigator.render();
        navigator
    }

    pub fn questions(&self) -> &[QuestionDescriptor] {
        &self.questions
    }

    pub fn document(&self) -> &SurveyDocument {
        &self.document
    }

    pub fn container(&self) -> &ScrollContainer {
        &self.container
    }

    pub fn scroll_offset(&self) -> u32 {
        self.container.offset()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Replace the question sequence
    ///
    /// Re-renders, returns to the first panel and detaches listeners.
    pub fn set_questions(&mut self, questions: Vec<QuestionDescriptor>) {
        self.questions = questions;
        self.current_index = 0;
        self.container.reset();
        self.render();
        debug!(count = self.questions.len(), "replaced survey questions");
    }

    /// Rebuild the whole document from the current questions
    ///
    /// Listeners registered on the previous document are dropped.
    pub fn render(&mut self) {
        self.document = SurveyDocument::build(&self.questions);
        self.document.menu.open = self.menu_open;
        self.container.set_panel_count(self.questions.len());
        self.attached = false;
    }

    /// Register listeners and sync highlight state to the current index
    pub fn attach(&mut self) {
        self.attached = true;
        self.update_active_panel();
        self.update_active_menu_item();
        self.update_nav_buttons();
    }

    /// Dispatch one input event
    ///
    /// Events arriving while detached are dropped.
    pub fn handle_event(&mut self, event: UiEvent, now: Instant) {
        if !self.attached {
            return;
        }
        match event {
            UiEvent::Click(ClickTarget::NavUp) => {
                self.navigate_to(self.current_index as isize - 1, now);
            }
            UiEvent::Click(ClickTarget::NavDown) => {
                self.navigate_to(self.current_index as isize + 1, now);
            }
            UiEvent::Click(ClickTarget::MenuButton) => self.toggle_menu(),
            UiEvent::Click(ClickTarget::MenuItem(index)) => {
                self.navigate_to(index as isize, now);
            }
            UiEvent::Wheel(delta) => {
                if self.container.scroll_by(delta) {
                    self.on_scroll();
                }
                self.container.snap(delta, now);
            }
            UiEvent::Tick => {
                if self.container.tick(now) {
                    self.on_scroll();
                }
            }
        }
    }

    /// Recompute the current index from the scroll offset
    pub fn on_scroll(&mut self) {
        let height = self.container.viewport_height();
        if height == 0 || self.questions.is_empty() {
            return;
        }
        let ratio = f64::from(self.container.offset()) / f64::from(height);
        let new_index = (ratio.round() as usize).min(self.questions.len() - 1);
        if new_index != self.current_index {
            debug!(from = self.current_index, to = new_index, "active panel changed");
            self.current_index = new_index;
            self.update_active_panel();
            self.update_active_menu_item();
            self.update_nav_buttons();
        }
    }

    /// Smooth-scroll to panel `index`
    ///
    /// Out-of-range indices are ignored. The current index is not updated
    /// here; it follows the scroll offset as the animation ticks.
    pub fn navigate_to(&mut self, index: isize, now: Instant) {
        if index < 0 || index as usize >= self.questions.len() {
            return;
        }
        let target = self.container.snap_offset(index as usize);
        debug!(index, target, "navigating to panel");
        self.container.scroll_to_smooth(target, now);
    }

    pub fn update_active_panel(&mut self) {
        let current = self.current_index;
        for panel in &mut self.document.panels {
            panel.active = panel.index == current;
        }
    }

    pub fn update_active_menu_item(&mut self) {
        let current = self.current_index;
        for item in &mut self.document.menu.items {
            item.active = item.index == current;
        }
    }

    pub fn update_nav_buttons(&mut self) {
        let len = self.questions.len();
        self.document.up_button.hidden = len == 0 || self.current_index == 0;
        self.document.down_button.hidden = len == 0 || self.current_index == len - 1;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.document.menu.open = self.menu_open;
    }

    /// Follow a terminal resize, keeping the current panel in view
    pub fn set_viewport_height(&mut self, height: u16) {
        if height == self.container.viewport_height() {
            return;
        }
        self.container
            .resize(height, self.questions.len(), self.current_index);
    }
}
