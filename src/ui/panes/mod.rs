//! Render functions for each part of the screen
//!
//! - [`survey`]: the scrolled strip of question panels
//! - [`chrome`]: nav buttons, menu button and section menu, plus their click regions
//! - [`status`]: status bar with position and keybindings
//!
//! All render functions are stateless: they paint what the navigator's
//! document says and hold nothing between frames.

pub mod chrome;
pub mod status;
pub mod survey;

pub use chrome::{render_chrome, HitMap, MENU_WIDTH};
pub use status::render_status_bar;
pub use survey::render_survey_pane;
