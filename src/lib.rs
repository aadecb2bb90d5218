//! # Introduction
//!
//! surveydeck presents a survey full-screen in the terminal. Every question
//! fills exactly one viewport-height panel, and the panel strip scrolls with
//! mandatory snapping to panel boundaries. The user moves through it with the
//! mouse wheel, the up/down buttons, or a slide-out section menu.
//!
//! ## Components
//!
//! ```text
//! questions.json → survey → navigator → ui
//! config.toml + storage.json → theme → ui
//! ```
//!
//! 1. [`survey`]: question descriptors and attribute forwarding for the
//!    input element each question names.
//! 2. [`navigator`]: the panel navigation state machine. It keeps scroll
//!    position, the active panel, the highlighted menu entry and the
//!    nav-button visibility consistent.
//! 3. [`theme`]: resolves light/dark from the stored preference or the time
//!    of day and links the matching stylesheets.
//! 4. [`config`], [`cli`], [`telemetry`], [`error`]: configuration, command
//!    line, trace logging and error types.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod cli;
pub mod config;
pub mod error;
pub mod navigator;
pub mod survey;
pub mod telemetry;
pub mod theme;
pub mod ui;
