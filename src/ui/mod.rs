//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — event loop, key and mouse mapping, menu slide animation
//! - **[`panes`]** — stateless render functions for the panels, chrome and status bar
//! - **[`theme`]** — the color palette produced by the linked stylesheets
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PanelNavigator`] and a [`ThemeSelector`] and call [`App::run`].
//!
//! [`PanelNavigator`]: crate::navigator::PanelNavigator
//! [`ThemeSelector`]: crate::theme::ThemeSelector
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
