//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::theme::DefaultTheme;

/// Full-screen survey presenter with snap-scrolling question panels
#[derive(Debug, Clone, Parser)]
#[command(name = "surveydeck", version, about)]
pub struct Cli {
    /// JSON file holding the ordered list of questions
    #[arg(value_name = "QUESTIONS")]
    pub questions: PathBuf,

    /// Config file (defaults to ~/.config/surveydeck/config.toml)
    #[arg(long, env = "SURVEYDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default theme when no preference is stored: auto, light, dark, or a configured name
    #[arg(long, value_name = "THEME")]
    pub default_theme: Option<DefaultTheme>,

    /// Preference storage file (defaults to the local data directory)
    #[arg(long, env = "SURVEYDECK_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Write JSON trace logs
    #[arg(long)]
    pub logs: bool,

    /// Disable trace logs even if requested elsewhere
    #[arg(long)]
    pub no_logs: bool,
}
