// surveydeck: full-screen scroll-snapping survey presenter

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use surveydeck::cli::Cli;
use surveydeck::config::{default_config_path, ConfigFile};
use surveydeck::navigator::PanelNavigator;
use surveydeck::survey::load_questions;
use surveydeck::telemetry::init_tracing;
use surveydeck::theme::{
    FileStore, MemoryStore, PreferenceStore, SystemClock, ThemePaths, ThemeSelector,
};
use surveydeck::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(&cli) {
        // Raw mode is not on yet, so stderr still reaches the user
        eprintln!("Warning: trace logging disabled: {}", e);
    }

    let questions = load_questions(&cli.questions)
        .with_context(|| format!("could not load questions from {}", cli.questions.display()))?;

    let config_path = cli.config.clone().or_else(default_config_path);
    let config_file = match &config_path {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("could not load config from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let store: Box<dyn PreferenceStore> = match cli.storage.clone() {
        Some(path) => Box::new(FileStore::new(path)),
        None => match FileStore::default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!(error = %e, "no preference storage, theme choice lasts this session only");
                Box::new(MemoryStore::new())
            }
        },
    };

    let paths = ThemePaths::builtin().merged(&config_file.theme_paths);
    let themes = ThemeSelector::initialize(
        config_file.user_config(cli.default_theme.clone()),
        paths,
        store,
        Box::new(SystemClock),
    )
    .context("could not apply theme")?;

    info!(questions = questions.len(), "starting survey");
    let navigator = PanelNavigator::new(questions, 0);
    let mut app = App::new(navigator, themes, Some(cli.questions.clone()));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    res.context("survey UI failed")?;
    Ok(())
}
