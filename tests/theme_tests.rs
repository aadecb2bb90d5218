// Integration tests for theme resolution, application and persistence

use std::fs;

use rustc_hash::FxHashMap;
use surveydeck::config::{ConfigFile, UserConfig};
use surveydeck::error::ThemeError;
use surveydeck::theme::{
    resolve_theme, DefaultTheme, FileStore, FixedClock, MemoryStore, PreferenceStore, ThemePaths,
    ThemeSelector, BASE_LINK_ID, PREFERRED_THEME_KEY, THEME_LINK_ID,
};

fn named(name: &str) -> DefaultTheme {
    DefaultTheme::Named(name.to_string())
}

#[test]
fn test_resolution_priority() {
    assert_eq!(resolve_theme(None, &DefaultTheme::Auto, 20), "dark");
    assert_eq!(resolve_theme(None, &DefaultTheme::Auto, 10), "light");
    assert_eq!(resolve_theme(Some("light"), &named("dark"), 10), "light");
    assert_eq!(resolve_theme(None, &named("dark"), 10), "dark");
}

#[test]
fn test_initialize_applies_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage.json");

    let selector = ThemeSelector::initialize(
        UserConfig::default(),
        ThemePaths::builtin(),
        Box::new(FileStore::new(&storage)),
        Box::new(FixedClock(20)),
    )
    .unwrap();

    assert_eq!(selector.current(), Some("dark"));
    assert_eq!(selector.head().href(BASE_LINK_ID), Some("builtin:base"));
    assert_eq!(selector.head().href(THEME_LINK_ID), Some("builtin:dark"));
    assert_eq!(
        FileStore::new(&storage).get(PREFERRED_THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn test_persisted_preference_survives_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage.json");

    let mut first = ThemeSelector::initialize(
        UserConfig::default(),
        ThemePaths::builtin(),
        Box::new(FileStore::new(&storage)),
        Box::new(FixedClock(20)),
    )
    .unwrap();
    first.apply("light").unwrap();

    // Night time and a dark default, but the stored choice wins
    let second = ThemeSelector::initialize(
        UserConfig {
            default_theme: Some(named("dark")),
        },
        ThemePaths::builtin(),
        Box::new(FileStore::new(&storage)),
        Box::new(FixedClock(23)),
    )
    .unwrap();
    assert_eq!(second.current(), Some("light"));
}

#[test]
fn test_initialize_repairs_corrupt_storage() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage.json");
    fs::write(&storage, "{oops").unwrap();

    let selector = ThemeSelector::initialize(
        UserConfig::default(),
        ThemePaths::builtin(),
        Box::new(FileStore::new(&storage)),
        Box::new(FixedClock(20)),
    )
    .unwrap();

    assert_eq!(selector.current(), Some("dark"));
    assert_eq!(
        FileStore::new(&storage).get(PREFERRED_THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn test_apply_is_idempotent() {
    let mut selector = ThemeSelector::initialize(
        UserConfig::default(),
        ThemePaths::builtin(),
        Box::new(MemoryStore::new()),
        Box::new(FixedClock(10)),
    )
    .unwrap();
    let head = selector.head().clone();
    selector.apply("light").unwrap();
    selector.apply("light").unwrap();
    assert_eq!(selector.head(), &head);
    assert_eq!(selector.head().links().len(), 2);
}

#[test]
fn test_custom_theme_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("sepia.toml");
    fs::write(&sheet, "[colors]\nbg = \"#f4ecd8\"\nfg = \"#5b4636\"\n").unwrap();

    let config = ConfigFile::parse(&format!(
        "default_theme = \"sepia\"\n[theme_paths]\nsepia = {:?}\n",
        sheet.display().to_string()
    ))
    .unwrap();

    let selector = ThemeSelector::initialize(
        config.user_config(None),
        ThemePaths::builtin().merged(&config.theme_paths),
        Box::new(MemoryStore::new()),
        Box::new(FixedClock(12)),
    )
    .unwrap();

    assert_eq!(selector.current(), Some("sepia"));
    assert_eq!(
        selector.palette().bg,
        ratatui::style::Color::Rgb(0xf4, 0xec, 0xd8)
    );
}

#[test]
fn test_theme_table_requires_base() {
    let mut table = FxHashMap::default();
    table.insert("light".to_string(), "builtin:light".to_string());
    assert!(matches!(
        ThemePaths::new(table),
        Err(ThemeError::MissingBasePath)
    ));
}
