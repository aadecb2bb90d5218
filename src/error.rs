//! Error types for survey loading, configuration and theming
//!
//! Navigation never fails: out-of-range requests and empty surveys degrade to
//! no-ops. Errors only arise at the edges where files are read or the theme
//! table is consulted.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the survey and its configuration
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid questions file: {0}")]
    Questions(#[from] serde_json::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Errors raised by the theme selector and stylesheet loading
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme path table has no `base` entry
    #[error("theme path table has no \"base\" entry")]
    MissingBasePath,

    /// The resolved theme has no stylesheet in the theme path table
    #[error("no stylesheet configured for theme \"{0}\"")]
    UnknownTheme(String),

    #[error("unknown built-in stylesheet \"{0}\"")]
    UnknownBuiltin(String),

    #[error("failed to read stylesheet {}: {source}", .path.display())]
    StylesheetIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid stylesheet {href}: {message}")]
    StylesheetParse { href: String, message: String },
}

/// Errors raised by the persistent preference store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage location available")]
    Unavailable,

    #[error("storage io error: {0}")]
    Io(#[from] io::Error),

    #[error("corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors raised while setting up trace logging
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("cannot open trace log {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a global trace subscriber is already installed")]
    AlreadyInstalled,
}
