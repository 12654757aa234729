//! Error types for Prae.

use std::io;

/// Errors produced by the Prae console.
#[derive(Debug, thiserror::Error)]
pub enum PraeError {
    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PraeError>;
