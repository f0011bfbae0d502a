use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PindeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input table not found: {}", .0.display())]
    MissingTable(PathBuf),

    #[error("Audio file missing or unreadable: {0}")]
    MissingAudio(String),

    #[error("Deck builder error: {0}")]
    DeckBuilder(String),

    #[error("PindeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for PindeckError {
    fn from(error: std::io::Error) -> Self {
        PindeckError::Io(Box::new(error))
    }
}
