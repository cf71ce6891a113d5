use std::io;

use thiserror::Error;

/// Errors produced while building or persisting a document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// The text contained a character with no WinAnsi (cp1252) code,
    /// so it cannot be shown with the built-in Type 1 fonts.
    #[error("character {0:?} cannot be encoded as WinAnsi")]
    Unencodable(char),
}

pub type Result<T> = std::result::Result<T, Error>;
