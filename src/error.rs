use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::AssetId;

/// Which catalog a load problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Phrase,
    Letter,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phrase => f.write_str("phrase"),
            Self::Letter => f.write_str("letter"),
        }
    }
}

/// Problems recorded while building a catalog. None of them abort loading;
/// they are kept so the health probe can report them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("{kind} catalog directory {} is unavailable: {reason}", .path.display())]
    DirectoryUnavailable {
        kind: CatalogKind,
        path: PathBuf,
        reason: String,
    },

    #[error("{kind} catalog entry in {} could not be read: {reason}", .dir.display())]
    UnreadableEntry {
        kind: CatalogKind,
        dir: PathBuf,
        reason: String,
    },

    #[error("{kind} catalog conflict: \"{discarded}\" and \"{kept}\" both map to \"{key}\", keeping \"{kept}\"")]
    DuplicateKey {
        kind: CatalogKind,
        key: String,
        kept: AssetId,
        discarded: AssetId,
    },

    #[error("{kind} catalog: \"{asset}\" does not yield a usable key")]
    InvalidKey { kind: CatalogKind, asset: AssetId },
}

impl serde::Serialize for CatalogIssue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Client errors raised at the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text must be at most {max} characters, got {len}")]
    TooLong { max: usize, len: usize },

    #[error("No valid characters found to convert")]
    NoValidCharacters,

    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl RequestError {
    /// HTTP status an outer layer should answer with.
    pub fn status(&self) -> u16 {
        400
    }
}

/// Errors surfaced by the binaries.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config: {0}")]
    Config(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}
