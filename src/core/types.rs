// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical identifier of a media asset: the file name as it was discovered in
/// its catalog directory (e.g. `good morning.gif`, `a.jpg`).
/// Turning it into a servable path is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AssetId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The outcome of mapping one piece of text to sign assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// The whole normalized text is a known phrase.
    Phrase { asset: AssetId, label: String },
    /// The text was spelled out letter by letter.
    /// `assets` follows the alphabetic characters of `source_text` left to right;
    /// `source_text` is the input exactly as received.
    LetterSequence {
        assets: Vec<AssetId>,
        source_text: String,
    },
    /// Nothing in the input could be signed.
    Empty,
}

impl ConversionResult {
    /// Number of assets the client has to show.
    pub fn asset_count(&self) -> usize {
        match self {
            Self::Phrase { .. } => 1,
            Self::LetterSequence { assets, .. } => assets.len(),
            Self::Empty => 0,
        }
    }
}
