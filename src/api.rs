//! Request and response documents exchanged with the outer web layer, and the
//! service that produces them from a [`MappingEngine`].

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::engine::MappingEngine;
use crate::core::types::{AssetId, ConversionResult};
use crate::error::{CatalogIssue, RequestError};

pub const SERVICE_NAME: &str = "Audio to ISL API";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConvertResponse {
    Gif { src: String, alt: String },
    Sequence { data: Vec<String>, original_text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: HealthState,
    pub version: String,
    pub phrases_count: usize,
    pub letters_count: usize,
    pub missing_letters: Vec<char>,
    pub issues: Vec<CatalogIssue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhrasesResponse {
    pub phrases: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub health: String,
}

/// Body sent back for any rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub detail: String,
}

impl From<&RequestError> for ErrorBody {
    fn from(err: &RequestError) -> Self {
        Self {
            status: err.status(),
            detail: err.to_string(),
        }
    }
}

/// Static routes assets are served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoutes {
    pub gifs: String,
    pub letters: String,
}

impl AssetRoutes {
    fn join(route: &str, asset: &AssetId) -> String {
        format!("{}/{}", route.trim_end_matches('/'), asset)
    }

    pub fn gif(&self, asset: &AssetId) -> String {
        Self::join(&self.gifs, asset)
    }

    pub fn letter(&self, asset: &AssetId) -> String {
        Self::join(&self.letters, asset)
    }
}

/// Validates requests, runs the engine and shapes its answers for the wire.
#[derive(Debug, Clone)]
pub struct IslService {
    engine: MappingEngine,
    routes: AssetRoutes,
    max_text_len: usize,
}

impl IslService {
    pub fn new(engine: MappingEngine, config: &Config) -> Self {
        Self {
            engine,
            routes: AssetRoutes {
                gifs: config.gif_route.clone(),
                letters: config.letter_route.clone(),
            },
            max_text_len: config.max_text_len,
        }
    }

    /// Loads the catalogs named in `config` and wraps them in a service.
    pub fn from_config(config: &Config) -> Self {
        Self::new(MappingEngine::load(config), config)
    }

    pub fn engine(&self) -> &MappingEngine {
        &self.engine
    }

    /// `POST /process` (and its alias `/api/convert`).
    pub fn process(&self, input: &TextInput) -> Result<ConvertResponse, RequestError> {
        let text = input.text.as_str();
        if text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }
        let len = text.chars().count();
        if len > self.max_text_len {
            return Err(RequestError::TooLong {
                max: self.max_text_len,
                len,
            });
        }

        match self.engine.convert(text) {
            ConversionResult::Phrase { asset, label } => Ok(ConvertResponse::Gif {
                src: self.routes.gif(&asset),
                alt: label,
            }),
            ConversionResult::LetterSequence {
                assets,
                source_text,
            } => Ok(ConvertResponse::Sequence {
                data: assets.iter().map(|asset| self.routes.letter(asset)).collect(),
                original_text: source_text,
            }),
            ConversionResult::Empty => Err(RequestError::NoValidCharacters),
        }
    }

    /// Same as [`process`](Self::process) for a raw JSON request body.
    pub fn process_json(&self, body: &str) -> Result<ConvertResponse, RequestError> {
        let input: TextInput =
            serde_json::from_str(body).map_err(|e| RequestError::Malformed(e.to_string()))?;
        self.process(&input)
    }

    /// `GET /health`
    pub fn health(&self) -> HealthResponse {
        let status = self.engine.catalog_status();
        HealthResponse {
            status: if status.is_degraded() {
                HealthState::Degraded
            } else {
                HealthState::Healthy
            },
            version: VERSION.to_string(),
            phrases_count: status.phrase_count,
            letters_count: status.letter_count,
            missing_letters: status.missing_letters,
            issues: status.issues,
        }
    }

    /// `GET /api/phrases`
    pub fn phrases(&self) -> PhrasesResponse {
        let phrases: Vec<String> = self.engine.phrases().into_iter().map(str::to_string).collect();
        PhrasesResponse {
            count: phrases.len(),
            phrases,
        }
    }

    /// `GET /`
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            message: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            health: "/health".to_string(),
        }
    }
}
