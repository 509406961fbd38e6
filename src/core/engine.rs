use crate::catalog::{load_letter_catalog, load_phrase_catalog, LetterCatalog, Loaded, PhraseCatalog};
use crate::config::Config;
use crate::core::converter::{normalize, spell};
use crate::core::types::ConversionResult;
use crate::error::CatalogIssue;

/// Snapshot of what the catalogs hold, for health reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStatus {
    pub phrase_count: usize,
    pub letter_count: usize,
    pub missing_letters: Vec<char>,
    pub issues: Vec<CatalogIssue>,
}

impl CatalogStatus {
    /// No phrases, an incomplete alphabet, or any recorded load problem.
    pub fn is_degraded(&self) -> bool {
        self.phrase_count == 0 || !self.missing_letters.is_empty() || !self.issues.is_empty()
    }
}

// The engine owns both catalogs and never mutates them after construction,
// so a shared reference (or an Arc) is all concurrent callers need.
#[derive(Debug, Clone, Default)]
pub struct MappingEngine {
    phrases: PhraseCatalog,
    letters: LetterCatalog,
    issues: Vec<CatalogIssue>,
}

impl MappingEngine {
    pub fn new(phrases: PhraseCatalog, letters: LetterCatalog) -> Self {
        Self {
            phrases,
            letters,
            issues: Vec::new(),
        }
    }

    /// Takes ownership of freshly loaded catalogs, keeping their issues for `catalog_status`.
    pub fn from_loaded(phrases: Loaded<PhraseCatalog>, letters: Loaded<LetterCatalog>) -> Self {
        let mut issues = phrases.issues;
        issues.extend(letters.issues);
        Self {
            phrases: phrases.catalog,
            letters: letters.catalog,
            issues,
        }
    }

    /// Loads both catalogs from the directories named in `config`.
    /// Never fails: unreadable directories give empty catalogs and are reported as issues.
    pub fn load(config: &Config) -> Self {
        let phrases = load_phrase_catalog(&config.gifs_dir, &config.phrase_extensions);
        let letters = load_letter_catalog(&config.letters_dir, &config.letter_extensions);
        let engine = Self::from_loaded(phrases, letters);

        let status = engine.catalog_status();
        if status.is_degraded() {
            log::warn!(
                "Catalogs loaded in degraded state: {} phrases, {} letters, {} issues",
                status.phrase_count,
                status.letter_count,
                status.issues.len()
            );
        } else {
            log::info!(
                "Catalogs ready: {} phrases, {} letters",
                status.phrase_count,
                status.letter_count
            );
        }
        engine
    }

    /// Maps `text` to sign assets.
    ///
    /// 1. The text is normalized (trimmed, lowercased, whitespace collapsed);
    ///    blank text is [`ConversionResult::Empty`].
    /// 2. If the whole normalized text is a phrase key, that phrase is returned.
    ///    Matching is exact: no per-word, prefix or fuzzy matching.
    /// 3. Otherwise the original text is spelled letter by letter.
    ///
    /// Spelling is intentionally lossy: letters without an image are dropped
    /// rather than failing the request, so a partial alphabet still yields
    /// output. If nothing is left the result is [`ConversionResult::Empty`].
    pub fn convert(&self, text: &str) -> ConversionResult {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return ConversionResult::Empty;
        }

        if let Some(asset) = self.phrases.get(&normalized) {
            log::debug!("'{normalized}' matched phrase asset {asset}");
            return ConversionResult::Phrase {
                asset: asset.clone(),
                label: normalized,
            };
        }

        let assets = spell(text, &self.letters);
        if assets.is_empty() {
            log::debug!("'{normalized}' has nothing to spell");
            return ConversionResult::Empty;
        }

        log::debug!("'{normalized}' spelled with {} letters", assets.len());
        ConversionResult::LetterSequence {
            assets,
            source_text: text.to_string(),
        }
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        CatalogStatus {
            phrase_count: self.phrases.len(),
            letter_count: self.letters.len(),
            missing_letters: self.letters.missing_letters(),
            issues: self.issues.clone(),
        }
    }

    /// Every phrase key, alphabetically.
    pub fn phrases(&self) -> Vec<&str> {
        self.phrases.keys()
    }
}
