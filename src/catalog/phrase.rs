use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::catalog::Loaded;
use crate::core::converter::normalize;
use crate::core::types::AssetId;
use crate::error::{CatalogIssue, CatalogKind};

/// Normalized phrase text to animation. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct PhraseCatalog {
    entries: HashMap<String, AssetId>,
}

impl PhraseCatalog {
    pub fn builder() -> PhraseCatalogBuilder {
        PhraseCatalogBuilder::default()
    }

    /// Builds a catalog from in-memory `(phrase, asset)` pairs.
    pub fn from_pairs<I, P, A>(pairs: I) -> Loaded<Self>
    where
        I: IntoIterator<Item = (P, A)>,
        P: AsRef<str>,
        A: Into<AssetId>,
    {
        let mut builder = Self::builder();
        for (phrase, asset) in pairs {
            builder.insert(phrase.as_ref(), asset.into());
        }
        builder.build()
    }

    /// Exact lookup of an already normalized key.
    pub fn get(&self, key: &str) -> Option<&AssetId> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in alphabetical order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[derive(Debug, Default)]
pub struct PhraseCatalogBuilder {
    entries: HashMap<String, AssetId>,
    issues: Vec<CatalogIssue>,
}

impl PhraseCatalogBuilder {
    /// Adds `asset` under the normalized form of `phrase`.
    /// A key that is already taken keeps its first asset and the clash is recorded.
    pub fn insert(&mut self, phrase: &str, asset: AssetId) -> &mut Self {
        let key = normalize(phrase);
        if key.is_empty() {
            self.record(CatalogIssue::InvalidKey {
                kind: CatalogKind::Phrase,
                asset,
            });
            return self;
        }

        match self.entries.entry(key) {
            Entry::Occupied(taken) => {
                let issue = CatalogIssue::DuplicateKey {
                    kind: CatalogKind::Phrase,
                    key: taken.key().clone(),
                    kept: taken.get().clone(),
                    discarded: asset,
                };
                self.record(issue);
            }
            Entry::Vacant(slot) => {
                slot.insert(asset);
            }
        }
        self
    }

    pub fn record(&mut self, issue: CatalogIssue) -> &mut Self {
        log::warn!("{issue}");
        self.issues.push(issue);
        self
    }

    pub fn build(self) -> Loaded<PhraseCatalog> {
        Loaded {
            catalog: PhraseCatalog {
                entries: self.entries,
            },
            issues: self.issues,
        }
    }
}
