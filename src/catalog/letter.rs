use crate::catalog::Loaded;
use crate::core::types::AssetId;
use crate::error::{CatalogIssue, CatalogKind};

const ALPHABET_LEN: usize = 26;

fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_lowercase() as u8 - b'a') as usize)
}

/// Finger-spelling images for 'a'..='z'. A catalog with fewer than 26
/// entries still works; lookups for the missing letters simply miss.
#[derive(Debug, Clone, Default)]
pub struct LetterCatalog {
    slots: [Option<AssetId>; ALPHABET_LEN],
}

impl LetterCatalog {
    pub fn builder() -> LetterCatalogBuilder {
        LetterCatalogBuilder::default()
    }

    pub fn from_pairs<I, A>(pairs: I) -> Loaded<Self>
    where
        I: IntoIterator<Item = (char, A)>,
        A: Into<AssetId>,
    {
        let mut builder = Self::builder();
        for (letter, asset) in pairs {
            builder.insert(letter, asset.into());
        }
        builder.build()
    }

    /// Case-insensitive lookup. Anything that is not an ASCII letter misses.
    pub fn get(&self, letter: char) -> Option<&AssetId> {
        slot(letter).and_then(|i| self.slots[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn missing_letters(&self) -> Vec<char> {
        ('a'..='z')
            .filter(|&letter| self.get(letter).is_none())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct LetterCatalogBuilder {
    slots: [Option<AssetId>; ALPHABET_LEN],
    issues: Vec<CatalogIssue>,
}

impl LetterCatalogBuilder {
    /// Adds `asset` for `letter` (either case). The first asset for a letter wins.
    pub fn insert(&mut self, letter: char, asset: AssetId) -> &mut Self {
        let Some(i) = slot(letter) else {
            return self.record(CatalogIssue::InvalidKey {
                kind: CatalogKind::Letter,
                asset,
            });
        };

        match &self.slots[i] {
            Some(kept) => {
                let issue = CatalogIssue::DuplicateKey {
                    kind: CatalogKind::Letter,
                    key: letter.to_ascii_lowercase().to_string(),
                    kept: kept.clone(),
                    discarded: asset,
                };
                self.record(issue)
            }
            None => {
                self.slots[i] = Some(asset);
                self
            }
        }
    }

    pub fn record(&mut self, issue: CatalogIssue) -> &mut Self {
        log::warn!("{issue}");
        self.issues.push(issue);
        self
    }

    pub fn build(self) -> Loaded<LetterCatalog> {
        Loaded {
            catalog: LetterCatalog { slots: self.slots },
            issues: self.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = LetterCatalog::from_pairs([('A', "A.jpg")]).catalog;
        assert_eq!(catalog.get('a'), Some(&AssetId::from("A.jpg")));
        assert_eq!(catalog.get('A'), Some(&AssetId::from("A.jpg")));
        assert_eq!(catalog.get('b'), None);
        assert_eq!(catalog.get('1'), None);
        assert_eq!(catalog.get('é'), None);
    }

    #[test]
    fn reports_missing_letters() {
        let pairs = ('a'..='z')
            .filter(|&c| c != 'q' && c != 'x')
            .map(|c| (c, format!("{c}.jpg")));
        let catalog = LetterCatalog::from_pairs(pairs).catalog;

        assert_eq!(catalog.len(), 24);
        assert_eq!(catalog.missing_letters(), vec!['q', 'x']);
    }

    #[test]
    fn duplicate_letter_keeps_first_asset() {
        let loaded = LetterCatalog::from_pairs([('a', "A.png"), ('a', "a.jpg")]);
        assert_eq!(loaded.catalog.get('a'), Some(&AssetId::from("A.png")));
        assert!(matches!(
            loaded.issues.as_slice(),
            [CatalogIssue::DuplicateKey { key, .. }] if key == "a"
        ));
    }

    #[test]
    fn non_letter_is_rejected() {
        let loaded = LetterCatalog::from_pairs([('7', "7.jpg")]);
        assert!(loaded.catalog.is_empty());
        assert_eq!(loaded.issues.len(), 1);
    }
}
