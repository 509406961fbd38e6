use crate::catalog::LetterCatalog;
use crate::core::types::AssetId;

/// Lowercases `text`, trims it and collapses every whitespace run to a single space.
/// This is the form phrase keys are stored in.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        for c in word.chars() {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Finger-spells `text` against the letter catalog.
///
/// Every ASCII letter is looked up in lowercase. Letters without a catalog
/// entry are dropped, and anything that is not an ASCII letter (spaces,
/// digits, punctuation, accented letters) is skipped without a lookup.
pub fn spell(text: &str, letters: &LetterCatalog) -> Vec<AssetId> {
    let mut assets = Vec::with_capacity(text.len());

    for c in text.chars() {
        match c {
            'a'..='z' | 'A'..='Z' => match letters.get(c) {
                Some(asset) => assets.push(asset.clone()),
                None => log::trace!("no sign image for letter '{c}', skipping"),
            },
            _ => {}
        }
    }

    assets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize("  Good   MORNING \t"), "good morning");
        assert_eq!(normalize("hello"), "hello");
        assert_eq!(normalize("do you\nwatch TV"), "do you watch tv");
    }

    #[test]
    fn normalize_of_blank_text_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn normalize_keeps_punctuation() {
        assert_eq!(normalize("What's  up?"), "what's up?");
    }

    #[test]
    fn spell_skips_non_letters_and_unmapped_letters() {
        let letters = LetterCatalog::from_pairs([('h', "h.jpg"), ('i', "i.jpg")]).catalog;

        let assets = spell("Hi, 2 hI!", &letters);
        let names: Vec<&str> = assets.iter().map(AssetId::as_str).collect();
        assert_eq!(names, ["h.jpg", "i.jpg", "h.jpg", "i.jpg"]);

        assert!(spell("xyz 123", &letters).is_empty());
    }

    #[test]
    fn spell_ignores_non_ascii_letters() {
        let letters =
            LetterCatalog::from_pairs([('c', "c.jpg"), ('a', "a.jpg"), ('f', "f.jpg"), ('e', "e.jpg")])
                .catalog;
        let assets = spell("café", &letters);
        let names: Vec<&str> = assets.iter().map(AssetId::as_str).collect();
        assert_eq!(names, ["c.jpg", "a.jpg", "f.jpg"]);
    }
}
