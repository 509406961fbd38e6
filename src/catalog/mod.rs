//! Immutable phrase and letter catalogs, and the loaders that build them from
//! asset directories at startup.

mod letter;
mod loader;
mod phrase;

pub use letter::{LetterCatalog, LetterCatalogBuilder};
pub use loader::{load_letter_catalog, load_phrase_catalog};
pub use phrase::{PhraseCatalog, PhraseCatalogBuilder};

use crate::error::CatalogIssue;

/// A freshly built catalog together with every problem recorded while building it.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub catalog: T,
    pub issues: Vec<CatalogIssue>,
}
