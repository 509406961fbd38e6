// File: src/catalog/loader.rs
use std::fs;
use std::path::Path;

use crate::catalog::{LetterCatalog, Loaded, PhraseCatalog};
use crate::core::types::AssetId;
use crate::error::{CatalogIssue, CatalogKind};

/// An asset file that passed the extension filter.
struct AssetFile {
    stem: String,
    asset: AssetId,
}

fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Lists the asset files of `dir`, sorted by file name so that the
/// "first seen" entry of a conflict does not depend on the filesystem.
fn scan_dir(
    kind: CatalogKind,
    dir: &Path,
    extensions: &[String],
    issues: &mut Vec<CatalogIssue>,
) -> Vec<AssetFile> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            let issue = CatalogIssue::DirectoryUnavailable {
                kind,
                path: dir.to_path_buf(),
                reason: err.to_string(),
            };
            log::warn!("{issue}");
            issues.push(issue);
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let issue = CatalogIssue::UnreadableEntry {
                    kind,
                    dir: dir.to_path_buf(),
                    reason: err.to_string(),
                };
                log::warn!("{issue}");
                issues.push(issue);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            log::trace!("Skipping non-file: {}", path.display());
            continue;
        }
        if !has_accepted_extension(&path, extensions) {
            log::debug!("Skipping {} (extension not accepted for {kind} assets)", path.display());
            continue;
        }

        let names = path
            .file_name()
            .and_then(|name| name.to_str())
            .zip(path.file_stem().and_then(|stem| stem.to_str()));
        match names {
            Some((file_name, stem)) => files.push(AssetFile {
                stem: stem.to_string(),
                asset: AssetId::new(file_name),
            }),
            None => log::debug!("Skipping {} (file name is not UTF-8)", path.display()),
        }
    }

    files.sort_by(|a, b| a.asset.cmp(&b.asset));
    files
}

/// Builds the phrase catalog from a directory of animations such as `good morning.gif`.
/// The file stem, normalized, becomes the phrase key.
pub fn load_phrase_catalog(dir: &Path, extensions: &[String]) -> Loaded<PhraseCatalog> {
    let mut issues = Vec::new();
    let files = scan_dir(CatalogKind::Phrase, dir, extensions, &mut issues);

    let mut builder = PhraseCatalog::builder();
    for file in files {
        builder.insert(&file.stem, file.asset);
    }

    let mut loaded = builder.build();
    issues.append(&mut loaded.issues);
    loaded.issues = issues;

    log::info!(
        "Loaded {} phrases from {} ({} issues)",
        loaded.catalog.len(),
        dir.display(),
        loaded.issues.len()
    );
    loaded
}

/// Builds the letter catalog from a directory of images such as `a.jpg`.
/// Files whose stem is not a single ASCII letter are ignored.
pub fn load_letter_catalog(dir: &Path, extensions: &[String]) -> Loaded<LetterCatalog> {
    let mut issues = Vec::new();
    let files = scan_dir(CatalogKind::Letter, dir, extensions, &mut issues);

    let mut builder = LetterCatalog::builder();
    for file in files {
        let mut chars = file.stem.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => {
                builder.insert(letter, file.asset);
            }
            _ => log::debug!("Skipping {} (not a single letter)", file.asset),
        }
    }

    let mut loaded = builder.build();
    issues.append(&mut loaded.issues);
    loaded.issues = issues;

    let missing = loaded.catalog.missing_letters();
    if missing.is_empty() {
        log::info!("Loaded all 26 letters from {}", dir.display());
    } else {
        let missing: String = missing.into_iter().collect();
        log::warn!(
            "Letter catalog at {} is missing {} letters ({missing}); they will be skipped when spelling",
            dir.display(),
            missing.len()
        );
    }
    loaded
}
