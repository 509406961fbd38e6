use std::fs;
use std::path::Path;

use isl_core::catalog::{load_letter_catalog, load_phrase_catalog};
use isl_core::error::{CatalogIssue, CatalogKind};
use isl_core::{AssetId, Config, ConversionResult, IslService, MappingEngine};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"asset").expect("write should succeed");
}

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

fn asset_dirs() -> (TempDir, Config) {
    let root = TempDir::new().expect("temp dir should be creatable");
    let gifs = root.path().join("ISL_Gifs");
    let letters = root.path().join("letters");
    fs::create_dir_all(&gifs).unwrap();
    fs::create_dir_all(&letters).unwrap();

    for phrase in ["hello", "good morning", "do you watch TV", "thank"] {
        touch(&gifs, &format!("{phrase}.gif"));
    }
    for c in 'a'..='z' {
        touch(&letters, &format!("{c}.jpg"));
    }

    let config = Config {
        gifs_dir: gifs,
        letters_dir: letters,
        ..Config::default()
    };
    (root, config)
}

#[test]
fn phrase_keys_come_from_file_stems() {
    let (_root, config) = asset_dirs();
    let loaded = load_phrase_catalog(&config.gifs_dir, &config.phrase_extensions);

    assert!(loaded.issues.is_empty());
    assert_eq!(
        loaded.catalog.keys(),
        ["do you watch tv", "good morning", "hello", "thank"]
    );
    assert_eq!(
        loaded.catalog.get("do you watch tv"),
        Some(&AssetId::from("do you watch TV.gif"))
    );
}

#[test]
fn colliding_phrase_files_are_reported_and_one_is_kept() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "Good Morning.gif");
    touch(root.path(), "good  morning.gif");

    let loaded = load_phrase_catalog(root.path(), &exts(&["gif"]));

    assert_eq!(loaded.catalog.len(), 1);
    // Entries are visited in file-name order, so the upper-case name wins.
    assert_eq!(
        loaded.catalog.get("good morning"),
        Some(&AssetId::from("Good Morning.gif"))
    );
    assert_eq!(
        loaded.issues,
        vec![CatalogIssue::DuplicateKey {
            kind: CatalogKind::Phrase,
            key: "good morning".to_string(),
            kept: AssetId::from("Good Morning.gif"),
            discarded: AssetId::from("good  morning.gif"),
        }]
    );
}

#[test]
fn unaccepted_files_and_directories_are_skipped() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "hello.GIF");
    touch(root.path(), "notes.txt");
    touch(root.path(), ".DS_Store");
    fs::create_dir(root.path().join("nested.gif")).unwrap();

    let loaded = load_phrase_catalog(root.path(), &exts(&["gif"]));
    assert!(loaded.issues.is_empty());
    assert_eq!(loaded.catalog.keys(), ["hello"]);
}

#[test]
fn missing_directory_gives_an_empty_catalog_and_an_issue() {
    let root = TempDir::new().unwrap();
    let gone = root.path().join("nope");

    let loaded = load_phrase_catalog(&gone, &exts(&["gif"]));
    assert!(loaded.catalog.is_empty());
    assert!(matches!(
        loaded.issues.as_slice(),
        [CatalogIssue::DirectoryUnavailable { kind: CatalogKind::Phrase, path, .. }] if path == &gone
    ));
}

#[test]
fn letter_catalog_only_takes_single_letter_stems() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "a.jpg");
    touch(root.path(), "B.png");
    touch(root.path(), "ch.jpg");
    touch(root.path(), "1.jpg");
    touch(root.path(), "c.gif");

    let loaded = load_letter_catalog(root.path(), &exts(&["jpg", "jpeg", "png"]));
    let catalog = loaded.catalog;

    assert!(loaded.issues.is_empty());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get('b'), Some(&AssetId::from("B.png")));
    assert_eq!(catalog.get('c'), None);
    assert_eq!(catalog.missing_letters().len(), 24);
}

#[test]
fn duplicate_letter_images_conflict() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "a.jpg");
    touch(root.path(), "A.png");

    let loaded = load_letter_catalog(root.path(), &exts(&["jpg", "png"]));
    assert_eq!(loaded.catalog.get('a'), Some(&AssetId::from("A.png")));
    assert_eq!(loaded.issues.len(), 1);
}

#[test]
fn engine_loads_from_config() {
    let (_root, config) = asset_dirs();
    let engine = MappingEngine::load(&config);

    let status = engine.catalog_status();
    assert_eq!(status.phrase_count, 4);
    assert_eq!(status.letter_count, 26);
    assert!(!status.is_degraded());

    assert_eq!(
        engine.convert("Thank"),
        ConversionResult::Phrase {
            asset: AssetId::from("thank.gif"),
            label: "thank".to_string(),
        }
    );
    assert_eq!(engine.convert("thank you").asset_count(), 8);
}

#[test]
fn missing_letter_file_degrades_and_drops_that_letter() {
    let (_root, config) = asset_dirs();
    fs::remove_file(config.letters_dir.join("q.jpg")).unwrap();

    let service = IslService::from_config(&config);
    let health = service.health();
    assert_eq!(health.letters_count, 25);
    assert_eq!(health.missing_letters, vec!['q']);
    assert_eq!(
        serde_json::to_value(&health).unwrap()["status"],
        serde_json::json!("degraded")
    );

    match service.engine().convert("quiz") {
        ConversionResult::LetterSequence { assets, source_text } => {
            assert_eq!(source_text, "quiz");
            assert_eq!(
                assets,
                vec![AssetId::from("u.jpg"), AssetId::from("i.jpg"), AssetId::from("z.jpg")]
            );
        }
        other => panic!("expected a letter sequence, got {other:?}"),
    }
}

#[test]
fn without_any_phrases_everything_is_spelled() {
    let (root, mut config) = asset_dirs();
    config.gifs_dir = root.path().join("missing");

    let service = IslService::from_config(&config);
    let health = service.health();
    assert_eq!(health.phrases_count, 0);
    assert_eq!(health.issues.len(), 1);

    assert!(matches!(
        service.engine().convert("hello"),
        ConversionResult::LetterSequence { ref assets, .. } if assets.len() == 5
    ));
}

#[test]
fn json_config_with_dotted_extensions_loads_phrases() {
    let (root, config) = asset_dirs();
    let path = root.path().join("isl.json");
    let body = serde_json::json!({
        "gifs_dir": config.gifs_dir,
        "letters_dir": config.letters_dir,
        "phrase_extensions": [".gif"],
        "letter_extensions": [".JPG"]
    });
    fs::write(&path, body.to_string()).unwrap();

    let config = Config::from_json_file(&path).expect("config should parse");
    let health = IslService::from_config(&config).health();
    assert_eq!(health.phrases_count, 4);
    assert_eq!(health.letters_count, 26);
    assert!(health.issues.is_empty());
}
