use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where the asset directories live and how their files are exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gifs_dir: PathBuf,
    pub letters_dir: PathBuf,
    /// Route prefix the static host serves `gifs_dir` under.
    pub gif_route: String,
    /// Route prefix the static host serves `letters_dir` under.
    pub letter_route: String,
    pub phrase_extensions: Vec<String>,
    pub letter_extensions: Vec<String>,
    /// Longest request text accepted, in characters.
    pub max_text_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gifs_dir: PathBuf::from("ISL_Gifs"),
            letters_dir: PathBuf::from("letters"),
            gif_route: "/static/gifs".to_string(),
            letter_route: "/static/letters".to_string(),
            phrase_extensions: vec!["gif".to_string()],
            letter_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            max_text_len: 500,
        }
    }
}

/// Lowercases each extension and strips a leading dot; blanks are dropped.
fn normalize_extensions<'a, I>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn parse_extensions(list: &str) -> Vec<String> {
    normalize_extensions(list.split(','))
}

impl Config {
    /// Defaults overlaid with the `ISL_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::Config(format!("cannot open {}: {e}", path.display()))
        })?;
        let mut config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.phrase_extensions = normalize_extensions(config.phrase_extensions.iter().map(String::as_str));
        config.letter_extensions = normalize_extensions(config.letter_extensions.iter().map(String::as_str));
        Ok(config)
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("ISL_GIFS_DIR") {
            self.gifs_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("ISL_LETTERS_DIR") {
            self.letters_dir = PathBuf::from(dir);
        }
        if let Some(route) = lookup("ISL_GIF_ROUTE") {
            self.gif_route = route;
        }
        if let Some(route) = lookup("ISL_LETTER_ROUTE") {
            self.letter_route = route;
        }
        if let Some(list) = lookup("ISL_PHRASE_EXTENSIONS") {
            self.phrase_extensions = parse_extensions(&list);
        }
        if let Some(list) = lookup("ISL_LETTER_EXTENSIONS") {
            self.letter_extensions = parse_extensions(&list);
        }
        if let Some(len) = lookup("ISL_MAX_TEXT_LEN") {
            self.max_text_len = len.trim().parse().map_err(|_| {
                AppError::Config(format!("ISL_MAX_TEXT_LEN must be a non-negative integer, got {len:?}"))
            })?;
        }
        Ok(self)
    }
}
