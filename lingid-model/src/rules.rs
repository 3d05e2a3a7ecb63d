//! On-disk lexicons consulted by the rule engine (spec component D) before
//! falling back to probability scoring: `UniqueNgrams` (n-grams that occur
//! in exactly one language) and `MostCommonNgrams` (the top-K most frequent
//! n-grams per language/order).
//!
//! Grounded on heliport's `utils`/`languagemodel` loading idiom (read,
//! decompress, parse once, cache); these are new lexicons relative to
//! heliport, which has no unique-ngram or most-common-ngram shortcut.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::lang::Language;
use crate::model::OrderNgram;

fn brotli_decompress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = brotli::Decompressor::new(bytes, 4096);
    reader.read_to_end(&mut out)?;
    Ok(out)
}

/// On-disk shape for `MostCommonNgramsWriter` output (spec §4.J): a per-
/// language, per-order list of the most frequent n-grams, ASCII-sorted.
#[derive(Debug, Serialize, Deserialize)]
pub struct MostCommonNgramsFile {
    pub language: String,
    pub ngrams: Vec<String>,
}

/// `UniqueNgrams(language)` — the set of n-grams observed only in one
/// language's training corpus (spec §3). Keyed by n-gram string across all
/// orders; membership implies the n-gram voted for exactly `language`.
pub struct UniqueNgramsTable {
    /// n-gram -> the single language it is unique to.
    by_ngram: HashMap<String, Language>,
}

impl UniqueNgramsTable {
    pub fn empty() -> Self {
        Self {
            by_ngram: HashMap::new(),
        }
    }

    pub fn owner_of(&self, ngram: &str) -> Option<Language> {
        self.by_ngram.get(ngram).copied()
    }

    pub fn len(&self) -> usize {
        self.by_ngram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ngram.is_empty()
    }

    /// Build the table from each surviving language's unique-ngram file, if
    /// present. Missing files simply contribute nothing (same "no evidence"
    /// policy as the model store).
    pub fn load(model_dir: &Path, languages: &[Language]) -> Self {
        let mut by_ngram = HashMap::new();
        for &language in languages {
            let path = language_dir(model_dir, language).join("unique_ngrams.json.br");
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            let Ok(json) = brotli_decompress(&bytes) else {
                continue;
            };
            let Ok(file) = serde_json::from_slice::<MostCommonNgramsFile>(&json) else {
                continue;
            };
            for ngram in file.ngrams {
                by_ngram.insert(ngram, language);
            }
        }
        Self { by_ngram }
    }
}

/// `MostCommonNgrams(language, n)` — the top-K most frequent n-grams of a
/// given order for a language, used for the small bias rule in spec §4.D.
pub struct MostCommonNgramsTable {
    /// (language, order) -> set of the top-K ngrams for quick membership.
    by_language_order: HashMap<(Language, u8), HashSet<String>>,
}

impl MostCommonNgramsTable {
    pub fn empty() -> Self {
        Self {
            by_language_order: HashMap::new(),
        }
    }

    pub fn contains(&self, language: Language, order: OrderNgram, ngram: &str) -> bool {
        self.by_language_order
            .get(&(language, order.n() as u8))
            .map(|set| set.contains(ngram))
            .unwrap_or(false)
    }

    pub fn load(model_dir: &Path, languages: &[Language]) -> Result<Self, ModelError> {
        use strum::IntoEnumIterator;

        let mut by_language_order = HashMap::new();
        for &language in languages {
            let lang_dir = language_dir(model_dir, language);
            for order in OrderNgram::iter() {
                let path = lang_dir.join(format!("most_common_{}.json.br", order.file_stem()));
                let Ok(bytes) = fs::read(&path) else {
                    continue;
                };
                let json = brotli_decompress(&bytes).map_err(|_| ModelError::Decompress(path.clone()))?;
                let file: MostCommonNgramsFile =
                    serde_json::from_slice(&json).map_err(|source| ModelError::Json {
                        path: path.clone(),
                        source,
                    })?;
                by_language_order.insert(
                    (language, order.n() as u8),
                    file.ngrams.into_iter().collect(),
                );
            }
        }
        Ok(Self { by_language_order })
    }
}

/// Resolve a model directory path relative to some root, used identically
/// by the unique- and most-common-ngram loaders and the main model store.
pub fn language_dir(root: &Path, language: Language) -> PathBuf {
    root.join(language.iso_code_639_1().to_string().to_lowercase())
}
