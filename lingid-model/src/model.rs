//! The n-gram model store (spec component B).
//!
//! Grounded on heliport's `languagemodel.rs::Model`/`ModelNgram`: a fixed
//! number of per-order tables loaded in parallel and joined before the
//! caller sees anything. The on-disk format here is Brotli-compressed JSON
//! rather than heliport's `bitcode`, and a per-`(Language, order)` memoizing
//! cache with at-most-once load replaces heliport's "load everything once at
//! startup" model, since CORE supports lazy loading.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::error::ModelError;
use crate::lang::Language;

/// The five n-gram orders the design uses (spec §3's `n ∈ {1..5}`).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumIter, EnumCount)]
pub enum OrderNgram {
    Unigram = 1,
    Bigram = 2,
    Trigram = 3,
    Quadrigram = 4,
    Fivegram = 5,
}

impl OrderNgram {
    pub fn n(&self) -> usize {
        *self as usize
    }

    pub fn from_n(n: usize) -> Option<Self> {
        match n {
            1 => Some(Self::Unigram),
            2 => Some(Self::Bigram),
            3 => Some(Self::Trigram),
            4 => Some(Self::Quadrigram),
            5 => Some(Self::Fivegram),
            _ => None,
        }
    }

    /// File stem used on disk, e.g. `unigrams.json.br`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Unigram => "unigrams",
            Self::Bigram => "bigrams",
            Self::Trigram => "trigrams",
            Self::Quadrigram => "quadrigrams",
            Self::Fivegram => "fivegrams",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json.br", self.file_stem())
    }
}

/// The on-disk shape: top-level keys in order `"language"`, `"ngrams"`
/// (spec §6). `ngrams` maps a reduced fraction string `"num/den"` to a
/// space-joined, ASCII-sorted list of n-grams sharing that probability.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelFile {
    pub language: String,
    pub ngrams: BTreeMap<String, String>,
}

/// The expanded, in-memory form: n-gram to f64 probability.
#[derive(Debug)]
pub struct NgramModel {
    pub language: Language,
    pub order: OrderNgram,
    pub probabilities: HashMap<String, f64>,
}

impl NgramModel {
    pub fn empty(language: Language, order: OrderNgram) -> Self {
        Self {
            language,
            order,
            probabilities: HashMap::new(),
        }
    }

    pub fn get(&self, ngram: &str) -> Option<f64> {
        self.probabilities.get(ngram).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

/// Parse a reduced-fraction key (`"num/den"`) into `(num, den)`.
pub fn parse_fraction(key: &str) -> Result<(u64, u64), ModelError> {
    let (num, den) = key
        .split_once('/')
        .ok_or_else(|| ModelError::MalformedFraction(key.to_string()))?;
    let num: u64 = num
        .parse()
        .map_err(|_| ModelError::MalformedFraction(key.to_string()))?;
    let den: u64 = den
        .parse()
        .map_err(|_| ModelError::MalformedFraction(key.to_string()))?;
    Ok((num, den))
}

/// Reduce `num/den` to lowest terms via Euclid's algorithm.
pub fn reduce_fraction(num: u64, den: u64) -> (u64, u64) {
    fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }
    if num == 0 {
        return (0, 1);
    }
    let g = gcd(num, den);
    (num / g, den / g)
}

fn brotli_decompress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = brotli::Decompressor::new(bytes, 4096);
    reader.read_to_end(&mut out)?;
    Ok(out)
}

pub fn brotli_compress(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let params = brotli::enc::BrotliEncoderParams::default();
    brotli::BrotliCompress(&mut std::io::Cursor::new(bytes), &mut out, &params)
        .expect("in-memory brotli compression cannot fail");
    out
}

/// Decode a brotli-compressed `ModelFile` blob into an expanded `NgramModel`.
pub fn decode_model_file(
    bytes: &[u8],
    language: Language,
    order: OrderNgram,
    path: &Path,
) -> Result<NgramModel, ModelError> {
    let json = brotli_decompress(bytes).map_err(|_| ModelError::Decompress(path.to_path_buf()))?;
    let file: ModelFile = serde_json::from_slice(&json).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut probabilities = HashMap::with_capacity(file.ngrams.len() * 4);
    for (fraction, ngrams) in &file.ngrams {
        let (num, den) = parse_fraction(fraction)?;
        let prob = num as f64 / den as f64;
        for ngram in ngrams.split_whitespace() {
            probabilities.insert(ngram.to_string(), prob);
        }
    }

    Ok(NgramModel {
        language,
        order,
        probabilities,
    })
}

/// Encode an expanded n-gram-to-probability map back into the inverted,
/// fraction-keyed on-disk shape. Used by the training writer (component J).
pub fn encode_model_file(language: &str, fractions: BTreeMap<(u64, u64), Vec<String>>) -> ModelFile {
    let mut ngrams = BTreeMap::new();
    for ((num, den), mut grams) in fractions {
        if grams.is_empty() {
            continue;
        }
        grams.sort();
        ngrams.insert(format!("{num}/{den}"), grams.join(" "));
    }
    ModelFile {
        language: language.to_string(),
        ngrams,
    }
}

type CacheKey = (Language, OrderNgram);
type CacheSlot = Arc<OnceCell<Arc<NgramModel>>>;

/// Loads and memoizes per-`(Language, order)` n-gram tables.
///
/// Grounded on heliport's `Model::load` (parallel per-order loads joined
/// before returning), generalized with an at-most-once-per-key cache so
/// repeat lookups for the same language/order are free and concurrent
/// first-touches never double-load (spec §5's cache-stampede avoidance).
pub struct ModelStore {
    model_dir: PathBuf,
    cache: Mutex<HashMap<CacheKey, CacheSlot>>,
}

impl ModelStore {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn path_for(&self, language: Language, order: OrderNgram) -> PathBuf {
        self.model_dir
            .join(language.iso_code_639_1().to_string().to_lowercase())
            .join(order.file_name())
    }

    /// Return the memoized table for `(language, order)`, loading it from
    /// disk on first touch. A missing file is not an error: it yields an
    /// empty table (spec §4.B — "no evidence available").
    pub fn load(&self, language: Language, order: OrderNgram) -> Arc<NgramModel> {
        let key = (language, order);
        let slot = {
            let mut cache = self.cache.lock().unwrap();
            cache.entry(key).or_insert_with(|| Arc::new(OnceCell::new())).clone()
        };
        slot.get_or_init(|| Arc::new(self.load_uncached(language, order)))
            .clone()
    }

    fn load_uncached(&self, language: Language, order: OrderNgram) -> NgramModel {
        let path = self.path_for(language, order);
        match fs::read(&path) {
            Ok(bytes) => match decode_model_file(&bytes, language, order, &path) {
                Ok(model) => {
                    debug!("loaded {} {} entries from {}", language, order, path.display());
                    model
                }
                Err(e) => {
                    warn!("could not decode model file '{}': {e}", path.display());
                    NgramModel::empty(language, order)
                }
            },
            Err(_) => {
                debug!("model file '{}' not found, using empty table", path.display());
                NgramModel::empty(language, order)
            }
        }
    }

    /// Eagerly load every order for every given language (used by
    /// `with_preloaded_language_models`, spec §5).
    pub fn preload(&self, languages: &[Language]) {
        use rayon::prelude::*;
        use strum::IntoEnumIterator;

        let orders: Vec<OrderNgram> = OrderNgram::iter().collect();
        let work: Vec<(Language, OrderNgram)> = languages
            .iter()
            .flat_map(|&lang| orders.iter().map(move |&order| (lang, order)))
            .collect();
        work.par_iter().for_each(|&(lang, order)| {
            self.load(lang, order);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_reduction_round_trips() {
        assert_eq!(reduce_fraction(2, 4), (1, 2));
        assert_eq!(reduce_fraction(0, 10), (0, 1));
        assert_eq!(reduce_fraction(7, 7), (1, 1));
    }

    #[test]
    fn parse_fraction_rejects_malformed_keys() {
        assert!(parse_fraction("1-2").is_err());
        assert!(parse_fraction("a/2").is_err());
    }

    #[test]
    fn decode_expands_inverted_fraction_map() {
        let mut ngrams = BTreeMap::new();
        ngrams.insert("1/2".to_string(), "th he".to_string());
        ngrams.insert("1/4".to_string(), "er".to_string());
        let file = ModelFile {
            language: "en".to_string(),
            ngrams,
        };
        let json = serde_json::to_vec(&file).unwrap();
        let compressed = brotli_compress(&json);

        let model = decode_model_file(
            &compressed,
            Language::English,
            OrderNgram::Bigram,
            Path::new("unigrams.json.br"),
        )
        .unwrap();
        assert_eq!(model.get("th"), Some(0.5));
        assert_eq!(model.get("he"), Some(0.5));
        assert_eq!(model.get("er"), Some(0.25));
        assert_eq!(model.get("zz"), None);
    }

    #[test]
    fn missing_file_yields_empty_table_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let model = store.load(Language::English, OrderNgram::Unigram);
        assert!(model.is_empty());
    }

    #[test]
    fn repeated_loads_return_the_same_cached_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path());
        let a = store.load(Language::English, OrderNgram::Unigram);
        let b = store.load(Language::English, OrderNgram::Unigram);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
