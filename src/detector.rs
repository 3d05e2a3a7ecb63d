//! Single-text classifier and its immutable builder (spec component G).
//!
//! Grounded on heliport's `Identifier`/`Identifier::load` for the overall
//! "hold an `Arc` to shared model state, clone cheaply per-thread" shape,
//! and on the Design Note's "builder as convenience, not semantic
//! requirement": `LanguageDetectorBuilder` accumulates plain fields and
//! `build()` produces an immutable `DetectorConfig`/`LanguageDetector` pair,
//! mirroring how heliport's `Identifier::load` does all fallible setup
//! before handing back a ready-to-use value.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use strum::IntoEnumIterator;

use lingid_model::{ConfidenceValue, Language, ModelStore, MostCommonNgramsTable, UniqueNgramsTable};

use crate::confidence::{normalize, relative_distance};
use crate::error::ConfigError;
use crate::rules_engine::{self, RuleOutcome};
use crate::script_filter;

const FULL_ORDERS: [usize; 5] = [1, 2, 3, 4, 5];
const LOW_ACCURACY_ORDERS: [usize; 1] = [3];

/// Immutable configuration produced by `LanguageDetectorBuilder::build`.
struct DetectorConfig {
    languages: Vec<Language>,
    minimum_relative_distance: f64,
    low_accuracy_mode: bool,
    model_dir: PathBuf,
}

pub struct LanguageDetectorBuilder {
    languages: Vec<Language>,
    minimum_relative_distance: f64,
    low_accuracy_mode: bool,
    preload: bool,
    model_dir: PathBuf,
}

impl LanguageDetectorBuilder {
    fn with_languages(languages: Vec<Language>) -> Result<Self, ConfigError> {
        if languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        Ok(Self {
            languages,
            minimum_relative_distance: 0.0,
            low_accuracy_mode: false,
            preload: false,
            model_dir: PathBuf::from("./LanguageModels"),
        })
    }

    pub fn from_languages(languages: Vec<Language>) -> Result<Self, ConfigError> {
        Self::with_languages(languages)
    }

    pub fn from_all_languages() -> Result<Self, ConfigError> {
        Self::with_languages(Language::iter().collect())
    }

    pub fn from_all_languages_without(excluded: &[Language]) -> Result<Self, ConfigError> {
        let languages: Vec<Language> = Language::iter()
            .filter(|l| !excluded.contains(l))
            .collect();
        Self::with_languages(languages)
    }

    pub fn from_iso_codes_639_1(codes: &[lingid_model::IsoCode639_1]) -> Result<Self, ConfigError> {
        let languages: Vec<Language> = Language::iter()
            .filter(|l| codes.contains(&l.iso_code_639_1()))
            .collect();
        Self::with_languages(languages)
    }

    pub fn from_iso_codes_639_3(codes: &[lingid_model::IsoCode639_3]) -> Result<Self, ConfigError> {
        let languages: Vec<Language> = Language::iter()
            .filter(|l| codes.contains(&l.iso_code_639_3()))
            .collect();
        Self::with_languages(languages)
    }

    pub fn with_minimum_relative_distance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !(0.0..=0.99).contains(&v) {
            return Err(ConfigError::InvalidMinimumRelativeDistance);
        }
        self.minimum_relative_distance = v;
        Ok(self)
    }

    pub fn with_low_accuracy_mode(mut self) -> Self {
        self.low_accuracy_mode = true;
        self
    }

    pub fn with_preloaded_language_models(mut self) -> Self {
        self.preload = true;
        self
    }

    pub fn with_model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    pub fn build(self) -> LanguageDetector {
        let store = Arc::new(ModelStore::new(&self.model_dir));
        if self.preload {
            store.preload(&self.languages);
        }
        let unique_ngrams = Arc::new(UniqueNgramsTable::load(&self.model_dir, &self.languages));
        let common_ngrams = Arc::new(
            MostCommonNgramsTable::load(&self.model_dir, &self.languages)
                .unwrap_or_else(|_| MostCommonNgramsTable::empty()),
        );

        LanguageDetector {
            config: Arc::new(DetectorConfig {
                languages: self.languages,
                minimum_relative_distance: self.minimum_relative_distance,
                low_accuracy_mode: self.low_accuracy_mode,
                model_dir: self.model_dir,
            }),
            store,
            unique_ngrams,
            common_ngrams,
        }
    }
}

/// An immutable, thread-safe detector. Cloning is cheap: every shared table
/// is held behind an `Arc`, mirroring heliport's `Identifier::clone`.
#[derive(Clone)]
pub struct LanguageDetector {
    config: Arc<DetectorConfig>,
    store: Arc<ModelStore>,
    unique_ngrams: Arc<UniqueNgramsTable>,
    common_ngrams: Arc<MostCommonNgramsTable>,
}

impl LanguageDetector {
    pub fn model_dir(&self) -> &Path {
        &self.config.model_dir
    }

    fn orders(&self) -> &'static [usize] {
        if self.config.low_accuracy_mode {
            &LOW_ACCURACY_ORDERS
        } else {
            &FULL_ORDERS
        }
    }

    /// Run stages C -> D -> E -> F over `text`, returning the sorted
    /// confidence list (possibly empty if no candidate survives filtering).
    fn classify(&self, text: &str) -> Vec<ConfidenceValue> {
        let filtered = script_filter::filter(text, &self.config.languages);
        if filtered.surviving.is_empty() {
            return Vec::new();
        }

        match rules_engine::apply(
            text,
            &filtered.surviving,
            &self.unique_ngrams,
            &self.common_ngrams,
        ) {
            RuleOutcome::Decisive(winner) => filtered
                .surviving
                .iter()
                .map(|&lang| ConfidenceValue::new(lang, if lang == winner { 1.0 } else { 0.0 }))
                .collect(),
            RuleOutcome::Priors(priors) => {
                let raw = crate::scorer::score_candidates(
                    text,
                    &filtered.surviving,
                    self.orders(),
                    &priors,
                    &filtered.boosted,
                    &self.store,
                );
                normalize(&raw)
            }
        }
    }

    /// `detect_language_of` (spec §4.G).
    pub fn detect_language_of(&self, text: &str) -> Option<Language> {
        let sorted = self.classify(text);
        let top = sorted.first()?;
        if top.value == 0.0 {
            return None;
        }
        if relative_distance(&sorted) < self.config.minimum_relative_distance {
            return None;
        }
        Some(top.language)
    }

    /// `compute_language_confidence_values` (spec §4.G). Every configured
    /// candidate appears exactly once, even when the script filter dropped
    /// it (at confidence 0.0), so callers always get a complete ranking.
    pub fn compute_language_confidence_values(&self, text: &str) -> Vec<ConfidenceValue> {
        let mut sorted = self.classify(text);
        let scored: std::collections::HashSet<Language> =
            sorted.iter().map(|v| v.language).collect();
        for &lang in &self.config.languages {
            if !scored.contains(&lang) {
                sorted.push(ConfidenceValue::new(lang, 0.0));
            }
        }
        sorted.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap()
                .then_with(|| a.language.cmp(&b.language))
        });
        sorted
    }

    /// `compute_language_confidence` (spec §4.G).
    pub fn compute_language_confidence(&self, text: &str, language: Language) -> f64 {
        self.compute_language_confidence_values(text)
            .into_iter()
            .find(|v| v.language == language)
            .map(|v| v.value)
            .unwrap_or(0.0)
    }

    pub fn languages(&self) -> &[Language] {
        &self.config.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_language_set() {
        assert_eq!(
            LanguageDetectorBuilder::from_languages(vec![]).unwrap_err(),
            ConfigError::NoLanguages
        );
    }

    #[test]
    fn builder_rejects_out_of_range_minimum_relative_distance() {
        let builder = LanguageDetectorBuilder::from_languages(vec![Language::English]).unwrap();
        assert_eq!(
            builder.with_minimum_relative_distance(1.0).unwrap_err(),
            ConfigError::InvalidMinimumRelativeDistance
        );
    }

    #[test]
    fn unsupported_script_yields_no_detection() {
        let dir = tempfile::tempdir().unwrap();
        let detector = LanguageDetectorBuilder::from_languages(vec![Language::English])
            .unwrap()
            .with_model_dir(dir.path())
            .build();
        assert_eq!(detector.detect_language_of("проарплап"), None);
    }

    #[test_log::test]
    fn confidence_values_cover_every_configured_language() {
        let dir = tempfile::tempdir().unwrap();
        let detector =
            LanguageDetectorBuilder::from_languages(vec![Language::English, Language::German])
                .unwrap()
                .with_model_dir(dir.path())
                .build();
        let values = detector.compute_language_confidence_values("hello world");
        assert_eq!(values.len(), 2);
    }
}
