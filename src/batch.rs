//! Parallel batch executor (spec component I).
//!
//! Grounded directly on heliport's `Identifier::par_identify`: a `rayon`
//! parallel iterator with a thread-local clone of the detector per worker,
//! initialized on first use so each thread pays the clone cost once. Since
//! `LanguageDetector` holds only `Arc`s, cloning it is cheap (see
//! component G).

use rayon::prelude::*;

use lingid_model::{ConfidenceValue, DetectionResult, Language};

use crate::detector::LanguageDetector;

thread_local! {
    static LOCAL_DETECTOR: std::cell::RefCell<Option<LanguageDetector>> = std::cell::RefCell::new(None);
}

fn with_local_detector<R>(detector: &LanguageDetector, f: impl FnOnce(&LanguageDetector) -> R) -> R {
    LOCAL_DETECTOR.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(detector.clone());
        }
        f(slot.as_ref().unwrap())
    })
}

impl LanguageDetector {
    /// `detect_languages_in_parallel_of` (spec §4.I). Output order matches
    /// input order; no state is shared across inputs.
    pub fn detect_languages_in_parallel_of(&self, texts: &[String]) -> Vec<Option<Language>> {
        texts
            .par_iter()
            .map(|text| with_local_detector(self, |d| d.detect_language_of(text)))
            .collect()
    }

    /// `compute_language_confidence_values_in_parallel` (spec §4.I).
    pub fn compute_language_confidence_values_in_parallel(
        &self,
        texts: &[String],
    ) -> Vec<Vec<ConfidenceValue>> {
        texts
            .par_iter()
            .map(|text| with_local_detector(self, |d| d.compute_language_confidence_values(text)))
            .collect()
    }

    /// `compute_language_confidence_in_parallel` (spec §4.I).
    pub fn compute_language_confidence_in_parallel(
        &self,
        texts: &[String],
        language: Language,
    ) -> Vec<f64> {
        texts
            .par_iter()
            .map(|text| with_local_detector(self, |d| d.compute_language_confidence(text, language)))
            .collect()
    }

    /// `detect_multiple_languages_in_parallel_of` — parallel form of
    /// component H, following the same index-alignment contract as the
    /// other batch APIs.
    pub fn detect_multiple_languages_in_parallel_of(
        &self,
        texts: &[String],
    ) -> Vec<Vec<DetectionResult>> {
        texts
            .par_iter()
            .map(|text| with_local_detector(self, |d| d.detect_multiple_languages_of(text)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::LanguageDetectorBuilder;

    #[test]
    fn parallel_results_are_index_aligned_with_input() {
        let dir = tempfile::tempdir().unwrap();
        let detector = LanguageDetectorBuilder::from_languages(vec![Language::English])
            .unwrap()
            .with_model_dir(dir.path())
            .build();

        let texts = vec!["проарплап".to_string(), "hello".to_string()];
        let sequential: Vec<Option<Language>> =
            texts.iter().map(|t| detector.detect_language_of(t)).collect();
        let parallel = detector.detect_languages_in_parallel_of(&texts);
        assert_eq!(sequential, parallel);
    }
}
