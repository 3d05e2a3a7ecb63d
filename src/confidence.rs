//! Confidence normalizer (spec component F).
//!
//! No direct heliport analogue — heliport reports a raw `-log10` cost and an
//! absolute difference against the runner-up (`identifier.rs::pick_winner`)
//! rather than a normalized probability-like weight. CORE's ratio-to-minimum
//! transform is spec-mandated (§4.F); heliport's "subtract from runner-up,
//! compare to a per-language threshold" idea survives as the
//! `minimum_relative_distance` gate applied by the detector (component G).

use std::collections::HashMap;

use lingid_model::{ConfidenceValue, Language};

use crate::scorer::MISSING_EVIDENCE_LOG_PROB;

/// Normalize raw scores into a sorted, summing-to-(at most)-1 confidence
/// list (spec §4.F). Every candidate appears exactly once.
pub fn normalize(raw_scores: &HashMap<Language, f64>) -> Vec<ConfidenceValue> {
    if raw_scores.is_empty() {
        return Vec::new();
    }

    // Only the "no evidence anywhere" floor collapses every candidate to
    // zero (spec §4.F scenario 1). A genuine non-floor tie still carries
    // evidence and must fall through to the weighting step below.
    let all_equal = raw_scores.values().all(|&s| s == MISSING_EVIDENCE_LOG_PROB);
    if all_equal {
        let mut values: Vec<ConfidenceValue> = raw_scores
            .iter()
            .map(|(&lang, _)| ConfidenceValue::new(lang, 0.0))
            .collect();
        values.sort_by(|a, b| a.language.cmp(&b.language));
        return values;
    }

    let s_min = raw_scores
        .values()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let weights: HashMap<Language, f64> = raw_scores
        .iter()
        .map(|(&lang, &score)| (lang, score / s_min))
        .collect();
    let weight_sum: f64 = weights.values().sum();

    let mut values: Vec<ConfidenceValue> = weights
        .into_iter()
        .map(|(lang, w)| ConfidenceValue::new(lang, w / weight_sum))
        .collect();

    values.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap()
            .then_with(|| a.language.cmp(&b.language))
    });
    values
}

/// `c1 - c2` between the top two confidences, used by the detector's
/// `minimum_relative_distance` gate (spec §4.F/§6).
pub fn relative_distance(sorted: &[ConfidenceValue]) -> f64 {
    match sorted {
        [first, second, ..] => first.value - second.value,
        [_] | [] => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_equal_scores_yield_zero_confidence_for_every_language() {
        let mut scores = HashMap::new();
        scores.insert(Language::English, -16.0);
        scores.insert(Language::German, -16.0);
        let values = normalize(&scores);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| v.value == 0.0));
    }

    #[test]
    fn a_genuine_non_floor_tie_splits_confidence_evenly_instead_of_zeroing_out() {
        let mut scores = HashMap::new();
        scores.insert(Language::English, -2.0);
        scores.insert(Language::German, -2.0);
        let values = normalize(&scores);
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|v| (v.value - 0.5).abs() < 1e-9));
    }

    #[test]
    fn best_score_gets_weight_one_before_normalization() {
        let mut scores = HashMap::new();
        scores.insert(Language::English, -2.0);
        scores.insert(Language::German, -4.0);
        let values = normalize(&scores);
        assert_eq!(values[0].language, Language::English);
        assert!(values[0].value > values[1].value);
        let sum: f64 = values.iter().map(|v| v.value).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ties_break_by_language_order() {
        let mut scores = HashMap::new();
        scores.insert(Language::German, -2.0);
        scores.insert(Language::English, -2.0);
        scores.insert(Language::French, -5.0);
        let values = normalize(&scores);
        assert_eq!(values[0].language, Language::English);
        assert_eq!(values[1].language, Language::German);
    }

    #[test]
    fn relative_distance_of_a_single_candidate_is_one() {
        let values = vec![ConfidenceValue::new(Language::English, 1.0)];
        assert_eq!(relative_distance(&values), 1.0);
    }
}
