//! Weighted log-probability scorer (spec component E).
//!
//! Grounded on heliport's multi-order fallback in
//! `identifier.rs::score_gram`/`score_langs`: a missing n-gram at order n
//! falls back to its shorter prefix at order n-1, recursing down to order 1;
//! an n-gram absent even at order 1 contributes a constant identical across
//! every language, so it cancels out in ranking ties exactly as heliport's
//! `PENALTY_VALUE` sum trick does. CORE reframes heliport's "lower raw score
//! wins" (a `-log10` cost) as "higher log-probability wins" to match spec
//! §4.E directly; the cancellation property is preserved either way.

use std::collections::HashMap;

use lingid_model::{Language, ModelStore, OrderNgram};

use crate::ngram::ngrams_of;

/// Contribution assigned to an n-gram with no evidence at any order, down
/// to and including order 1. Identical across languages, so two languages
/// that both lack all evidence for a text score equal (spec §4.F scenario
/// 1: `"проарплап"` against {EN, DE}).
pub const MISSING_EVIDENCE_LOG_PROB: f64 = -16.0;

/// Score a single n-gram at `order`, falling back to its `order - 1` prefix
/// when missing, down to order 1.
fn score_ngram(ngram: &str, order: usize, language: Language, store: &ModelStore) -> f64 {
    if order == 0 {
        return MISSING_EVIDENCE_LOG_PROB;
    }
    let table = store.load(language, OrderNgram::from_n(order).expect("order in 1..=5"));
    if let Some(p) = table.get(ngram) {
        return p.ln();
    }
    if order == 1 {
        return MISSING_EVIDENCE_LOG_PROB;
    }
    let prefix: String = ngram.chars().take(order - 1).collect();
    score_ngram(&prefix, order - 1, language, store)
}

/// Score `text` against `language`, summing over every order in `orders`
/// (spec §4.E: `1..=5` normally, just `[3]` in low-accuracy mode).
pub fn score_language(text: &str, language: Language, orders: &[usize], store: &ModelStore) -> f64 {
    let mut total = 0.0;
    for &order in orders {
        for gram in ngrams_of(text, order) {
            total += score_ngram(&gram, order, language, store);
        }
    }
    total
}

/// Score every candidate, adding in the rule-engine priors (spec §4.D: "forward
/// the per-language votes as priors into stage E"). Ties break lexicographically
/// smaller `Language` wins, left to the caller's sort.
pub fn score_candidates(
    text: &str,
    candidates: &[Language],
    orders: &[usize],
    priors: &HashMap<Language, f64>,
    boosted: &std::collections::HashSet<Language>,
    store: &ModelStore,
) -> HashMap<Language, f64> {
    /// Small a-priori boost applied when a text contains a character unique
    /// to a candidate's alphabet (spec §4.C).
    const UNIQUE_CHARACTER_BOOST: f64 = 1.0;

    candidates
        .iter()
        .map(|&lang| {
            let mut score = score_language(text, lang, orders, store);
            score += priors.get(&lang).copied().unwrap_or(0.0);
            if boosted.contains(&lang) {
                score += UNIQUE_CHARACTER_BOOST;
            }
            (lang, score)
        })
        .collect()
}
