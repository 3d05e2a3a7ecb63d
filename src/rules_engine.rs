//! Rule engine (spec component D), consulted before probability scoring.
//!
//! Grounded on heliport's two-stage "word found directly, else fall back
//! through n-gram orders" shortcut in `identifier.rs::score_langs`, here
//! generalized from "found in a language's dictionary at all" to "found in
//! exactly one language's *unique* n-gram set" — the unique/most-common
//! ngram lexicons themselves are new relative to heliport (see
//! `lingid_model::rules`).

use std::collections::HashMap;

use lingid_model::{Language, MostCommonNgramsTable, OrderNgram, UniqueNgramsTable};

use crate::ngram::ngrams_of;

pub enum RuleOutcome {
    /// The unique-ngram rule found a strictly dominant language: return it
    /// directly with confidence 1.0, per spec §4.D.
    Decisive(Language),
    /// No dominant winner; these per-language votes become priors for the
    /// probability scorer (component E).
    Priors(HashMap<Language, f64>),
}

/// Apply the unique-ngram and most-common-ngram rules over `text`'s tokens
/// against `candidates`.
pub fn apply(
    text: &str,
    candidates: &[Language],
    unique: &UniqueNgramsTable,
    common: &MostCommonNgramsTable,
) -> RuleOutcome {
    let mut unique_votes: HashMap<Language, usize> = HashMap::new();
    let mut common_bias: HashMap<Language, f64> = HashMap::new();

    for token in text.split_whitespace() {
        for order in 1..=5usize {
            for gram in ngrams_of(token, order) {
                if let Some(owner) = unique.owner_of(&gram) {
                    if candidates.contains(&owner) {
                        *unique_votes.entry(owner).or_insert(0) += 1;
                    }
                }
                if let Some(ngram_order) = OrderNgram::from_n(order) {
                    for &lang in candidates {
                        if common.contains(lang, ngram_order, &gram) {
                            *common_bias.entry(lang).or_insert(0.0) += 1.0;
                        }
                    }
                }
            }
        }
    }

    if let Some(outcome) = decisive_winner(&unique_votes) {
        return RuleOutcome::Decisive(outcome);
    }

    let mut priors = HashMap::new();
    for &lang in candidates {
        let votes = *unique_votes.get(&lang).unwrap_or(&0) as f64;
        let bias = *common_bias.get(&lang).unwrap_or(&0.0);
        priors.insert(lang, votes + bias);
    }
    RuleOutcome::Priors(priors)
}

/// A strictly dominant winner needs at least 2 votes with the runner-up at 0
/// (spec §4.D).
fn decisive_winner(votes: &HashMap<Language, usize>) -> Option<Language> {
    let mut sorted: Vec<(Language, usize)> = votes.iter().map(|(&l, &v)| (l, v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let (best_lang, best_votes) = *sorted.first()?;
    let runner_up_votes = sorted.get(1).map(|&(_, v)| v).unwrap_or(0);
    if best_votes >= 2 && runner_up_votes == 0 {
        Some(best_lang)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_lexicons_yields_zero_priors() {
        let unique = UniqueNgramsTable::empty();
        let common = MostCommonNgramsTable::empty();
        let candidates = [Language::English, Language::German];
        match apply("hello world", &candidates, &unique, &common) {
            RuleOutcome::Priors(priors) => {
                assert_eq!(priors.get(&Language::English), Some(&0.0));
                assert_eq!(priors.get(&Language::German), Some(&0.0));
            }
            RuleOutcome::Decisive(_) => panic!("expected priors, not a decisive winner"),
        }
    }

    #[test]
    fn decisive_winner_requires_two_votes_and_a_zero_runner_up() {
        let mut votes = HashMap::new();
        votes.insert(Language::English, 2);
        votes.insert(Language::German, 0);
        assert_eq!(decisive_winner(&votes), Some(Language::English));

        let mut tied = HashMap::new();
        tied.insert(Language::English, 1);
        tied.insert(Language::German, 1);
        assert_eq!(decisive_winner(&tied), None);
    }
}
