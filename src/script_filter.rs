//! Alphabet/script prefilter (spec component C).
//!
//! Grounded on heliport's `is_cjk_block` pattern, generalized by
//! `lingid_model::script` from a single CJK boolean into the full `Script`
//! enumeration, plus a small per-language unique-character a-priori boost
//! table (heliport has no such boost; this is new relative to the teacher,
//! grounded directly on spec §4.C's Azerbaijani/Polish examples).

use std::collections::HashSet;

use lingid_model::{script_of, Language, Script};

/// Result of filtering a set of candidate languages against the scripts
/// observed in a text.
pub struct ScriptFilterResult {
    pub surviving: Vec<Language>,
    pub observed_scripts: HashSet<Script>,
    /// Languages that get a small a-priori boost because the text contains
    /// a character unique to their alphabet (spec §4.C).
    pub boosted: HashSet<Language>,
}

/// Count characters per script (ignoring punctuation/whitespace/digits,
/// which `script_of` already maps to `None`), then keep only candidates
/// that share at least one observed script.
pub fn filter(text: &str, candidates: &[Language]) -> ScriptFilterResult {
    let mut observed_scripts = HashSet::new();
    let mut boosted = HashSet::new();

    for c in text.chars() {
        if let Some(script) = script_of(c) {
            observed_scripts.insert(script);
        }
        for &lang in candidates {
            if lang.unique_characters().contains(&c) {
                boosted.insert(lang);
            }
        }
    }

    let surviving = candidates
        .iter()
        .copied()
        .filter(|lang| lang.scripts().iter().any(|s| observed_scripts.contains(s)))
        .collect();

    ScriptFilterResult {
        surviving,
        observed_scripts,
        boosted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_keeps_only_latin_candidates() {
        let candidates = [Language::English, Language::Russian, Language::Greek];
        let result = filter("hello world", &candidates);
        assert_eq!(result.surviving, vec![Language::English]);
    }

    #[test]
    fn cyrillic_text_keeps_cyrillic_candidates() {
        let candidates = [Language::English, Language::Russian];
        let result = filter("проарплап", &candidates);
        assert_eq!(result.surviving, vec![Language::Russian]);
    }

    #[test]
    fn no_surviving_candidates_is_empty_not_an_error() {
        let candidates = [Language::English];
        let result = filter("проарплап", &candidates);
        assert!(result.surviving.is_empty());
    }

    #[test]
    fn unique_character_boosts_its_language() {
        let candidates = [Language::Azerbaijani, Language::Turkish];
        let result = filter("bir dəniz", &candidates);
        assert!(result.boosted.contains(&Language::Azerbaijani));
        assert!(!result.boosted.contains(&Language::Turkish));
    }
}
