//! N-gram extraction (spec component A).
//!
//! Grounded on heliport's word/n-gram windowing in `identifier.rs::score_langs`
//! and `trainer.rs::count_ngrams`, which shingle a token padded with a
//! leading and trailing space (`" word "`) so an order-n window never
//! crosses a token boundary. CORE diverges from that literal padding: per
//! spec §4.A a token shorter than `order` must produce zero n-grams of that
//! order, which the padded form violates (a 2-character token padded to
//! length 4 still yields two trigrams). Windows here are taken over the raw
//! token instead, via the same `shingles::AsShingles` trait heliport uses.

use shingles::AsShingles;

/// Lazily yields the order-`n` character windows of a single whitespace-
/// delimited token, never crossing its boundaries. Restartable and finite,
/// per spec §4.A. Empty when the token has fewer than `order` characters.
pub struct TokenNgrams {
    token: String,
    order: usize,
}

impl TokenNgrams {
    pub fn new(token: &str, order: usize) -> Self {
        Self {
            token: token.to_string(),
            order,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.token.as_shingles(self.order)
    }
}

/// All order-`n` n-grams across every whitespace-delimited token of `text`.
/// Tokens shorter than `order` contribute nothing.
pub fn ngrams_of<'a>(text: &'a str, order: usize) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace()
        .flat_map(move |word| word.as_shingles(order).map(|s| s.to_string()).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_bigrams_stay_within_the_token() {
        let grams: Vec<&str> = TokenNgrams::new("cat", 2).iter().collect();
        assert_eq!(grams, vec!["ca", "at"]);
    }

    #[test]
    fn short_tokens_yield_nothing_above_their_own_length() {
        let grams: Vec<&str> = TokenNgrams::new("a", 5).iter().collect();
        assert!(grams.is_empty());
    }

    #[test]
    fn tokens_shorter_than_order_yield_nothing_even_though_padding_would_pad_them_long_enough() {
        // "ab" has 2 raw characters; a naive " ab " padding would be 4
        // characters long and wrongly produce two order-3 windows.
        let grams: Vec<&str> = TokenNgrams::new("ab", 3).iter().collect();
        assert!(grams.is_empty());
    }

    #[test]
    fn ngrams_of_do_not_cross_token_boundaries() {
        let grams: Vec<String> = ngrams_of("ab cd", 3).collect();
        assert!(grams.is_empty());

        let grams: Vec<String> = ngrams_of("abc def", 3).collect();
        assert_eq!(grams, vec!["abc".to_string(), "def".to_string()]);
    }
}
