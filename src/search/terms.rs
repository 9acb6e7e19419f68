// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion into weighted sub-terms.
//!
//! "valley of dry bones" becomes:
//! - the full phrase (1.0)
//! - every contiguous window of 2..=5 words, longest first (0.6 + span * 0.2)
//! - each word of at least `min_len` characters (0.5)
//!
//! Short words like "of" never stand alone but still sit inside phrases.

use crate::scoring::{
    FULL_PHRASE_WEIGHT, MAX_PHRASE_WORDS, MIN_PHRASE_WORDS, SUBPHRASE_BASE_WEIGHT,
    SUBPHRASE_SPAN_WEIGHT, WORD_TERM_WEIGHT,
};
use crate::types::WeightedTerm;
use crate::util::char_len;

/// Expand query tokens into phrase and word terms.
///
/// Consumers must not depend on emission order beyond "full phrase first".
pub fn generate_terms<S: AsRef<str>>(tokens: &[S], min_len: usize) -> Vec<WeightedTerm> {
    let words: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    let n = words.len();
    let mut terms = Vec::new();
    if n == 0 {
        return terms;
    }

    if n >= MIN_PHRASE_WORDS {
        terms.push(WeightedTerm {
            term: words.join(" "),
            weight: FULL_PHRASE_WEIGHT,
            is_phrase: true,
        });
    }

    // Sliding windows, strictly shorter than the full query
    let largest = (n - 1).min(MAX_PHRASE_WORDS);
    for size in (MIN_PHRASE_WORDS..=largest).rev() {
        let weight = SUBPHRASE_BASE_WEIGHT + (size as f64 / n as f64) * SUBPHRASE_SPAN_WEIGHT;
        for window in words.windows(size) {
            terms.push(WeightedTerm {
                term: window.join(" "),
                weight,
                is_phrase: true,
            });
        }
    }

    terms.extend(
        words
            .iter()
            .filter(|word| char_len(word) >= min_len)
            .map(|word| WeightedTerm {
                term: (*word).to_string(),
                weight: WORD_TERM_WEIGHT,
                is_phrase: false,
            }),
    );

    terms
}
