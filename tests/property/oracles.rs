//! Differential tests against strsim.
//!
//! strsim's Levenshtein is the reference; ours only adds case folding, so
//! both are compared on lowercased input.

use proptest::prelude::*;
use quicksearch::fuzzy::{edit_distance, similarity};
use quicksearch::{Levenshtein, StringSimilarity};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zéü ]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_distance_matches_strsim(a in word_strategy(), b in word_strategy()) {
        let expected = strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase());
        prop_assert_eq!(edit_distance(&a, &b), expected);
    }

    #[test]
    fn prop_similarity_matches_strsim(a in word_strategy(), b in word_strategy()) {
        let expected = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
        let actual = similarity(&a, &b);
        prop_assert!((actual - expected).abs() < 1e-9, "{} vs {}", actual, expected);
        prop_assert!((0.0..=1.0).contains(&actual));
    }

    #[test]
    fn prop_similarity_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(Levenshtein.similarity(&a, &b), Levenshtein.similarity(&b, &a));
    }
}

#[test]
fn test_oracle_agrees_on_known_pairs() {
    assert_eq!(edit_distance("kitten", "sitting"), strsim::levenshtein("kitten", "sitting"));
    assert_eq!(edit_distance("Grace", "grace"), 0);
    assert_eq!(similarity("", ""), strsim::normalized_levenshtein("", ""));
}
