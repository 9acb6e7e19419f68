//! Normalization, tokenization and term expansion.

use proptest::prelude::*;
use quicksearch::{generate_terms, is_refinement, normalize, normalize_compact, tokenize};

/// Latin text with accents, punctuation and irregular spacing.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9àáâäçèéêëíñóöúüÀÉÑÜ .,!?'()\\-\t]{0,40}").unwrap()
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_compact_is_normalize_without_whitespace(text in text_strategy()) {
        let compact = normalize_compact(&text);
        prop_assert!(!compact.chars().any(char::is_whitespace));
        let expected: String = normalize(&text).split_whitespace().collect();
        prop_assert_eq!(compact, expected);
    }

    #[test]
    fn prop_tokens_never_empty(text in text_strategy()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn prop_adding_a_word_refines(
        words in prop::collection::vec(word_strategy(), 1..5),
        extra in word_strategy(),
    ) {
        let mut longer = words.clone();
        longer.push(extra);
        prop_assert!(is_refinement(&longer, &words));
        prop_assert!(!is_refinement(&words, &Vec::<String>::new()));
    }

    #[test]
    fn prop_term_weights_in_range(words in prop::collection::vec(word_strategy(), 0..8)) {
        let terms = generate_terms(&words, 3);
        for term in &terms {
            prop_assert!(term.weight > 0.0 && term.weight <= 1.0);
            if term.is_phrase {
                let len = term.term.split(' ').count();
                prop_assert!((2..=words.len().max(2)).contains(&len));
            } else {
                prop_assert!(term.term.chars().count() >= 3);
            }
        }
        if words.len() >= 2 {
            prop_assert_eq!(&terms[0].term, &words.join(" "));
            prop_assert_eq!(terms[0].weight, 1.0);
        }
    }
}
