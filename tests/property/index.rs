//! Index construction invariants.

use crate::common::make_show;
use proptest::prelude::*;
use quicksearch::{build_search_index, normalize, Show};
use std::collections::{HashMap, HashSet};

fn library_strategy() -> impl Strategy<Value = (Vec<Show>, HashMap<String, String>)> {
    prop::collection::vec(
        (
            "[a-zA-Z]{1,8}( [a-zA-Z]{1,8}){0,2}",
            "[a-z]{1,6}( [a-z]{1,6}){0,12}",
        ),
        0..12,
    )
    .prop_map(|entries| {
        let mut shows = Vec::new();
        let mut texts = HashMap::new();
        for (i, (name, lyrics)) in entries.into_iter().enumerate() {
            let id = format!("s{}", i);
            shows.push(make_show(&id, &name));
            texts.insert(id, lyrics);
        }
        (shows, texts)
    })
}

proptest! {
    #[test]
    fn prop_build_is_deterministic((shows, texts) in library_strategy()) {
        let first = build_search_index(&shows, &texts);
        let second = build_search_index(&shows, &texts);
        prop_assert_eq!(&first.word_index, &second.word_index);
        prop_assert_eq!(&first.phrase_index, &second.phrase_index);
        prop_assert_eq!(&first.titles, &second.titles);
        prop_assert_eq!(first.doc_count, shows.len());
    }

    #[test]
    fn prop_word_entries_well_formed((shows, texts) in library_strategy()) {
        let index = build_search_index(&shows, &texts);
        for (word, entries) in &index.word_index {
            prop_assert!(word.chars().count() >= 2);
            prop_assert_eq!(&normalize(word), word);
            let mut seen = HashSet::new();
            for entry in entries {
                prop_assert!(entry.frequency >= 1);
                prop_assert!(seen.insert((entry.show_id.clone(), entry.field)));
            }
        }
    }

    #[test]
    fn prop_phrase_buckets_unique((shows, texts) in library_strategy()) {
        let index = build_search_index(&shows, &texts);
        for (phrase, ids) in &index.phrase_index {
            let words = phrase.split(' ').count();
            prop_assert!((2..=5).contains(&words));
            let unique: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn prop_every_content_word_is_findable((shows, texts) in library_strategy()) {
        let index = build_search_index(&shows, &texts);
        for show in &shows {
            for word in texts[&show.id].split(' ').filter(|w| w.len() >= 2) {
                let found = index
                    .word_entries(word)
                    .iter()
                    .any(|entry| entry.show_id == show.id);
                prop_assert!(found, "{} missing for {}", word, show.id);
            }
        }
    }
}
