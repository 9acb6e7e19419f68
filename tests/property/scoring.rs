//! Score bounds and ranking invariants.

use crate::common::{assert_well_ranked, engine_with_threshold, make_library, make_show_with_number};
use proptest::prelude::*;
use quicksearch::scoring::ranking::unranked;
use quicksearch::{finalize_matches, score_show, Levenshtein};

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,24}").unwrap()
}

fn lyric_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "river", "valley", "light", "glory", "the", "of", "morning", "rest", "crown", "sing",
        ]),
        0..30,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_fuzzy_score_in_range(
        query in query_strategy(),
        name in "[a-zA-Z ]{0,20}",
        content in lyric_strategy(),
    ) {
        let show = make_show_with_number("a", &name, "42");
        let score = score_show(&query, &show, &content, &Levenshtein);
        prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
    }

    #[test]
    fn prop_number_is_exact(
        number in "[0-9]{1,4}",
        name in "[a-zA-Z]{1,10}( [a-zA-Z]{1,10}){0,3}",
        content in lyric_strategy(),
    ) {
        let show = make_show_with_number("a", &name, &number);
        prop_assert_eq!(score_show(&number, &show, &content, &Levenshtein), 100.0);
    }

    #[test]
    fn prop_finalize_sorts_and_rescales(raw in prop::collection::vec(0.1f64..1000.0, 1..20)) {
        let matches = raw
            .iter()
            .enumerate()
            .map(|(i, score)| unranked(make_show_with_number(&i.to_string(), "x", ""), *score))
            .collect();
        let ranked = finalize_matches(matches);
        prop_assert_eq!(ranked.len(), raw.len());
        assert_well_ranked(&ranked);
    }

    #[test]
    fn prop_both_paths_well_ranked(n in 1usize..70, query in query_strategy()) {
        let (shows, texts) = make_library(n);
        let indexed = engine_with_threshold(texts.clone(), 0);
        let fuzzy = engine_with_threshold(texts, usize::MAX);

        assert_well_ranked(&indexed.search_shows(&query, &shows));
        assert_well_ranked(&fuzzy.search_shows(&query, &shows));
    }

    #[test]
    fn prop_number_query_agrees_across_paths(n in 1usize..70, pick in any::<prop::sample::Index>()) {
        let (shows, texts) = make_library(n);
        let target = pick.index(n);
        let query = (target + 1).to_string();

        let indexed = engine_with_threshold(texts.clone(), 0);
        let fuzzy = engine_with_threshold(texts, usize::MAX);
        for engine in [&indexed, &fuzzy] {
            let ranked = engine.search_shows(&query, &shows);
            prop_assert_eq!(&ranked[0].show.id, &shows[target].id);
            prop_assert_eq!(ranked[0].score, 100.0);
        }
    }
}
