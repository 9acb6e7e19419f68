//! Path selection and agreement between the indexed and fuzzy scorers.

use crate::common::{
    assert_well_ranked, engine_with_threshold, hymnal, ids, large_hymnal, make_show_in,
};
use quicksearch::{ArchivePolicy, SearchEngine};

#[test]
fn test_small_library_never_builds_index() {
    let (shows, texts) = hymnal();
    let engine = SearchEngine::new(texts);
    let ranked = engine.search_shows("grace", &shows);
    assert_eq!(ids(&ranked)[0], "grace");
    assert!(engine.index_snapshot().is_none());
}

#[test]
fn test_large_library_builds_index() {
    let (shows, texts) = large_hymnal();
    let engine = SearchEngine::new(texts);
    engine.search_shows("grace", &shows);
    let snapshot = engine.index_snapshot().expect("index should be built");
    assert_eq!(snapshot.doc_count, shows.len());
    assert!(snapshot.word_count() > 0);
    assert!(snapshot.phrase_count() > 0);
}

#[test]
fn test_blank_query_is_empty_on_both_paths() {
    let (shows, texts) = hymnal();
    let fuzzy = SearchEngine::new(texts.clone());
    let indexed = engine_with_threshold(texts, 0);
    for query in ["", "   ", "?!"] {
        assert!(fuzzy.search_shows(query, &shows).is_empty());
        assert!(indexed.search_shows(query, &shows).is_empty());
    }
}

#[test]
fn test_number_pins_on_both_paths() {
    let (shows, texts) = hymnal();
    let fuzzy = SearchEngine::new(texts.clone());
    let indexed = engine_with_threshold(texts, 0);

    for (query, expected) in [("133", "well"), ("12", "grace"), ("mp 200", "great"), ("MP200", "great")] {
        for engine in [&fuzzy, &indexed] {
            let ranked = engine.search_shows(query, &shows);
            assert_eq!(ranked[0].show.id, expected, "query {:?}", query);
            assert_eq!(ranked[0].score, 100.0);
            assert_well_ranked(&ranked);
        }
    }
}

#[test]
fn test_full_titles_agree_across_paths() {
    let (shows, texts) = hymnal();
    let fuzzy = SearchEngine::new(texts.clone());
    let indexed = engine_with_threshold(texts, 0);

    for show in &shows {
        let from_fuzzy = fuzzy.search_shows(&show.name, &shows);
        let from_index = indexed.search_shows(&show.name, &shows);
        assert_eq!(from_fuzzy[0].show.id, show.id);
        assert_eq!(from_index[0].show.id, show.id);
    }
}

#[test]
fn test_title_prefix_pins() {
    let (shows, texts) = hymnal();
    let fuzzy = SearchEngine::new(texts.clone());
    let indexed = engine_with_threshold(texts, 0);
    for engine in [&fuzzy, &indexed] {
        let ranked = engine.search_shows("Rock of", &shows);
        assert_eq!(ranked[0].show.id, "rock");
        assert_eq!(ranked[0].score, 100.0);
    }
}

#[test]
fn test_lyric_phrase_on_both_paths() {
    let (shows, texts) = large_hymnal();
    let indexed = SearchEngine::new(texts.clone());
    let fuzzy = engine_with_threshold(texts, usize::MAX);

    for engine in [&indexed, &fuzzy] {
        let ranked = engine.search_shows("sweet the sound", &shows);
        assert_eq!(ranked[0].show.id, "grace");
        assert_well_ranked(&ranked);
    }
    assert!(indexed.index_snapshot().is_some());
    assert!(fuzzy.index_snapshot().is_none());
}

#[test]
fn test_archived_category_hidden_on_both_paths() {
    let (mut shows, mut texts) = hymnal();
    shows.push(make_show_in("old", "Amazing Love", "retired"));
    texts.insert("old".to_string(), "amazing love how can it be".to_string());

    let fuzzy = SearchEngine::new(texts.clone()).with_visibility(ArchivePolicy::new(["retired"]));
    let indexed = engine_with_threshold(texts.clone(), 0).with_visibility(ArchivePolicy::new(["retired"]));
    for engine in [&fuzzy, &indexed] {
        let ranked = engine.search_shows("amazing", &shows);
        assert!(ids(&ranked).contains(&"grace"));
        assert!(!ids(&ranked).contains(&"old"));
    }

    // Viewing the archived category brings it back
    let viewing = SearchEngine::new(texts)
        .with_visibility(ArchivePolicy::new(["retired"]).viewing("retired"));
    assert!(ids(&viewing.search_shows("amazing", &shows)).contains(&"old"));
}

#[test]
fn test_threshold_boundary() {
    let (shows, texts) = large_hymnal();
    let at_threshold = engine_with_threshold(texts.clone(), shows.len());
    at_threshold.search_shows("grace", &shows);
    assert!(at_threshold.index_snapshot().is_none());

    let below = engine_with_threshold(texts, shows.len() - 1);
    below.search_shows("grace", &shows);
    assert!(below.index_snapshot().is_some());
}
