//! Scripture references, indexed verse search and the unindexed fallback.

use crate::common::{sample_scripture, scriptures};
use quicksearch::{
    QuickSearchResult, Scripture, ScriptureData, ScriptureProvider, SearchEngine,
};
use std::collections::HashMap;
use std::sync::Arc;

fn engine() -> SearchEngine {
    SearchEngine::new(HashMap::<String, String>::new())
}

/// A translation that can only be searched through its own text search.
struct RemoteOnly(Arc<ScriptureData>);

impl ScriptureProvider for RemoteOnly {
    fn active_scripture_id(&self) -> Option<String> {
        Some("remote".to_string())
    }

    fn load_scripture(&self, _id: &str) -> Option<Arc<dyn Scripture>> {
        Some(Arc::clone(&self.0) as Arc<dyn Scripture>)
    }

    fn local_data(&self, _id: &str) -> Option<Arc<ScriptureData>> {
        None
    }
}

#[test]
fn test_reference_with_verse() {
    let results = engine().search_scripture("John 3:16", &scriptures());
    assert_eq!(results.len(), 1);

    let QuickSearchResult::ScriptureReference(hit) = &results[0] else {
        panic!("expected a reference, got {:?}", results[0]);
    };
    assert_eq!(hit.name, "John 3:16");
    assert_eq!(hit.scripture_id, "kjv");
    assert_eq!(hit.reference.book, 43);
    assert_eq!(hit.reference.chapter, 3);
    assert_eq!(hit.reference.verses, vec![vec![16]]);
    assert!(hit.play);
    assert!(hit.description.starts_with("For God so loved the world"));
    assert!(hit.description.ends_with("..."));
}

#[test]
fn test_reference_with_verse_range() {
    let results = engine().search_scripture("1 John 4:7-8", &scriptures());
    let QuickSearchResult::ScriptureReference(hit) = &results[0] else {
        panic!("expected a reference");
    };
    assert_eq!(hit.name, "1 John 4:7-8");
    assert_eq!(hit.reference.verses, vec![vec![7, 8]]);
    assert!(hit.description.starts_with("Beloved"));
}

#[test]
fn test_extreme_verse_numbers_in_reference() {
    let results = engine().search_scripture("john 3:4294967295,5", &scriptures());
    let QuickSearchResult::ScriptureReference(hit) = &results[0] else {
        panic!("expected a reference");
    };
    assert_eq!(hit.name, "John 3:4294967295,5");
    assert_eq!(hit.reference.verses, vec![vec![u32::MAX, 5]]);
    assert!(hit.description.is_empty());

    let results = engine().search_scripture("john 3:1-4000000000", &scriptures());
    let QuickSearchResult::ScriptureReference(hit) = &results[0] else {
        panic!("expected a reference");
    };
    assert_eq!(hit.name, "John 3:1-17");
    assert_eq!(hit.reference.verses, vec![(1..=17).collect::<Vec<u32>>()]);
}

#[test]
fn test_book_only_reference_does_not_play() {
    let results = engine().search_scripture("ps", &scriptures());
    assert_eq!(results.len(), 1);
    let QuickSearchResult::ScriptureReference(hit) = &results[0] else {
        panic!("expected a reference");
    };
    assert_eq!(hit.name, "Psalms");
    assert!(!hit.play);
    assert!(hit.description.is_empty());
    assert_eq!(hit.reference.chapter, 1);
    assert_eq!(hit.reference.verses, vec![vec![1]]);
}

#[test]
fn test_short_query_and_no_active_translation() {
    let provider = scriptures();
    assert!(engine().search_scripture("p", &provider).is_empty());

    let mut inactive = scriptures();
    inactive.set_active(None);
    assert!(engine().search_scripture("John 3:16", &inactive).is_empty());
}

#[test]
fn test_text_search_uses_local_index() {
    let engine = engine();
    let results = engine.search_scripture("dry bones", &scriptures());

    let references: Vec<&str> = results.iter().map(QuickSearchResult::name).collect();
    assert_eq!(references, vec!["Ezekiel 37:4"]);
    assert!(results[0].plays_on_select());

    let snapshot = engine.bible_snapshot().expect("index should be built");
    assert_eq!(snapshot.bible_id, "kjv");
    assert_eq!(snapshot.verse_count, 11);
}

#[test]
fn test_bible_index_reused_until_translation_changes() {
    let engine = engine();
    let mut provider = scriptures();
    provider.insert("web", sample_scripture());

    engine.search_scripture("god is love", &provider);
    let first = engine.bible_snapshot().unwrap();
    engine.search_scripture("dry bones", &provider);
    assert_eq!(engine.bible_snapshot().unwrap().generation, first.generation);

    provider.set_active(Some("web".to_string()));
    engine.search_scripture("dry bones", &provider);
    let switched = engine.bible_snapshot().unwrap();
    assert_eq!(switched.bible_id, "web");
    assert!(switched.generation > first.generation);

    engine.invalidate_scripture_index();
    assert!(engine.bible_snapshot().is_none());
    assert!(engine.search_verses("dry bones").is_empty());
}

#[test]
fn test_remote_translation_falls_back_to_text_search() {
    let engine = engine();
    let provider = RemoteOnly(Arc::new(sample_scripture()));
    let results = engine.search_scripture("god is love", &provider);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name(), "1 John 4:8");
    assert_eq!(results[0].id(), "remote");
    assert!(engine.bible_snapshot().is_none());
}

#[test]
fn test_search_verses_directly() {
    let engine = engine();
    engine.ensure_bible_index("kjv", &sample_scripture());
    let verses = engine.search_verses("god is love");
    assert_eq!(verses[0].reference, "1 John 4:8");
    assert!(verses.len() <= engine.config().max_verse_results);
}
