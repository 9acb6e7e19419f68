//! The combined quick-search list: shows, then Scripture, then media.

use crate::common::{hymnal, scriptures};
use quicksearch::{MediaFile, MediaType, QuickSearchResult, SearchEngine};

fn media() -> Vec<MediaFile> {
    ["/media/Grace Notes.mp3", "/media/grace-background.mp4", "/media/sunrise.jpg"]
        .iter()
        .map(|path| MediaFile {
            path: path.to_string(),
            name: path
                .rsplit('/')
                .next()
                .and_then(|file| file.rsplit_once('.'))
                .map(|(stem, _)| stem.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn kinds(results: &[QuickSearchResult]) -> Vec<&'static str> {
    results
        .iter()
        .map(|r| match r {
            QuickSearchResult::Show(_) => "show",
            QuickSearchResult::Media(_) => "media",
            QuickSearchResult::ScriptureReference(_) => "reference",
            QuickSearchResult::ScriptureVerse(_) => "verse",
        })
        .collect()
}

#[test]
fn test_sections_in_order() {
    let (shows, texts) = hymnal();
    let engine = SearchEngine::new(texts);
    let provider = scriptures();
    let results = engine.quick_search("grace", &shows, &media(), Some(&provider));

    let kinds = kinds(&results);
    assert_eq!(kinds.first(), Some(&"show"));
    assert_eq!(kinds.iter().filter(|k| **k == "media").count(), 2);
    let first_media = kinds.iter().position(|k| *k == "media").unwrap();
    assert!(kinds[first_media..].iter().all(|k| *k == "media"));
    assert_eq!(results[0].id(), "grace");
    assert_eq!(results[0].icon(), "slide");
}

#[test]
fn test_show_hit_has_snippet() {
    let (shows, texts) = hymnal();
    let engine = SearchEngine::new(texts);
    let results = engine.quick_search("sweet the sound", &shows, &[], None);

    let QuickSearchResult::Show(hit) = &results[0] else {
        panic!("expected a show first");
    };
    assert_eq!(hit.show.id, "grace");
    assert!(hit.description.contains("sweet the sound"));
}

#[test]
fn test_media_icons_and_order() {
    let engine = SearchEngine::new(std::collections::HashMap::<String, String>::new());
    let results = engine.quick_search("grace", &[], &media(), None);

    assert_eq!(results.len(), 2);
    let QuickSearchResult::Media(closest) = &results[0] else {
        panic!("expected media");
    };
    assert_eq!(closest.name, "Grace Notes");
    assert_eq!(closest.media_type, MediaType::Audio);
    assert_eq!(results[0].icon(), "music");
    assert_eq!(results[1].icon(), "movie");
}

#[test]
fn test_scripture_between_shows_and_media() {
    let (shows, texts) = hymnal();
    let engine = SearchEngine::new(texts);
    let provider = scriptures();
    let results = engine.quick_search("John 3:16", &shows, &media(), Some(&provider));

    let kinds = kinds(&results);
    let reference = kinds.iter().position(|k| *k == "reference").expect("reference result");
    assert!(kinds[..reference].iter().all(|k| *k == "show"));
    assert!(results[reference].plays_on_select());
}

#[test]
fn test_results_serialize_for_the_ui() {
    let (shows, texts) = hymnal();
    let engine = SearchEngine::new(texts);
    let results = engine.quick_search("133", &shows, &[], None);

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["kind"], "show");
    assert_eq!(json[0]["data"]["show"]["id"], "well");
    assert_eq!(json[0]["data"]["score"], 100.0);
}
