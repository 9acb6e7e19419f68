//! Indexed ranking: field bonuses, phrases, prefixes and ordering.

use crate::common::{assert_well_ranked, ids, make_show};
use quicksearch::{build_search_index, rank_shows, finalize_matches, ShowAll, Show};
use std::collections::HashMap;

fn library(entries: &[(&str, &str, &str)]) -> (Vec<Show>, HashMap<String, String>) {
    let shows = entries.iter().map(|(id, name, _)| make_show(id, name)).collect();
    let texts = entries
        .iter()
        .map(|(id, _, text)| (id.to_string(), text.to_string()))
        .collect();
    (shows, texts)
}

#[test]
fn test_name_hit_outranks_content_hit() {
    let (shows, texts) = library(&[
        ("lyric", "Morning Song", "the life flows on"),
        ("title", "River of Life", "water everywhere"),
    ]);
    let index = build_search_index(&shows, &texts);
    let ranked = rank_shows(&index, "life", &shows, &ShowAll);

    assert_eq!(ids(&ranked), vec!["title", "lyric"]);
    assert_eq!(ranked[0].raw_score, 2.0);
    assert_eq!(ranked[1].raw_score, 1.0);
    assert_eq!(ranked[1].score, 50.0);
}

#[test]
fn test_phrase_beats_scattered_words() {
    let (shows, texts) = library(&[
        ("scattered", "First", "bones are dry"),
        ("phrase", "Second", "dry bones rise"),
    ]);
    let index = build_search_index(&shows, &texts);
    let ranked = rank_shows(&index, "dry bones", &shows, &ShowAll);

    assert_eq!(ids(&ranked), vec!["phrase", "scattered"]);
    assert!(ranked[0].raw_score > 20.0);
    assert_well_ranked(&ranked);
}

#[test]
fn test_prefix_only_match() {
    let (shows, texts) = library(&[("a", "Psalm", "the lord is my shepherd")]);
    let index = build_search_index(&shows, &texts);
    let ranked = rank_shows(&index, "shep", &shows, &ShowAll);
    assert_eq!(ids(&ranked), vec!["a"]);
    assert_eq!(ranked[0].score, 100.0);

    // Two-letter prefixes are not expanded
    assert!(rank_shows(&index, "sh", &shows, &ShowAll).is_empty());
}

#[test]
fn test_ties_keep_library_order() {
    let (shows, texts) = library(&[
        ("b", "Second", "grace abounds"),
        ("a", "First", "grace abounds"),
    ]);
    let index = build_search_index(&shows, &texts);
    let ranked = rank_shows(&index, "grace", &shows, &ShowAll);
    assert_eq!(ids(&ranked), vec!["b", "a"]);
    assert!(ranked.iter().all(|m| m.score == 100.0));
}

#[test]
fn test_removed_show_is_skipped() {
    let (mut shows, texts) = library(&[
        ("keep", "Kept", "mercy endures"),
        ("gone", "Gone", "mercy endures"),
    ]);
    let index = build_search_index(&shows, &texts);
    shows.retain(|s| s.id != "gone");

    let ranked = rank_shows(&index, "mercy", &shows, &ShowAll);
    assert_eq!(ids(&ranked), vec!["keep"]);
}

#[test]
fn test_unknown_words_are_empty() {
    let (shows, texts) = library(&[("a", "Grace", "amazing grace")]);
    let index = build_search_index(&shows, &texts);
    assert!(rank_shows(&index, "zebra", &shows, &ShowAll).is_empty());
}

#[test]
fn test_finalize_rescales_against_best() {
    let (shows, texts) = library(&[
        ("one", "One", "holy holy holy"),
        ("two", "Two", "holy ground"),
    ]);
    let index = build_search_index(&shows, &texts);
    let ranked = rank_shows(&index, "holy", &shows, &ShowAll);

    // Re-finalizing an already ranked list changes nothing
    let again = finalize_matches(ranked.clone());
    assert_eq!(ranked, again);
    assert_eq!(ids(&ranked), vec!["one", "two"]);
}
