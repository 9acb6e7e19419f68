// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index-free scoring of one show against one query.
//!
//! Used when the library is small enough that scanning every show is cheaper
//! than keeping an index. Exact identifier and title matches score 100.
//! Everything else sums five components:
//!
//! | Component          | Range   | Signal                                        |
//! |--------------------|---------|-----------------------------------------------|
//! | word overlap       | 0..70   | query words (3+ chars) found in name/content  |
//! | content density    | 0..70   | literal query occurrences per content length  |
//! | title word-for-word| 0..50   | query words found in the numbered title       |
//! | title similarity   | 0..30   | edit-distance similarity to the numbered title|
//! | content word       | 0..0.1  | query words found in the compact content      |
//!
//! The sum is clamped to 99 so 100 stays reserved for exact matches.

use super::core::{
    clamp_combined, CONTENT_LONG_WORD_WEIGHT, CONTENT_OVERLAP_WEIGHT, CONTENT_WORD_WEIGHT,
    DEFAULT_MIN_TERM_LEN, DENSITY_SCALE, DENSITY_WEIGHT, EXACT_MATCH_SCORE,
    NAME_OVERLAP_WEIGHT, TITLE_SIMILARITY_WEIGHT, TITLE_WORD_WEIGHT,
};
use crate::providers::StringSimilarity;
use crate::types::Show;
use crate::util::{char_len, normalize, normalize_compact, remove_short_words};

// =============================================================================
// EXACT-MATCH KEYS
// =============================================================================

/// Compact title: "Amazing Grace!" → "amazinggrace".
pub fn title_key(show: &Show) -> String {
    normalize_compact(&show.name)
}

/// Compact quick-access number, when the show has one.
pub fn number_key(show: &Show) -> Option<String> {
    let number = normalize_compact(show.number());
    (!number.is_empty()).then_some(number)
}

/// Number followed by title: "12amazinggrace". Equals the title without a number.
pub fn numbered_title_key(show: &Show) -> String {
    format!("{}{}", normalize_compact(show.number()), title_key(show))
}

/// Does the query pin this show at 100?
///
/// `compact_query` must be `normalize_compact(raw_query)`. The song id is
/// compared verbatim against the raw query.
pub fn is_exact_match(raw_query: &str, compact_query: &str, show: &Show) -> bool {
    if compact_query.is_empty() {
        return false;
    }
    if number_key(show).as_deref() == Some(compact_query) {
        return true;
    }
    let song_id = show.song_id();
    if !song_id.is_empty() && song_id == raw_query {
        return true;
    }
    let title = title_key(show);
    title.starts_with(compact_query) || numbered_title_key(show) == compact_query
}

// =============================================================================
// SCORER
// =============================================================================

/// Score `show` against `query` in `[0, 100]`.
///
/// `content` is the show's cached text ("" when none).
pub fn score_show(
    query: &str,
    show: &Show,
    content: &str,
    similarity: &dyn StringSimilarity,
) -> f64 {
    if show.name.is_empty() {
        return 0.0;
    }

    let compact_query = normalize_compact(query);
    if compact_query.is_empty() {
        return 0.0;
    }
    if is_exact_match(query, &compact_query, show) {
        return EXACT_MATCH_SCORE;
    }

    let normalized_query = normalize(query);
    let numbered_title = numbered_title_key(show);

    let overlap = word_overlap_score(&normalized_query, &normalize(&show.name), &normalize(content));
    let density = density_score(&compact_query, content);
    let title_words = match_words(&numbered_title, &normalized_query) * TITLE_WORD_WEIGHT * 100.0;
    let title_similarity = similarity.similarity(&numbered_title, &remove_short_words(&compact_query))
        * TITLE_SIMILARITY_WEIGHT
        * 100.0;
    let content_words = content_word_score(&normalized_query, content);

    clamp_combined(overlap + density + title_words + title_similarity + content_words)
}

/// Fraction of 3+ character query words found in the name (×40) and content (×30).
fn word_overlap_score(normalized_query: &str, name: &str, content: &str) -> f64 {
    let words: Vec<&str> = normalized_query
        .split_whitespace()
        .filter(|w| char_len(w) >= DEFAULT_MIN_TERM_LEN)
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let total = words.len() as f64;
    let name_hits = words.iter().filter(|w| name.contains(**w)).count() as f64;
    let content_hits = words.iter().filter(|w| content.contains(**w)).count() as f64;
    name_hits / total * NAME_OVERLAP_WEIGHT + content_hits / total * CONTENT_OVERLAP_WEIGHT
}

/// `min(occurrences * query_len / content_len * 40, 1) * 70`, all compact.
///
/// Occurrences are counted as non-overlapping literal matches.
fn density_score(compact_query: &str, content: &str) -> f64 {
    let compact_content = normalize_compact(content);
    let content_len = char_len(&compact_content);
    if content_len == 0 {
        return 0.0;
    }

    let occurrences = compact_content.matches(compact_query).count();
    let ratio = (occurrences * char_len(compact_query)) as f64 / content_len as f64;
    (ratio * DENSITY_SCALE).min(1.0) * DENSITY_WEIGHT
}

fn content_word_score(normalized_query: &str, content: &str) -> f64 {
    if content.is_empty() {
        return 0.0;
    }
    let compact_content = normalize_compact(content);
    let all_words = match_words(&compact_content, normalized_query);
    let long_words = match_words(&compact_content, &remove_short_words(normalized_query));
    all_words * CONTENT_WORD_WEIGHT + long_words * CONTENT_LONG_WORD_WEIGHT
}

/// Fraction of space-separated words of `value` contained in `text`.
fn match_words(text: &str, value: &str) -> f64 {
    let words: Vec<&str> = value.split(' ').filter(|w| !w.is_empty()).collect();
    if words.is_empty() {
        return 0.0;
    }
    let hits = words.iter().filter(|w| text.contains(**w)).count();
    hits as f64 / words.len() as f64
}
