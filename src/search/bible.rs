// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verse ranking over a Bible index.
//!
//! Candidates come from word lookups: each query token that lists a verse adds
//! one to its count. Verses matched by fewer than `min(tokens, 2)` tokens are
//! dropped. Survivors gain `weight * 20` for every phrase term found in their
//! normalized text, so "dry bones" beats a verse that merely has both words.

use crate::index::{BibleIndexSnapshot, IndexedVerse};
use crate::scoring::{phrase_hit_score, VERSE_MIN_TERM_LEN};
use crate::search::generate_terms;
use crate::types::VerseRef;
use crate::util::{char_len, normalize, tokenize};
use std::collections::HashMap;
use std::sync::Arc;

/// Rank verses for `query`, best first, at most `max_results`.
pub fn rank_verses(snapshot: &BibleIndexSnapshot, query: &str, max_results: usize) -> Vec<VerseRef> {
    let tokens = tokenize(&normalize(query));
    if tokens.is_empty() {
        return Vec::new();
    }

    // (book, chapter, verse) -> (verse, hit count), in first-seen order
    let mut order: Vec<(u32, u32, u32)> = Vec::new();
    let mut hits: HashMap<(u32, u32, u32), (&Arc<IndexedVerse>, usize)> = HashMap::new();
    for token in tokens.iter().filter(|t| char_len(t) >= VERSE_MIN_TERM_LEN) {
        for indexed in snapshot.verses_with(token) {
            let key = indexed.verse.key();
            hits.entry(key)
                .and_modify(|(_, count)| *count += 1)
                .or_insert_with(|| {
                    order.push(key);
                    (indexed, 1)
                });
        }
    }

    let required = tokens.len().min(2);
    let phrases: Vec<_> = generate_terms(&tokens, VERSE_MIN_TERM_LEN)
        .into_iter()
        .filter(|term| term.is_phrase)
        .collect();

    let mut scored: Vec<(&IndexedVerse, f64)> = order
        .iter()
        .filter_map(|key| hits.get(key))
        .filter(|(_, count)| *count >= required)
        .map(|(indexed, count)| {
            let indexed: &IndexedVerse = indexed;
            let bonus: f64 = phrases
                .iter()
                .filter(|term| indexed.normalized.contains(term.term.as_str()))
                .map(|term| phrase_hit_score(term.weight))
                .sum();
            (indexed, *count as f64 + bonus)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_results)
        .map(|(indexed, _)| indexed.verse.clone())
        .collect()
}
