// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Indexed show ranking.
//!
//! # Algorithm
//!
//! 1. Seed the scoreboard with shows the query matches exactly
//! 2. Phrase terms: every show in the phrase bucket gets `weight * 20`
//! 3. Word terms: every entry gets `weight * field_bonus + frequency_bonus`,
//!    plus a prefix bonus per entry of each longer indexed word
//! 4. Drop non-positive and hidden shows, then sort and rescale
//!
//! Exact matches are lifted to the top raw score so they read 100 after
//! rescaling, the same as in the fuzzy fallback.

use crate::index::SearchIndexSnapshot;
use crate::providers::VisibilityPolicy;
use crate::scoring::ranking::{finalize_matches, unranked};
use crate::scoring::{
    phrase_hit_score, prefix_hit_score, word_hit_score, DEFAULT_MIN_TERM_LEN,
    EXACT_MATCH_SCORE, MIN_PREFIX_LEN,
};
use crate::search::generate_terms;
use crate::types::{Show, ShowMatch};
use crate::util::{char_len, normalize, normalize_compact, tokenize};
use std::collections::{HashMap, HashSet};

/// Per-show score accumulator that remembers first-scored order.
#[derive(Debug, Default)]
struct Scoreboard<'a> {
    order: Vec<&'a str>,
    scores: HashMap<&'a str, f64>,
}

impl<'a> Scoreboard<'a> {
    fn add(&mut self, show_id: &'a str, delta: f64) {
        match self.scores.get_mut(show_id) {
            Some(score) => *score += delta,
            None => {
                self.order.push(show_id);
                self.scores.insert(show_id, delta);
            }
        }
    }

    fn into_ordered(self) -> impl Iterator<Item = (&'a str, f64)> {
        let scores = self.scores;
        self.order
            .into_iter()
            .map(move |id| (id, scores.get(id).copied().unwrap_or(0.0)))
    }
}

/// Rank `shows` against `query` using a prebuilt snapshot.
///
/// The snapshot must have been built from `shows`; staleness is the caller's
/// concern. Ids in the index that are no longer in `shows` are skipped.
pub fn rank_shows(
    snapshot: &SearchIndexSnapshot,
    query: &str,
    shows: &[Show],
    visibility: &dyn VisibilityPolicy,
) -> Vec<ShowMatch> {
    let tokens = tokenize(&normalize(query));
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut board = Scoreboard::default();

    let compact_query = normalize_compact(query);
    let pinned: HashSet<&str> = snapshot
        .exact_matches(query, &compact_query)
        .into_iter()
        .inspect(|id| board.add(*id, 0.0))
        .collect();

    for term in generate_terms(&tokens, DEFAULT_MIN_TERM_LEN) {
        if term.is_phrase {
            for id in snapshot.phrase_matches(&term.term) {
                board.add(id, phrase_hit_score(term.weight));
            }
            continue;
        }

        for entry in snapshot.word_entries(&term.term) {
            board.add(
                &entry.show_id,
                word_hit_score(term.weight, entry.field, entry.frequency),
            );
        }

        if char_len(&term.term) >= MIN_PREFIX_LEN {
            for (_, entries) in snapshot.prefix_entries(&term.term) {
                for entry in entries {
                    board.add(&entry.show_id, prefix_hit_score(term.weight, entry.field));
                }
            }
        }
    }

    // Later duplicates of an id win, like a map built from the list
    let by_id: HashMap<&str, &Show> = shows.iter().map(|s| (s.id.as_str(), s)).collect();

    let candidates: Vec<(&Show, f64, bool)> = board
        .into_ordered()
        .filter_map(|(id, score)| {
            let show = by_id.get(id)?;
            let exact = pinned.contains(id);
            (exact || score > 0.0).then_some((*show, score, exact))
        })
        .filter(|(show, _, _)| visibility.is_visible(show))
        .collect();

    let top = candidates
        .iter()
        .map(|(_, score, _)| *score)
        .filter(|score| *score > 0.0)
        .reduce(f64::max);

    let matches = candidates
        .into_iter()
        .map(|(show, score, exact)| {
            let raw = match (exact, top) {
                (true, Some(top)) => score.max(top),
                (true, None) => EXACT_MATCH_SCORE,
                (false, _) => score,
            };
            unranked(show.clone(), raw)
        })
        .collect();

    finalize_matches(matches)
}
