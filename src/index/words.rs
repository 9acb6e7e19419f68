// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word and phrase index over a show library.
//!
//! # Invariants
//!
//! 1. **ONE_ENTRY_PER_FIELD**: a word bucket holds at most one entry per
//!    `(show_id, field)`, with `frequency >= 1`
//! 2. **LIBRARY_ORDER**: bucket entries follow library order, name before content
//! 3. **PHRASE_IDS_UNIQUE**: a phrase bucket lists each show id once
//! 4. **MIN_WORD_LEN**: words shorter than 2 characters are never in `word_index`
//!
//! The build is deterministic: the same shows and texts in the same order
//! produce identical indexes, with or without the `parallel` feature.

use crate::providers::TextSource;
use crate::scoring::fuzzy::{number_key, numbered_title_key, title_key};
use crate::scoring::{MAX_PHRASE_WORDS, MIN_INDEXED_WORD_LEN, MIN_PHRASE_WORDS};
use crate::types::{Field, IndexEntry, Show};
use crate::util::{char_len, normalize, tokenize};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::time::{Instant, SystemTime};

/// An immutable word + phrase index over one library.
#[derive(Debug, Clone)]
pub struct SearchIndexSnapshot {
    /// Normalized word → entries. Ordered so prefix lookups are a range scan.
    pub word_index: BTreeMap<String, Vec<IndexEntry>>,
    /// Space-joined 2..=5 word n-gram → show ids.
    pub phrase_index: HashMap<String, Vec<String>>,
    /// Compact title → show ids. Ordered for title-prefix lookups.
    pub titles: BTreeMap<String, Vec<String>>,
    /// Compact number and compact number+title → show ids.
    pub exact_keys: HashMap<String, Vec<String>>,
    /// Verbatim song id → show ids.
    pub song_ids: HashMap<String, Vec<String>>,
    /// Library size at build time. Compared against the live library.
    pub doc_count: usize,
    /// Engine-assigned build number, increasing across rebuilds.
    pub generation: u64,
    pub built_at: SystemTime,
}

impl SearchIndexSnapshot {
    /// Does a library of `doc_count` shows need a rebuild?
    ///
    /// Only the size is compared. Same-size text edits need an explicit
    /// invalidation.
    #[inline]
    pub fn is_stale(&self, doc_count: usize) -> bool {
        self.doc_count != doc_count
    }

    pub fn word_entries(&self, word: &str) -> &[IndexEntry] {
        self.word_index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn phrase_matches(&self, phrase: &str) -> &[String] {
        self.phrase_index.get(phrase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indexed words that start with `prefix` but are not equal to it.
    pub fn prefix_entries<'a, 'p>(
        &'a self,
        prefix: &'p str,
    ) -> impl Iterator<Item = (&'a str, &'a [IndexEntry])> + 'p
    where
        'a: 'p,
    {
        self.word_index
            .range::<str, _>((Excluded(prefix), Unbounded))
            .take_while(move |(word, _)| word.starts_with(prefix))
            .map(|(word, entries)| (word.as_str(), entries.as_slice()))
    }

    /// Ids of shows the query matches exactly, in first-seen order.
    ///
    /// Mirrors `scoring::fuzzy::is_exact_match`: quick-access number, verbatim
    /// song id, number+title, and title prefix.
    pub fn exact_matches<'a>(&'a self, raw_query: &str, compact_query: &str) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = Vec::new();
        if compact_query.is_empty() {
            return ids;
        }

        let mut push = |bucket: &'a Vec<String>| {
            for id in bucket {
                if !ids.contains(&id.as_str()) {
                    ids.push(id.as_str());
                }
            }
        };

        if let Some(bucket) = self.exact_keys.get(compact_query) {
            push(bucket);
        }
        if let Some(bucket) = self.song_ids.get(raw_query) {
            push(bucket);
        }
        let titles = self
            .titles
            .range::<str, _>((Included(compact_query), Unbounded))
            .take_while(|(title, _)| title.starts_with(compact_query));
        for (_, bucket) in titles {
            push(bucket);
        }
        ids
    }

    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrase_index.len()
    }
}

/// Everything one show contributes to the index.
///
/// Built independently per show (the parallel map phase) and merged in
/// library order afterwards.
struct ShowTerms<'a> {
    show: &'a Show,
    /// `(word, field, frequency)`, name words first.
    words: Vec<(String, Field, u32)>,
    /// N-grams of both fields, name first.
    phrases: Vec<String>,
}

impl<'a> ShowTerms<'a> {
    fn extract(show: &'a Show, texts: &dyn TextSource) -> Self {
        let name_tokens = tokenize(&normalize(&show.name));
        let content_tokens = tokenize(&normalize(&texts.show_text(&show.id)));

        let mut words = Vec::new();
        push_word_frequencies(&mut words, &name_tokens, Field::Name);
        push_word_frequencies(&mut words, &content_tokens, Field::Content);

        let mut phrases = Vec::new();
        push_ngrams(&mut phrases, &name_tokens);
        push_ngrams(&mut phrases, &content_tokens);

        Self {
            show,
            words,
            phrases,
        }
    }
}

/// Count in-field occurrences of every indexable word.
fn push_word_frequencies(out: &mut Vec<(String, Field, u32)>, tokens: &[String], field: Field) {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for token in tokens {
        if char_len(token) >= MIN_INDEXED_WORD_LEN {
            *counts.entry(token.as_str()).or_default() += 1;
        }
    }
    out.extend(
        counts
            .into_iter()
            .map(|(word, frequency)| (word.to_string(), field, frequency)),
    );
}

/// Every contiguous window of 2..=5 tokens, space-joined.
///
/// Repeats are kept; the merge step collapses them per show.
fn push_ngrams(out: &mut Vec<String>, tokens: &[String]) {
    for start in 0..tokens.len() {
        for size in MIN_PHRASE_WORDS..=MAX_PHRASE_WORDS {
            let Some(window) = tokens.get(start..start + size) else {
                break;
            };
            out.push(window.join(" "));
        }
    }
}

#[cfg(feature = "parallel")]
fn extract_all<'a>(shows: &'a [Show], texts: &dyn TextSource) -> Vec<ShowTerms<'a>> {
    shows
        .par_iter()
        .filter(|show| !show.id.is_empty())
        .map(|show| ShowTerms::extract(show, texts))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn extract_all<'a>(shows: &'a [Show], texts: &dyn TextSource) -> Vec<ShowTerms<'a>> {
    shows
        .iter()
        .filter(|show| !show.id.is_empty())
        .map(|show| ShowTerms::extract(show, texts))
        .collect()
}

fn push_id(map: &mut HashMap<String, Vec<String>>, key: String, id: &str) {
    let bucket = map.entry(key).or_default();
    if !bucket.iter().any(|existing| existing == id) {
        bucket.push(id.to_string());
    }
}

/// Build a fresh snapshot from the library and its text cache.
///
/// Shows with an empty id are skipped. `generation` is left at 0 for the
/// caller to assign.
pub fn build_search_index(shows: &[Show], texts: &dyn TextSource) -> SearchIndexSnapshot {
    let start = Instant::now();

    // MAP PHASE: per-show normalization and tokenization
    let per_show = extract_all(shows, texts);

    // REDUCE PHASE: merge in library order
    let mut word_index: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
    let mut phrase_index: HashMap<String, Vec<String>> = HashMap::new();
    let mut titles: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut exact_keys: HashMap<String, Vec<String>> = HashMap::new();
    let mut song_ids: HashMap<String, Vec<String>> = HashMap::new();

    for terms in per_show {
        let id = terms.show.id.as_str();

        for (word, field, frequency) in terms.words {
            word_index.entry(word).or_default().push(IndexEntry {
                show_id: id.to_string(),
                field,
                frequency,
            });
        }

        for phrase in terms.phrases {
            let bucket = phrase_index.entry(phrase).or_default();
            if bucket.last().map(String::as_str) != Some(id) {
                bucket.push(id.to_string());
            }
        }

        // Exact-match keys only exist for named shows
        if terms.show.name.is_empty() {
            continue;
        }
        let title = title_key(terms.show);
        if !title.is_empty() {
            let bucket = titles.entry(title).or_default();
            if !bucket.iter().any(|existing| existing == id) {
                bucket.push(id.to_string());
            }
        }
        if let Some(number) = number_key(terms.show) {
            push_id(&mut exact_keys, number, id);
        }
        push_id(&mut exact_keys, numbered_title_key(terms.show), id);
        let song_id = terms.show.song_id();
        if !song_id.is_empty() {
            push_id(&mut song_ids, song_id.to_string(), id);
        }
    }

    let snapshot = SearchIndexSnapshot {
        word_index,
        phrase_index,
        titles,
        exact_keys,
        song_ids,
        doc_count: shows.len(),
        generation: 0,
        built_at: SystemTime::now(),
    };

    tracing::debug!(
        shows = shows.len(),
        words = snapshot.word_count(),
        phrases = snapshot.phrase_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "built search index"
    );

    snapshot
}
