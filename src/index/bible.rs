// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word index over the verses of one Scripture translation.
//!
//! Verses are indexed by their set of unique normalized tokens, so a verse
//! appears at most once per word bucket. Frequencies are not tracked. The
//! snapshot is tied to `(bible_id, BIBLE_INDEX_VERSION)` and rebuilt from
//! scratch when either changes.

use crate::scoring::VERSE_MIN_TERM_LEN;
use crate::scripture::{verse_ref, ScriptureData};
use crate::types::VerseRef;
use crate::util::{char_len, normalize, tokenize};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Bump to force every cached Bible index to rebuild.
pub const BIBLE_INDEX_VERSION: u32 = 2;

/// A verse plus its normalized text, shared between word buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedVerse {
    pub verse: VerseRef,
    /// `normalize(verse.text)`, kept for phrase confirmation.
    pub normalized: String,
}

#[derive(Debug, Clone)]
pub struct BibleIndexSnapshot {
    pub bible_id: String,
    pub version: u32,
    /// Normalized word → verses containing it, in book/chapter/verse order.
    pub word_index: HashMap<String, Vec<Arc<IndexedVerse>>>,
    pub verse_count: usize,
    /// Engine-assigned build number, increasing across rebuilds.
    pub generation: u64,
    pub built_at: SystemTime,
}

impl BibleIndexSnapshot {
    /// Is this snapshot current for `bible_id`?
    #[inline]
    pub fn matches(&self, bible_id: &str) -> bool {
        self.bible_id == bible_id && self.version == BIBLE_INDEX_VERSION
    }

    pub fn verses_with(&self, word: &str) -> &[Arc<IndexedVerse>] {
        self.word_index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Unique indexable tokens of one verse, in first-seen order.
fn verse_tokens(normalized: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(normalized)
        .into_iter()
        .filter(|token| char_len(token) >= VERSE_MIN_TERM_LEN)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

type BookEntries = Vec<(Arc<IndexedVerse>, Vec<String>)>;

fn index_book(book: &crate::scripture::Book) -> BookEntries {
    book.chapters
        .iter()
        .flat_map(|chapter| chapter.verses.iter().map(move |verse| (chapter, verse)))
        .map(|(chapter, verse)| {
            let normalized = normalize(&verse.text);
            let tokens = verse_tokens(&normalized);
            let indexed = IndexedVerse {
                verse: verse_ref(book, chapter, verse),
                normalized,
            };
            (Arc::new(indexed), tokens)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn index_books(data: &ScriptureData) -> Vec<BookEntries> {
    data.books.par_iter().map(index_book).collect()
}

#[cfg(not(feature = "parallel"))]
fn index_books(data: &ScriptureData) -> Vec<BookEntries> {
    data.books.iter().map(index_book).collect()
}

/// Build a verse index for `bible_id`.
///
/// Always builds; callers holding a snapshot check `matches` first.
pub fn build_bible_index(bible_id: &str, data: &ScriptureData) -> BibleIndexSnapshot {
    let start = Instant::now();

    let mut word_index: HashMap<String, Vec<Arc<IndexedVerse>>> = HashMap::new();
    let mut verse_count = 0;
    for entries in index_books(data) {
        for (verse, tokens) in entries {
            verse_count += 1;
            for token in tokens {
                word_index.entry(token).or_default().push(Arc::clone(&verse));
            }
        }
    }

    tracing::debug!(
        bible_id,
        verses = verse_count,
        words = word_index.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "built bible index"
    );

    BibleIndexSnapshot {
        bible_id: bible_id.to_string(),
        version: BIBLE_INDEX_VERSION,
        word_index,
        verse_count,
        generation: 0,
        built_at: SystemTime::now(),
    }
}
