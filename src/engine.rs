// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The quick-search engine: cached snapshots plus dispatch.
//!
//! `SearchEngine` owns the two index snapshots and decides, per query, which
//! scorer runs. Snapshots are built lazily, swapped in whole under a write
//! lock, and handed to readers as `Arc`s, so a rebuild is never observed
//! half-done.
//!
//! # Staleness
//!
//! The show index is rebuilt when the library size differs from the size it
//! was built with. Text edits that keep the size need `invalidate_index`.
//! The Bible index is rebuilt when the active translation id or
//! `BIBLE_INDEX_VERSION` changes.

use crate::config::SearchConfig;
use crate::index::{build_bible_index, build_search_index, BibleIndexSnapshot, SearchIndexSnapshot};
use crate::providers::{Levenshtein, ScriptureProvider, ShowAll, StringSimilarity, TextSource, VisibilityPolicy};
use crate::results::{MediaHit, PassageRef, QuickSearchResult, ReferenceHit, ShowHit, VerseHit};
use crate::scoring::fuzzy::score_show;
use crate::scoring::ranking::{finalize_matches, unranked};
use crate::scripture::{format_verse_range, preview, Scripture, ScriptureData};
use crate::search::{rank_shows, rank_verses, search_media, show_description, MediaFile, MediaMatch};
use crate::types::{Show, ShowMatch, VerseRef};
use crate::util::{char_len, normalize, tokenize};
use parking_lot::RwLock;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

pub struct SearchEngine {
    config: SearchConfig,
    texts: Arc<dyn TextSource>,
    visibility: Arc<dyn VisibilityPolicy>,
    similarity: Arc<dyn StringSimilarity>,
    index: RwLock<Option<Arc<SearchIndexSnapshot>>>,
    bible: RwLock<Option<Arc<BibleIndexSnapshot>>>,
    generation: AtomicU64,
}

impl SearchEngine {
    /// An engine over `texts` with default config, nothing archived and
    /// Levenshtein similarity.
    pub fn new(texts: impl TextSource + 'static) -> Self {
        Self {
            config: SearchConfig::default(),
            texts: Arc::new(texts),
            visibility: Arc::new(ShowAll),
            similarity: Arc::new(Levenshtein),
            index: RwLock::new(None),
            bible: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_visibility(mut self, visibility: impl VisibilityPolicy + 'static) -> Self {
        self.visibility = Arc::new(visibility);
        self
    }

    pub fn with_similarity(mut self, similarity: impl StringSimilarity + 'static) -> Self {
        self.similarity = Arc::new(similarity);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    // =========================================================================
    // SHOWS
    // =========================================================================

    /// Rank `shows` for `query`, best first, scores rescaled to 0..=100.
    ///
    /// Libraries larger than `index_threshold` go through the index; smaller
    /// ones are scored show by show.
    pub fn search_shows(&self, query: &str, shows: &[Show]) -> Vec<ShowMatch> {
        if tokenize(&normalize(query)).is_empty() {
            return Vec::new();
        }

        if self.config.use_index(shows.len()) {
            debug!(shows = shows.len(), path = "index", "searching shows");
            let snapshot = self.ensure_index(shows);
            rank_shows(&snapshot, query, shows, self.visibility.as_ref())
        } else {
            debug!(shows = shows.len(), path = "fuzzy", "searching shows");
            self.score_each(query, shows)
        }
    }

    fn score_one(&self, query: &str, show: &Show) -> Option<ShowMatch> {
        if !self.visibility.is_visible(show) {
            return None;
        }
        let content = self.texts.show_text(&show.id);
        let score = score_show(query, show, &content, self.similarity.as_ref());
        (score > 0.0).then(|| unranked(show.clone(), score))
    }

    #[cfg(feature = "parallel")]
    fn score_each(&self, query: &str, shows: &[Show]) -> Vec<ShowMatch> {
        let matches: Vec<ShowMatch> = shows
            .par_iter()
            .filter_map(|show| self.score_one(query, show))
            .collect();
        finalize_matches(matches)
    }

    #[cfg(not(feature = "parallel"))]
    fn score_each(&self, query: &str, shows: &[Show]) -> Vec<ShowMatch> {
        let matches: Vec<ShowMatch> = shows
            .iter()
            .filter_map(|show| self.score_one(query, show))
            .collect();
        finalize_matches(matches)
    }

    /// The current show index, rebuilt first if missing or stale.
    pub fn ensure_index(&self, shows: &[Show]) -> Arc<SearchIndexSnapshot> {
        if let Some(snapshot) = self.index.read().as_ref() {
            if !snapshot.is_stale(shows.len()) {
                trace!(generation = snapshot.generation, "search index is current");
                return Arc::clone(snapshot);
            }
            debug!(
                built_with = snapshot.doc_count,
                shows = shows.len(),
                "search index is stale"
            );
        }
        self.rebuild_index(shows)
    }

    /// Build a new show index and swap it in, regardless of staleness.
    pub fn rebuild_index(&self, shows: &[Show]) -> Arc<SearchIndexSnapshot> {
        let mut snapshot = build_search_index(shows, self.texts.as_ref());
        snapshot.generation = self.next_generation();
        let snapshot = Arc::new(snapshot);
        *self.index.write() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Drop the show index. Call after text edits that keep the library size.
    pub fn invalidate_index(&self) {
        if self.index.write().take().is_some() {
            debug!("search index invalidated");
        }
    }

    pub fn index_snapshot(&self) -> Option<Arc<SearchIndexSnapshot>> {
        self.index.read().clone()
    }

    /// Ranked shows with their context snippets.
    pub fn show_results(&self, query: &str, shows: &[Show]) -> Vec<ShowHit> {
        self.search_shows(query, shows)
            .into_iter()
            .map(|m| {
                let content = self.texts.show_text(&m.show.id);
                let description = show_description(
                    &content,
                    query,
                    self.config.snippet_before,
                    self.config.snippet_after,
                    self.config.min_snippet_query_len,
                );
                ShowHit {
                    show: m.show,
                    score: m.score,
                    description,
                }
            })
            .collect()
    }

    // =========================================================================
    // SCRIPTURE
    // =========================================================================

    /// The Bible index for `bible_id`, built unless the current one matches.
    pub fn ensure_bible_index(&self, bible_id: &str, data: &ScriptureData) -> Arc<BibleIndexSnapshot> {
        if let Some(snapshot) = self.bible.read().as_ref() {
            if snapshot.matches(bible_id) {
                trace!(bible_id, "bible index is current");
                return Arc::clone(snapshot);
            }
        }

        let mut snapshot = build_bible_index(bible_id, data);
        snapshot.generation = self.next_generation();
        info!(
            bible_id,
            verses = snapshot.verse_count,
            generation = snapshot.generation,
            "bible index built"
        );
        let snapshot = Arc::new(snapshot);
        *self.bible.write() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Ranked verses from the current Bible index. Empty when none is built.
    pub fn search_verses(&self, query: &str) -> Vec<VerseRef> {
        match self.bible_snapshot() {
            Some(snapshot) => rank_verses(&snapshot, query, self.config.max_verse_results),
            None => Vec::new(),
        }
    }

    pub fn invalidate_scripture_index(&self) {
        if self.bible.write().take().is_some() {
            debug!("bible index invalidated");
        }
    }

    pub fn bible_snapshot(&self) -> Option<Arc<BibleIndexSnapshot>> {
        self.bible.read().clone()
    }

    /// Reference and verse results from the active translation.
    pub fn search_scripture(&self, query: &str, provider: &dyn ScriptureProvider) -> Vec<QuickSearchResult> {
        let mut results = Vec::new();
        if char_len(query) < self.config.min_scripture_query_len {
            return results;
        }
        let Some(bible_id) = provider.active_scripture_id() else {
            return results;
        };
        let Some(scripture) = provider.load_scripture(&bible_id) else {
            warn!(bible_id = %bible_id, "active scripture could not be loaded");
            return results;
        };

        if let Some(hit) = self.reference_hit(&bible_id, query, scripture.as_ref()) {
            results.push(QuickSearchResult::ScriptureReference(hit));
        }

        if char_len(query) >= self.config.min_text_search_len {
            let mut verses = match provider.local_data(&bible_id) {
                Some(data) => {
                    let snapshot = self.ensure_bible_index(&bible_id, &data);
                    rank_verses(&snapshot, query, self.config.max_verse_results)
                }
                None => Vec::new(),
            };
            if verses.is_empty() {
                verses = scripture.text_search(query);
            }
            results.extend(verses.into_iter().map(|verse| {
                QuickSearchResult::ScriptureVerse(VerseHit {
                    scripture_id: bible_id.clone(),
                    verse,
                })
            }));
        }

        results
    }

    fn reference_hit(&self, bible_id: &str, query: &str, scripture: &dyn Scripture) -> Option<ReferenceHit> {
        let found = scripture.book_search(query)?;
        let Some(book_name) = scripture.book_name(found.book) else {
            warn!(bible_id, book = found.book, "reference points at a missing book");
            return None;
        };

        let mut name = book_name;
        let mut description = String::new();
        if let Some(chapter) = found.chapter {
            name.push_str(&format!(" {}", chapter));
            name.push_str(&format_verse_range(&found.verses));

            let first_verse = found.verses.first().copied().unwrap_or(1);
            if let Some(text) = scripture.verse_text(found.book, chapter, first_verse) {
                description = preview(&text, self.config.preview_len);
            }
        }

        let verses = if found.verses.is_empty() {
            vec![vec![1]]
        } else {
            vec![found.verses.clone()]
        };

        Some(ReferenceHit {
            scripture_id: bible_id.to_string(),
            name,
            description,
            reference: PassageRef {
                book: found.book,
                chapter: found.chapter.unwrap_or(1),
                verses,
            },
            play: found.chapter.is_some(),
        })
    }

    // =========================================================================
    // MEDIA + COMBINED
    // =========================================================================

    pub fn search_media(&self, query: &str, files: &[MediaFile]) -> Vec<MediaMatch> {
        search_media(
            query,
            files,
            self.config.min_media_query_len,
            self.similarity.as_ref(),
        )
    }

    /// Everything the quick-search box shows: shows, then Scripture, then media.
    pub fn quick_search(
        &self,
        query: &str,
        shows: &[Show],
        media: &[MediaFile],
        scripture: Option<&dyn ScriptureProvider>,
    ) -> Vec<QuickSearchResult> {
        let mut results: Vec<QuickSearchResult> = self
            .show_results(query, shows)
            .into_iter()
            .map(QuickSearchResult::Show)
            .collect();

        if let Some(provider) = scripture {
            results.extend(self.search_scripture(query, provider));
        }

        results.extend(
            self.search_media(query, media)
                .into_iter()
                .map(|m| QuickSearchResult::Media(MediaHit::from(m))),
        );
        results
    }
}
