// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-process quick search for song/slide libraries and Scripture text.
//!
//! A query typed into the quick-search box is matched against three sources:
//! shows (name + cached lyrics), verses of the active Bible translation, and
//! media file names. Shows are the hard part, and they get two scorers:
//!
//! - **Indexed ranking** for large libraries: an inverted word index plus a
//!   2..=5 word phrase index, queried with weighted sub-terms
//! - **Fuzzy fallback** for small ones: every show scored directly from
//!   exact-match, overlap, density and similarity signals
//!
//! Both end in the same sort + rescale step, so the best show reads 100.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    util      │────▶│    index     │────▶│    search    │
//! │ (normalize,  │     │ (word/phrase,│     │ (terms, rank │
//! │  tokenize)   │     │  bible)      │     │  verses)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────┐                          ┌──────────────┐
//! │   scoring    │─────────────────────────▶│    engine    │
//! │ (weights,    │                          │ (snapshots,  │
//! │  fuzzy)      │                          │  dispatch)   │
//! └──────────────┘                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use quicksearch::{SearchEngine, Show};
//! use std::collections::HashMap;
//!
//! let shows = vec![Show {
//!     id: "a".into(),
//!     name: "Amazing Grace".into(),
//!     ..Show::default()
//! }];
//! let mut texts = HashMap::new();
//! texts.insert("a".to_string(), "amazing grace how sweet the sound".to_string());
//!
//! let engine = SearchEngine::new(texts);
//! let results = engine.search_shows("sweet sound", &shows);
//! assert_eq!(results[0].show.id, "a");
//! assert_eq!(results[0].score, 100.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod providers;
pub mod results;
pub mod scoring;
pub mod scripture;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use index::{
    build_bible_index, build_search_index, BibleIndexSnapshot, IndexedVerse, SearchIndexSnapshot,
    BIBLE_INDEX_VERSION,
};
pub use providers::{
    ArchivePolicy, InMemoryScriptures, Levenshtein, ScriptureProvider, ShowAll, StringSimilarity,
    TextSource, VisibilityPolicy,
};
pub use results::{MediaHit, PassageRef, QuickSearchResult, ReferenceHit, ShowHit, VerseHit};
pub use scoring::fuzzy::score_show;
pub use scoring::ranking::finalize_matches;
pub use scripture::{BookReference, Scripture, ScriptureData};
pub use search::{
    generate_terms, rank_shows, rank_verses, search_media, show_description, MediaFile,
    MediaMatch, MediaType,
};
pub use types::{
    Field, IndexEntry, QuickAccess, QuickAccessMetadata, Show, ShowMatch, VerseRef, WeightedTerm,
};
pub use util::{is_refinement, normalize, normalize_compact, tokenize};
