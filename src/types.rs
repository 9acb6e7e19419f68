// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by indexing, ranking and scoring.
//!
//! Shows and their text belong to the caller. The engine only reads them and
//! keeps normalized derivatives in its snapshots.
//!
//! # Invariants
//!
//! - **IndexEntry**: `frequency >= 1`, and there is at most one entry per
//!   `(show_id, field)` inside a single word bucket.
//! - **WeightedTerm**: `0 < weight <= 1`.
//! - **ShowMatch**: after finalization `0 <= score <= 100`, and the first match
//!   of a non-empty list has `score == 100`.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A presentable song or slide set.
///
/// `id` is the stable key the text cache and the index use. Everything else is
/// metadata the scorers read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quick_access: Option<QuickAccess>,
}

impl Show {
    /// The short quick-access number ("133", "MP133"), or "" when unset.
    pub fn number(&self) -> &str {
        self.quick_access
            .as_ref()
            .and_then(|qa| qa.number.as_deref())
            .unwrap_or("")
    }

    /// The external song identifier (CCLI), or "" when unset.
    pub fn song_id(&self) -> &str {
        self.quick_access
            .as_ref()
            .and_then(|qa| qa.metadata.ccli.as_deref())
            .unwrap_or("")
    }
}

/// Quick-access metadata attached to a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAccess {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub metadata: QuickAccessMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickAccessMetadata {
    #[serde(rename = "CCLI", default)]
    pub ccli: Option<String>,
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Which part of a show a word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Content,
}

/// One distinct word in one field of one show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub show_id: String,
    pub field: Field,
    /// Occurrences of the word inside the field. Always >= 1.
    pub frequency: u32,
}

/// A single Scripture verse as indexed and returned by verse search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
    /// Display reference, e.g. "John 3:16".
    pub reference: String,
    /// Original (un-normalized) verse text.
    pub text: String,
}

impl VerseRef {
    /// Verse identity, independent of which word bucket it was found in.
    #[inline]
    pub fn key(&self) -> (u32, u32, u32) {
        (self.book, self.chapter, self.verse)
    }
}

// =============================================================================
// QUERY / RESULT TYPES
// =============================================================================

/// A query sub-term with its contribution weight.
///
/// Produced per query by `generate_terms`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: f64,
    pub is_phrase: bool,
}

/// A show together with its relevance for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMatch {
    pub show: Show,
    /// Normalized score in `[0, 100]`, relative to the best match of the query.
    pub score: f64,
    /// Score before normalization.
    pub raw_score: f64,
}
