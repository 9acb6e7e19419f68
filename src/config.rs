// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine thresholds and limits.
//!
//! Scoring weights are NOT here; they live in `scoring` as constants because
//! result order depends on them. This struct only holds the knobs that decide
//! which path runs and how much output is produced.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Libraries with more shows than this use the inverted index.
    /// At or below it, every show is scored with the fuzzy fallback.
    pub index_threshold: usize,
    /// Maximum verses returned by indexed Scripture search.
    pub max_verse_results: usize,
    /// Scripture queries shorter than this return nothing.
    pub min_scripture_query_len: usize,
    /// Verse text search runs only for queries at least this long.
    pub min_text_search_len: usize,
    /// Media queries shorter than this return nothing.
    pub min_media_query_len: usize,
    /// Characters of context kept before/after a snippet match.
    pub snippet_before: usize,
    pub snippet_after: usize,
    /// Queries shorter than this get no snippet.
    pub min_snippet_query_len: usize,
    /// Length of the verse preview attached to reference results.
    pub preview_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_threshold: 50,
            max_verse_results: 50,
            min_scripture_query_len: 2,
            min_text_search_len: 3,
            min_media_query_len: 2,
            snippet_before: 30,
            snippet_after: 50,
            min_snippet_query_len: 3,
            preview_len: 100,
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SearchError::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_verse_results == 0 {
            return Err(SearchError::InvalidConfig(
                "maxVerseResults must be at least 1".to_string(),
            ));
        }
        if self.preview_len == 0 {
            return Err(SearchError::InvalidConfig(
                "previewLen must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Should a library of this size go through the inverted index?
    #[inline]
    pub fn use_index(&self, show_count: usize) -> bool {
        show_count > self.index_threshold
    }
}
