// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quick-search result records.
//!
//! Every row in the quick-search list has an id, a name, an icon and a
//! description. What happens when it is selected depends on the kind, so each
//! kind carries its own payload.

use crate::search::{MediaMatch, MediaType};
use crate::types::{Show, VerseRef};
use serde::Serialize;

/// A ranked show with its context snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowHit {
    pub show: Show,
    /// Normalized score in `[0, 100]`.
    pub score: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaHit {
    pub path: String,
    pub name: String,
    pub media_type: MediaType,
}

impl From<MediaMatch> for MediaHit {
    fn from(m: MediaMatch) -> Self {
        Self {
            path: m.file.path,
            name: m.file.name,
            media_type: m.media_type,
        }
    }
}

/// Where a Scripture result points. `verses` holds one or more verse runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassageRef {
    pub book: u32,
    pub chapter: u32,
    pub verses: Vec<Vec<u32>>,
}

/// A parsed reference such as "John 3:16-18".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceHit {
    pub scripture_id: String,
    pub name: String,
    /// Start of the first requested verse, markup removed.
    pub description: String,
    pub reference: PassageRef,
    /// Open and show immediately. Only set when a chapter was resolved.
    pub play: bool,
}

/// A verse found by text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseHit {
    pub scripture_id: String,
    pub verse: VerseRef,
}

impl VerseHit {
    pub fn passage(&self) -> PassageRef {
        PassageRef {
            book: self.verse.book,
            chapter: self.verse.chapter,
            verses: vec![vec![self.verse.verse]],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum QuickSearchResult {
    Show(ShowHit),
    Media(MediaHit),
    ScriptureReference(ReferenceHit),
    ScriptureVerse(VerseHit),
}

impl QuickSearchResult {
    pub fn id(&self) -> &str {
        match self {
            Self::Show(hit) => &hit.show.id,
            Self::Media(hit) => &hit.path,
            Self::ScriptureReference(hit) => &hit.scripture_id,
            Self::ScriptureVerse(hit) => &hit.scripture_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Show(hit) => &hit.show.name,
            Self::Media(hit) => &hit.name,
            Self::ScriptureReference(hit) => &hit.name,
            Self::ScriptureVerse(hit) => &hit.verse.reference,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Show(_) => "slide",
            Self::Media(hit) => hit.media_type.icon(),
            Self::ScriptureReference(_) | Self::ScriptureVerse(_) => "scripture",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Show(hit) => &hit.description,
            Self::Media(_) => "",
            Self::ScriptureReference(hit) => &hit.description,
            Self::ScriptureVerse(hit) => &hit.verse.text,
        }
    }

    /// Whether selecting the result should start presenting right away.
    pub fn plays_on_select(&self) -> bool {
        match self {
            Self::ScriptureReference(hit) => hit.play,
            Self::ScriptureVerse(_) => true,
            Self::Show(_) | Self::Media(_) => false,
        }
    }
}
