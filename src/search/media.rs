// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Media file name matching.
//!
//! The caller lists the files; this only filters by name and orders by how
//! close each name is to the query.

use crate::providers::StringSimilarity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "ogg", "oga", "m4a", "aac", "wma", "opus", "aiff",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "mkv", "webm", "avi", "wmv", "m4v", "mpeg", "mpg", "ogv", "3gp",
];

/// A file offered to quick search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub path: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    Video,
    Image,
}

impl MediaType {
    /// Classify by extension. Unknown extensions count as images.
    pub fn from_path(path: &str) -> Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
            MediaType::Audio
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }

    /// Result list icon.
    pub fn icon(self) -> &'static str {
        match self {
            MediaType::Audio => "music",
            MediaType::Video => "movie",
            MediaType::Image => "image",
        }
    }
}

/// A media file whose name contains the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMatch {
    pub file: MediaFile,
    pub media_type: MediaType,
    pub similarity: f64,
}

/// Files whose lowercased name contains the lowercased query, closest first.
///
/// Queries shorter than `min_len` characters return nothing.
pub fn search_media(
    query: &str,
    files: &[MediaFile],
    min_len: usize,
    similarity: &dyn StringSimilarity,
) -> Vec<MediaMatch> {
    if query.chars().count() < min_len.max(1) {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut matches: Vec<MediaMatch> = files
        .iter()
        .filter_map(|file| {
            let name = file.name.to_lowercase();
            name.contains(&needle).then(|| MediaMatch {
                media_type: MediaType::from_path(&file.path),
                similarity: similarity.similarity(&name, &needle),
                file: file.clone(),
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    matches
}
