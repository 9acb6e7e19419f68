// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The collaborators the engine reads from.
//!
//! Text, visibility, Scripture data and string similarity all live outside
//! the engine. Each gets a small trait plus an in-memory implementation that
//! tests and the CLI use directly.

use crate::fuzzy;
use crate::scripture::{Scripture, ScriptureData};
use crate::types::Show;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

// =============================================================================
// TEXT CACHE
// =============================================================================

/// Plain-text content of shows, keyed by show id.
pub trait TextSource: Send + Sync {
    /// The show's text, or "" when nothing is cached.
    fn show_text(&self, show_id: &str) -> Cow<'_, str>;
}

impl TextSource for HashMap<String, String> {
    fn show_text(&self, show_id: &str) -> Cow<'_, str> {
        Cow::Borrowed(self.get(show_id).map(String::as_str).unwrap_or(""))
    }
}

// =============================================================================
// VISIBILITY
// =============================================================================

/// Which shows may appear in results.
pub trait VisibilityPolicy: Send + Sync {
    fn is_category_archived(&self, category: &str) -> bool;
    /// The category tab currently open in the show drawer, if any.
    fn active_view_category(&self) -> Option<&str>;

    /// Archived shows are hidden unless their own category is being viewed.
    fn is_visible(&self, show: &Show) -> bool {
        let category = show.category.as_deref();
        let archived = self.is_category_archived(category.unwrap_or(""));
        !archived || self.active_view_category() == category
    }
}

/// Nothing is archived.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowAll;

impl VisibilityPolicy for ShowAll {
    fn is_category_archived(&self, _category: &str) -> bool {
        false
    }

    fn active_view_category(&self) -> Option<&str> {
        None
    }
}

/// A fixed set of archived categories plus the active drawer tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivePolicy {
    #[serde(default)]
    pub archived: HashSet<String>,
    #[serde(default)]
    pub active_view: Option<String>,
}

impl ArchivePolicy {
    pub fn new<I, S>(archived: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            archived: archived.into_iter().map(Into::into).collect(),
            active_view: None,
        }
    }

    pub fn viewing(mut self, category: impl Into<String>) -> Self {
        self.active_view = Some(category.into());
        self
    }
}

impl VisibilityPolicy for ArchivePolicy {
    fn is_category_archived(&self, category: &str) -> bool {
        self.archived.contains(category)
    }

    fn active_view_category(&self) -> Option<&str> {
        self.active_view.as_deref()
    }
}

// =============================================================================
// STRING SIMILARITY
// =============================================================================

/// Normalized similarity in `[0, 1]`.
pub trait StringSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Edit-distance similarity from `fuzzy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl StringSimilarity for Levenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        fuzzy::similarity(a, b)
    }
}

impl<F> StringSimilarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

// =============================================================================
// SCRIPTURE
// =============================================================================

/// Source of Scripture translations.
pub trait ScriptureProvider: Send + Sync {
    /// The translation selected in the Scripture drawer.
    fn active_scripture_id(&self) -> Option<String>;
    fn load_scripture(&self, id: &str) -> Option<Arc<dyn Scripture>>;
    /// Raw data for locally stored translations. `None` for API-backed ones,
    /// which can only be searched through `Scripture::text_search`.
    fn local_data(&self, id: &str) -> Option<Arc<ScriptureData>>;
}

/// Translations held in memory, all of them local.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScriptures {
    active: Option<String>,
    scriptures: HashMap<String, Arc<ScriptureData>>,
}

impl InMemoryScriptures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, data: ScriptureData) -> &mut Self {
        self.scriptures.insert(id.into(), Arc::new(data));
        self
    }

    pub fn set_active(&mut self, id: Option<String>) -> &mut Self {
        self.active = id;
        self
    }
}

impl ScriptureProvider for InMemoryScriptures {
    fn active_scripture_id(&self) -> Option<String> {
        self.active.clone()
    }

    fn load_scripture(&self, id: &str) -> Option<Arc<dyn Scripture>> {
        self.scriptures
            .get(id)
            .map(|data| Arc::clone(data) as Arc<dyn Scripture>)
    }

    fn local_data(&self, id: &str) -> Option<Arc<ScriptureData>> {
        self.scriptures.get(id).cloned()
    }
}
