// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripture data as the engine sees it.
//!
//! Books → chapters → verses, already resident in memory. Loading and parsing
//! Bible files belongs to the caller; `from_json_str` exists for fixtures and
//! the CLI.
//!
//! `Scripture` is the per-translation interface the quick-search box needs:
//! reference parsing ("John 3:16"), book names, verse text, and a plain text
//! search used when no index is available (API-backed translations).

use crate::error::{Result, SearchError};
use crate::types::VerseRef;
use crate::util::{normalize, normalize_compact};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A structural reference produced by `book_search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReference {
    pub book: u32,
    pub chapter: Option<u32>,
    /// Requested verses in query order. Empty when only book/chapter was given.
    pub verses: Vec<u32>,
}

/// One loaded translation.
pub trait Scripture: Send + Sync {
    /// Parse a reference-style query ("ps 23", "1 john 4:7-8").
    fn book_search(&self, query: &str) -> Option<BookReference>;
    fn book_name(&self, book: u32) -> Option<String>;
    /// Verse text, possibly containing inline markup.
    fn verse_text(&self, book: u32, chapter: u32, verse: u32) -> Option<String>;
    /// Unindexed text search.
    fn text_search(&self, query: &str) -> Vec<VerseRef>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptureData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    #[serde(default)]
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    #[serde(default)]
    pub text: String,
}

impl ScriptureData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: ScriptureData = serde_json::from_str(json)?;
        if data.books.is_empty() {
            return Err(SearchError::InvalidScripture(
                "scripture has no books".to_string(),
            ));
        }
        Ok(data)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SearchError::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn book(&self, number: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.number == number)
    }

    /// Every verse in book/chapter/verse order.
    pub fn verses(&self) -> impl Iterator<Item = (&Book, &Chapter, &Verse)> {
        self.books.iter().flat_map(|book| {
            book.chapters.iter().flat_map(move |chapter| {
                chapter.verses.iter().map(move |verse| (book, chapter, verse))
            })
        })
    }

    /// Resolve the book part of a reference by normalized name prefix.
    fn find_book(&self, book_part: &str) -> Option<&Book> {
        let wanted = normalize_compact(book_part);
        if !wanted.chars().any(char::is_alphabetic) {
            return None;
        }
        self.books
            .iter()
            .find(|book| normalize_compact(&book.name).starts_with(&wanted))
    }
}

impl Book {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }
}

impl Chapter {
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number == number)
    }
}

/// Split "1 John 4:7-8" into ("1 John", Some("4:7-8")).
///
/// The trailing token is a chapter/verse part only when it starts with a digit
/// and something alphabetic precedes it, so "1 John" stays a book name.
fn split_reference(query: &str) -> (&str, Option<&str>) {
    let query = query.trim();
    if let Some(pos) = query.rfind(char::is_whitespace) {
        let (head, tail) = query.split_at(pos);
        let tail = tail.trim();
        let starts_numeric = tail.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_numeric && head.chars().any(char::is_alphabetic) {
            return (head.trim(), Some(tail));
        }
    }
    (query, None)
}

/// Parse "3", "3:16", "3:16-18" or "3:16,18" into chapter + inclusive verse
/// spans. Spans are expanded later, once the chapter's length is known.
fn parse_chapter_verses(part: &str) -> Option<(u32, Vec<(u32, u32)>)> {
    let (chapter, verses) = match part.split_once([':', '.']) {
        Some((c, v)) => (c, Some(v)),
        None => (part, None),
    };
    let chapter: u32 = chapter.trim().parse().ok()?;

    let mut spans = Vec::new();
    for piece in verses.unwrap_or("").split(',').filter(|p| !p.trim().is_empty()) {
        match piece.split_once('-') {
            Some((start, end)) => {
                let start: u32 = start.trim().parse().ok()?;
                let end: u32 = end.trim().parse().unwrap_or(start);
                spans.push((start, end.max(start)));
            }
            None => {
                let verse: u32 = piece.trim().parse().ok()?;
                spans.push((verse, verse));
            }
        }
    }
    Some((chapter, spans))
}

/// Expand verse spans, cutting ranges off at the chapter's last verse.
fn expand_spans(spans: &[(u32, u32)], chapter: &Chapter) -> Vec<u32> {
    let last = chapter.verses.iter().map(|v| v.number).max().unwrap_or(0);
    let mut numbers = Vec::new();
    for &(start, end) in spans {
        if start == end {
            numbers.push(start);
        } else {
            numbers.extend(start..=end.min(last).max(start));
        }
    }
    numbers
}

/// Remove `<...>` markup from verse text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// First `len` characters of the markup-free text, with "..." when cut.
pub fn preview(text: &str, len: usize) -> String {
    let plain = strip_markup(text);
    let mut out: String = plain.chars().take(len).collect();
    if out.chars().count() == len {
        out.push_str("...");
    }
    out
}

/// ":16-18" for a contiguous run, ":16,18,20" otherwise, "" for none.
pub fn format_verse_range(verses: &[u32]) -> String {
    match verses {
        [] => String::new(),
        [first, .., last] if verses.windows(2).all(|w| w[0].checked_add(1) == Some(w[1])) => {
            format!(":{}-{}", first, last)
        }
        _ => {
            let joined: Vec<String> = verses.iter().map(u32::to_string).collect();
            format!(":{}", joined.join(","))
        }
    }
}

impl Scripture for ScriptureData {
    fn book_search(&self, query: &str) -> Option<BookReference> {
        let (book_part, chapter_part) = split_reference(query);
        let book = self.find_book(book_part)?;

        let parsed = chapter_part.and_then(parse_chapter_verses);
        let (chapter, verses) = match parsed {
            Some((number, spans)) => match book.chapter(number) {
                Some(chapter) => (Some(number), expand_spans(&spans, chapter)),
                None => (None, Vec::new()),
            },
            None => (None, Vec::new()),
        };

        Some(BookReference {
            book: book.number,
            chapter,
            verses,
        })
    }

    fn book_name(&self, book: u32) -> Option<String> {
        self.book(book).map(|b| b.name.clone())
    }

    fn verse_text(&self, book: u32, chapter: u32, verse: u32) -> Option<String> {
        self.book(book)?
            .chapter(chapter)?
            .verse(verse)
            .map(|v| v.text.clone())
    }

    fn text_search(&self, query: &str) -> Vec<VerseRef> {
        let needle = normalize(query).trim().to_string();
        if needle.is_empty() {
            return Vec::new();
        }
        self.verses()
            .filter(|(_, _, verse)| normalize(&verse.text).contains(&needle))
            .map(|(book, chapter, verse)| verse_ref(book, chapter, verse))
            .collect()
    }
}

/// Build the display reference for one verse ("John 3:16").
pub fn verse_ref(book: &Book, chapter: &Chapter, verse: &Verse) -> VerseRef {
    VerseRef {
        book: book.number,
        chapter: chapter.number,
        verse: verse.number,
        reference: format!("{} {}:{}", book.name, chapter.number, verse.number),
        text: verse.text.clone(),
    }
}
