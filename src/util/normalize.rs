// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent- and punctuation-insensitive text normalization.
//!
//! "Amazing Grace!" and "amazing grace" must look identical to the index, and
//! so must "Ave María" and "ave maria". Normalization does three things:
//!
//! 1. Lowercase
//! 2. NFD decompose, then drop combining marks (diacritics)
//! 3. Drop a fixed class of punctuation and symbols
//!
//! Whitespace is left alone unless the compact form is requested. Tokenizing
//! is a separate step so callers can keep phrase structure.

use unicode_normalization::UnicodeNormalization;

/// Punctuation and symbols removed by `normalize`.
///
/// Matches `. , / # ! ? $ % ^ & * ; : { } = - _ ' " ´ ` ~ ( )`.
const SPECIAL_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
    '\'', '"', '´', '`', '~', '(', ')',
];

#[inline]
fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// Is this character a diacritic left over after NFD decomposition?
///
/// Covers the combining blocks plus the spacing modifier letters, Hebrew
/// points and cantillation, and Arabic harakat.
#[inline]
fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{00A8}' | '\u{00AF}' | '\u{00B8}' |  // spacing diaeresis, macron, cedilla
        '\u{02B0}'..='\u{036F}' |  // Spacing Modifier Letters + Combining Diacritical Marks
        '\u{0483}'..='\u{0487}' |  // Combining Cyrillic
        '\u{0591}'..='\u{05C7}' |  // Hebrew cantillation and points
        '\u{064B}'..='\u{065F}' |  // Arabic harakat
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Normalize text for comparison: lowercase, strip diacritics and punctuation.
///
/// Whitespace is preserved so the result can still be tokenized:
/// - "Amazing Grace!" → "amazing grace"
/// - "Ave María" → "ave maria"
/// - "It's Well (Live)" → "its well live"
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c) && !is_special_char(*c))
        .collect()
}

/// `normalize`, then remove every whitespace character.
///
/// Used for identifier-style comparisons where "MP 133" and "mp133" must match.
pub fn normalize_compact(value: &str) -> String {
    normalize(value)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Lowercase and split on runs of whitespace.
///
/// Punctuation is NOT stripped here; normalize first when that matters.
/// Never yields empty tokens.
pub fn tokenize(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Is the new query a refinement of the old one?
///
/// True iff every old token still appears in the new token list. An empty old
/// query is never refined.
pub fn is_refinement<S: AsRef<str>>(new_tokens: &[S], old_tokens: &[S]) -> bool {
    !old_tokens.is_empty()
        && old_tokens
            .iter()
            .all(|old| new_tokens.iter().any(|new| new.as_ref() == old.as_ref()))
}

/// Drop space-separated words of two characters or fewer.
pub fn remove_short_words(value: &str) -> String {
    value
        .split(' ')
        .filter(|word| char_len(word) > 2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length in Unicode scalar values. Every length rule in the engine uses this.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
