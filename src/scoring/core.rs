// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers behind quick-search ranking.
//!
//! These weights are fixed: result order across both search paths depends on
//! them, and callers compare scores against the 100/99/3 thresholds directly.
//!
//! # Indexed ranking
//!
//! | Signal                      | Contribution                               |
//! |-----------------------------|--------------------------------------------|
//! | Phrase term hit             | `weight * 20`                              |
//! | Word term hit               | `weight * field_bonus + frequency_bonus`   |
//! | Prefix of an indexed word   | `weight * 0.3 * prefix_field_bonus`        |
//!
//! # Fuzzy fallback
//!
//! Exact identifier/title matches score 100. Everything else is a sum of five
//! components, clamped to 99 and floored to 0 below 3.

use crate::types::Field;

// =============================================================================
// TOKEN LENGTH RULES
// =============================================================================

/// Words shorter than this are never indexed.
pub const MIN_INDEXED_WORD_LEN: usize = 2;

/// Smallest and largest n-gram stored in the phrase index.
pub const MIN_PHRASE_WORDS: usize = 2;
pub const MAX_PHRASE_WORDS: usize = 5;

/// Default minimum length for a query word to become its own term.
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Scripture queries keep two-letter words ("go", "up").
pub const VERSE_MIN_TERM_LEN: usize = 2;

/// Terms shorter than this do not trigger prefix expansion.
pub const MIN_PREFIX_LEN: usize = 3;

// =============================================================================
// QUERY TERM WEIGHTS
// =============================================================================

/// The whole query as one phrase.
pub const FULL_PHRASE_WEIGHT: f64 = 1.0;

/// Sub-phrases score `0.6 + (window / tokens) * 0.2`.
pub const SUBPHRASE_BASE_WEIGHT: f64 = 0.6;
pub const SUBPHRASE_SPAN_WEIGHT: f64 = 0.2;

/// Single-word terms.
pub const WORD_TERM_WEIGHT: f64 = 0.5;

// =============================================================================
// INDEXED RANKING
// =============================================================================

/// Multiplier for a phrase term found in the phrase index or in verse text.
pub const PHRASE_MATCH_MULTIPLIER: f64 = 20.0;

/// Field bonus for exact word hits.
pub const NAME_FIELD_BONUS: f64 = 3.0;
pub const CONTENT_FIELD_BONUS: f64 = 1.0;

/// Frequency bonus: `min(frequency, 5) * 0.5`.
pub const FREQUENCY_CAP: u32 = 5;
pub const FREQUENCY_BONUS_PER_HIT: f64 = 0.5;

/// Prefix hits score `weight * 0.3 * prefix_field_bonus`.
pub const PREFIX_MATCH_FACTOR: f64 = 0.3;
pub const NAME_PREFIX_BONUS: f64 = 2.0;
pub const CONTENT_PREFIX_BONUS: f64 = 0.5;

// =============================================================================
// FUZZY FALLBACK
// =============================================================================

/// Reserved for exact number/identifier/title matches.
pub const EXACT_MATCH_SCORE: f64 = 100.0;

/// Combined scores at or above 100 are reported as this.
pub const MAX_COMBINED_SCORE: f64 = 99.0;

/// Combined scores below this are noise and reported as 0.
pub const NOISE_FLOOR: f64 = 3.0;

/// Word-overlap component.
pub const NAME_OVERLAP_WEIGHT: f64 = 40.0;
pub const CONTENT_OVERLAP_WEIGHT: f64 = 30.0;

/// Content density component: `min(density * 40, 1) * 70`.
pub const DENSITY_SCALE: f64 = 40.0;
pub const DENSITY_WEIGHT: f64 = 70.0;

/// Title word-for-word and similarity components (fractions of 100).
pub const TITLE_WORD_WEIGHT: f64 = 0.5;
pub const TITLE_SIMILARITY_WEIGHT: f64 = 0.3;

/// Content word-for-word component.
pub const CONTENT_WORD_WEIGHT: f64 = 0.03;
pub const CONTENT_LONG_WORD_WEIGHT: f64 = 0.07;

/// Bonus multiplier for an exact word hit in this field.
pub fn field_bonus(field: Field) -> f64 {
    match field {
        Field::Name => NAME_FIELD_BONUS,
        Field::Content => CONTENT_FIELD_BONUS,
    }
}

/// Bonus multiplier for a prefix hit in this field.
pub fn prefix_field_bonus(field: Field) -> f64 {
    match field {
        Field::Name => NAME_PREFIX_BONUS,
        Field::Content => CONTENT_PREFIX_BONUS,
    }
}

/// `min(frequency, 5) * 0.5`.
pub fn frequency_bonus(frequency: u32) -> f64 {
    f64::from(frequency.min(FREQUENCY_CAP)) * FREQUENCY_BONUS_PER_HIT
}

/// Score contributed by one word-index entry for a word term.
pub fn word_hit_score(weight: f64, field: Field, frequency: u32) -> f64 {
    weight * field_bonus(field) + frequency_bonus(frequency)
}

/// Score contributed by one entry of an indexed word the term is a prefix of.
pub fn prefix_hit_score(weight: f64, field: Field) -> f64 {
    weight * PREFIX_MATCH_FACTOR * prefix_field_bonus(field)
}

/// Score contributed by one phrase hit.
pub fn phrase_hit_score(weight: f64) -> f64 {
    weight * PHRASE_MATCH_MULTIPLIER
}

/// Apply the 99 clamp and the noise floor to a combined fuzzy score.
pub fn clamp_combined(score: f64) -> f64 {
    if score >= EXACT_MATCH_SCORE {
        MAX_COMBINED_SCORE
    } else if score < NOISE_FLOOR || score.is_nan() {
        0.0
    } else {
        score
    }
}
