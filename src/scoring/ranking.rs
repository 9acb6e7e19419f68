// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering and 0–100 normalization.
//!
//! Both search paths end here. Raw scores are only comparable within one
//! query, so every list is rescaled against its own best match.

use crate::types::{Show, ShowMatch};
use std::cmp::Ordering;

/// Descending by raw score. NaN never reaches here but compares as equal.
pub fn compare_matches(a: &ShowMatch, b: &ShowMatch) -> Ordering {
    b.raw_score
        .partial_cmp(&a.raw_score)
        .unwrap_or(Ordering::Equal)
}

/// Wrap a raw score before finalization.
pub fn unranked(show: Show, raw_score: f64) -> ShowMatch {
    ShowMatch {
        show,
        score: raw_score,
        raw_score,
    }
}

/// Sort by raw score and rescale to `(score / top) * 100`.
///
/// The sort is stable: ties keep the order in which shows were first scored.
/// An empty list stays empty; a non-positive top score rescales against 1.
pub fn finalize_matches(mut matches: Vec<ShowMatch>) -> Vec<ShowMatch> {
    matches.sort_by(compare_matches);

    let top = matches
        .first()
        .map(|m| m.raw_score)
        .filter(|score| *score > 0.0)
        .unwrap_or(1.0);

    for m in &mut matches {
        m.score = (m.raw_score / top) * 100.0;
    }
    matches
}
