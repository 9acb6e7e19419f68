// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance via edit distance.
//!
//! Quick search only needs one primitive here: a 0..1 similarity between a
//! title and the query, used by the fuzzy fallback and for ordering media hits.

mod levenshtein;

pub use levenshtein::*;
