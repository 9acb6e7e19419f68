// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how quick-search results get their numbers.
//!
//! Two scorers feed one finalization step. Large libraries go through the
//! inverted index; small ones are scored show by show with the fuzzy fallback.
//! Either way the list is sorted and rescaled so the best match reads 100.

mod core;
pub mod fuzzy;
pub mod ranking;

pub use core::*;
