// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing and scoring.
//!
//! Everything that compares strings goes through `normalize` first, so the
//! index, the ranker and the fuzzy scorer all agree on what "the same word" means.

pub mod normalize;

pub use normalize::*;
