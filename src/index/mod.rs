// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make large-library search fast.
//!
//! Two snapshot types, each built in one pass and never mutated afterwards:
//! - **Search index**: word and phrase lookups over show names and cached text
//! - **Bible index**: word lookups over the verses of one translation
//!
//! Snapshots are replaced wholesale. Readers holding an `Arc` to an old one
//! keep a consistent view until they drop it.

mod bible;
mod words;

pub use bible::*;
pub use words::*;
