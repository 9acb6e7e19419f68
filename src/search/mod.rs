// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: turning a query into ranked results.
//!
//! The snapshots are built; this is where they get read. A query is expanded
//! into weighted terms, looked up against the word and phrase indexes, and the
//! per-show scores are merged, filtered and rescaled. Verses, media files and
//! result snippets each get a smaller path of their own.

mod bible;
mod media;
mod ranker;
mod snippet;
mod terms;

pub use bible::*;
pub use media::*;
pub use ranker::*;
pub use snippet::*;
pub use terms::*;
