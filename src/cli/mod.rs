// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quicksearch command-line interface.
//!
//! Three subcommands: `search` ranks shows from a library file, `verses` runs
//! indexed text search over a Bible file, and `quick` runs everything the
//! quick-search box would (shows, Scripture references and verses, media).

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quicksearch",
    about = "Quick search over song libraries, Scripture and media",
    version
)]
pub struct Cli {
    /// Engine config JSON (thresholds and limits). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank shows from a library file
    Search {
        /// Library JSON: `{ "shows": [...], "texts": { "<id>": "<lyrics>" } }`
        #[arg(short = 'L', long)]
        library: String,

        /// Separate text cache JSON (`{ "<id>": "<lyrics>" }`), merged over the
        /// library's own `texts`
        #[arg(short, long)]
        texts: Option<String>,

        /// Categories whose shows are hidden from results (repeatable)
        #[arg(long = "archived")]
        archived: Vec<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search query
        query: String,
    },

    /// Search verse text in a Bible file
    Verses {
        /// Bible JSON: `{ "name": ..., "books": [ { "number", "name", "chapters" } ] }`
        #[arg(short, long)]
        bible: String,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search query
        query: String,
    },

    /// Run the full quick-search box: shows, Scripture and media
    Quick {
        /// Library JSON with shows and texts
        #[arg(short = 'L', long)]
        library: Option<String>,

        /// Bible JSON used as the active translation
        #[arg(short, long)]
        bible: Option<String>,

        /// Directory whose files are offered as media
        #[arg(short, long)]
        media: Option<String>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search query
        query: String,
    },
}
