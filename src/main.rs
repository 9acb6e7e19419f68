// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quicksearch::{
    ArchivePolicy, InMemoryScriptures, MediaFile, QuickSearchResult, ScriptureData,
    ScriptureProvider, SearchConfig, SearchEngine, Show,
};

mod cli;
use cli::display::{
    dim, icon_badge, row, score_value, section_bot, section_top, themed, truncate, CYAN, GRAY,
};
use cli::{Cli, Commands};

/// A show library as exported by the presentation app.
#[derive(Deserialize, Default)]
struct Library {
    #[serde(default)]
    shows: Vec<Show>,
    #[serde(default)]
    texts: HashMap<String, String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quicksearch=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            library,
            texts,
            archived,
            limit,
            json,
            query,
        } => run_search(config, &library, texts.as_deref(), archived, limit, json, &query),
        Commands::Verses { bible, json, query } => run_verses(config, &bible, json, &query),
        Commands::Quick {
            library,
            bible,
            media,
            json,
            query,
        } => run_quick(
            config,
            library.as_deref(),
            bible.as_deref(),
            media.as_deref(),
            json,
            &query,
        ),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

fn load_library(path: &str, extra_texts: Option<&str>) -> Result<Library> {
    let json = fs::read_to_string(path).with_context(|| format!("reading library {}", path))?;
    let mut library: Library =
        serde_json::from_str(&json).with_context(|| format!("parsing library {}", path))?;

    if let Some(texts_path) = extra_texts {
        let json = fs::read_to_string(texts_path)
            .with_context(|| format!("reading texts {}", texts_path))?;
        let texts: HashMap<String, String> = serde_json::from_str(&json)
            .with_context(|| format!("parsing texts {}", texts_path))?;
        library.texts.extend(texts);
    }

    info!(
        shows = library.shows.len(),
        texts = library.texts.len(),
        "library loaded"
    );
    Ok(library)
}

fn load_bible(path: &str) -> Result<(String, ScriptureData)> {
    let data =
        ScriptureData::from_json_file(path).with_context(|| format!("loading bible {}", path))?;
    let id = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bible")
        .to_string();
    Ok((id, data))
}

/// Files directly inside `dir`, named by their stem.
fn list_media(dir: &str) -> Result<Vec<MediaFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing media {}", dir))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        files.push(MediaFile {
            name: name.to_string(),
            path: path.to_string_lossy().into_owned(),
        });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    config: SearchConfig,
    library_path: &str,
    texts_path: Option<&str>,
    archived: Vec<String>,
    limit: usize,
    json: bool,
    query: &str,
) -> Result<()> {
    let Library { shows, texts } = load_library(library_path, texts_path)?;
    let engine = SearchEngine::new(texts)
        .with_config(config)
        .with_visibility(ArchivePolicy::new(archived));

    let start = Instant::now();
    let mut hits = engine.show_results(query, &shows);
    let elapsed = start.elapsed();
    hits.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    let path = if engine.config().use_index(shows.len()) {
        "index"
    } else {
        "fuzzy"
    };
    section_top(&format!("SHOWS \"{}\"", query));
    row(&dim(&format!(
        " {} of {} shows, {} path, {:.2?}",
        hits.len(),
        shows.len(),
        path,
        elapsed
    )));
    for hit in &hits {
        row(&format!(
            " {} {}",
            score_value(hit.score),
            truncate(&hit.show.name, 70)
        ));
        if !hit.description.is_empty() {
            row(&format!("       {}", dim(&truncate(&hit.description, 72))));
        }
    }
    section_bot();
    Ok(())
}

fn run_verses(config: SearchConfig, bible_path: &str, json: bool, query: &str) -> Result<()> {
    let (bible_id, data) = load_bible(bible_path)?;
    let engine = SearchEngine::new(HashMap::<String, String>::new()).with_config(config);
    engine.ensure_bible_index(&bible_id, &data);
    let verses = engine.search_verses(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&verses)?);
        return Ok(());
    }

    section_top(&format!("VERSES \"{}\"", query));
    for verse in &verses {
        row(&format!(
            " {} {}",
            themed(CYAN, &[], &format!("{:<14}", verse.reference)),
            truncate(&verse.text, 64)
        ));
    }
    if verses.is_empty() {
        row(&themed(GRAY, &[], " no verses"));
    }
    section_bot();
    Ok(())
}

fn run_quick(
    config: SearchConfig,
    library_path: Option<&str>,
    bible_path: Option<&str>,
    media_dir: Option<&str>,
    json: bool,
    query: &str,
) -> Result<()> {
    let library = match library_path {
        Some(path) => load_library(path, None)?,
        None => Library::default(),
    };
    let media = match media_dir {
        Some(dir) => list_media(dir)?,
        None => Vec::new(),
    };
    let mut scriptures = InMemoryScriptures::new();
    if let Some(path) = bible_path {
        let (id, data) = load_bible(path)?;
        scriptures.insert(id.clone(), data);
        scriptures.set_active(Some(id));
    }

    let engine = SearchEngine::new(library.texts).with_config(config);
    let provider: Option<&dyn ScriptureProvider> = if bible_path.is_some() {
        Some(&scriptures)
    } else {
        None
    };
    let results = engine.quick_search(query, &library.shows, &media, provider);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("QUICK SEARCH \"{}\"", query));
    for result in &results {
        print_result(result);
    }
    if results.is_empty() {
        row(&themed(GRAY, &[], " no results"));
    }
    section_bot();
    Ok(())
}

fn print_result(result: &QuickSearchResult) {
    let score = match result {
        QuickSearchResult::Show(hit) => score_value(hit.score),
        _ => " ".repeat(5),
    };
    row(&format!(
        " {} {} {}",
        icon_badge(result.icon()),
        score,
        truncate(result.name(), 60)
    ));
    if !result.description().is_empty() {
        row(&format!(
            "                   {}",
            dim(&truncate(result.description(), 60))
        ));
    }
}
