// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixtures shared by unit tests, integration tests and benchmarks.
#![doc(hidden)]

use crate::scripture::{Book, Chapter, ScriptureData, Verse};
use crate::types::{QuickAccess, Show};
use std::collections::HashMap;

pub fn make_show(id: &str, name: &str) -> Show {
    Show {
        id: id.to_string(),
        name: name.to_string(),
        category: None,
        quick_access: None,
    }
}

pub fn make_show_in(id: &str, name: &str, category: &str) -> Show {
    Show {
        category: Some(category.to_string()),
        ..make_show(id, name)
    }
}

pub fn make_show_with_number(id: &str, name: &str, number: &str) -> Show {
    Show {
        quick_access: Some(QuickAccess {
            number: Some(number.to_string()),
            ..QuickAccess::default()
        }),
        ..make_show(id, name)
    }
}

const TITLE_WORDS: &[&str] = &[
    "morning", "river", "mountain", "shepherd", "harvest", "glory", "light", "valley", "crown",
    "anchor", "garden", "rest",
];

const LYRIC_LINES: &[&str] = &[
    "lift your eyes to the hills",
    "the river runs through the valley",
    "sing a new song in the morning",
    "a light that shines in darkness",
    "rest in the shadow of his wings",
    "the harvest is plenty and the workers few",
    "a crown of glory and a robe of praise",
];

/// `n` shows with deterministic titles and lyrics, plus their text cache.
///
/// Ids are `show-0`, `show-1`, ... and quick-access numbers are `1`, `2`, ...
pub fn make_library(n: usize) -> (Vec<Show>, HashMap<String, String>) {
    let mut shows = Vec::with_capacity(n);
    let mut texts = HashMap::with_capacity(n);
    for i in 0..n {
        let id = format!("show-{}", i);
        let first = TITLE_WORDS[i % TITLE_WORDS.len()];
        let second = TITLE_WORDS[(i / TITLE_WORDS.len() + i + 1) % TITLE_WORDS.len()];
        let name = format!("{} {} {}", first, second, i);
        shows.push(make_show_with_number(&id, &name, &(i + 1).to_string()));

        let lyrics: Vec<&str> = (0..3)
            .map(|k| LYRIC_LINES[(i + k * 2) % LYRIC_LINES.len()])
            .collect();
        texts.insert(id, lyrics.join(" "));
    }
    (shows, texts)
}

fn chapter(number: u32, verses: &[(u32, &str)]) -> Chapter {
    Chapter {
        number,
        verses: verses
            .iter()
            .map(|(n, text)| Verse {
                number: *n,
                text: text.to_string(),
            })
            .collect(),
    }
}

/// A tiny translation: Psalms 23, Ezekiel 37, John 3 and 1 John 4.
pub fn sample_scripture() -> ScriptureData {
    ScriptureData {
        name: "Sample".to_string(),
        books: vec![
            Book {
                number: 19,
                name: "Psalms".to_string(),
                chapters: vec![chapter(
                    23,
                    &[
                        (1, "The LORD is my shepherd; I shall not want."),
                        (2, "He maketh me to lie down in green pastures: he leadeth me beside the still waters."),
                        (3, "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake."),
                        (4, "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me."),
                    ],
                )],
            },
            Book {
                number: 26,
                name: "Ezekiel".to_string(),
                chapters: vec![chapter(
                    37,
                    &[
                        (1, "The hand of the LORD was upon me, and set me down in the midst of the valley which was full of bones,"),
                        (4, "Again he said unto me, Prophesy upon these bones, and say unto them, O ye dry bones, hear the word of the LORD."),
                        (11, "Behold, they say, Our bones are dried, and our hope is lost."),
                    ],
                )],
            },
            Book {
                number: 43,
                name: "John".to_string(),
                chapters: vec![chapter(
                    3,
                    &[
                        (16, "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
                        (17, "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."),
                    ],
                )],
            },
            Book {
                number: 62,
                name: "1 John".to_string(),
                chapters: vec![chapter(
                    4,
                    &[
                        (7, "Beloved, let us love one another: for love is of God; and every one that loveth is born of God, and knoweth God."),
                        (8, "He that loveth not knoweth not God; for God is love."),
                    ],
                )],
            },
        ],
    }
}
