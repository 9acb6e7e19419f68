// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context snippets for show results.

/// Character index of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let same = |a: char, b: char| a == b || a.to_lowercase().eq(b.to_lowercase());
    (0..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| same(*a, *b))
    })
}

/// Text around the first occurrence of the raw query in `content`.
///
/// Keeps `before` characters ahead of the match and `after` characters past
/// its end, trimmed, with "..." marking each clipped side. Returns "" when the
/// query is shorter than `min_query_len` or does not occur.
pub fn show_description(
    content: &str,
    raw_query: &str,
    before: usize,
    after: usize,
    min_query_len: usize,
) -> String {
    let query: Vec<char> = raw_query.chars().collect();
    if content.is_empty() || query.len() < min_query_len {
        return String::new();
    }

    let chars: Vec<char> = content.chars().collect();
    let Some(found) = find_case_insensitive(&chars, &query) else {
        return String::new();
    };

    let start = found.saturating_sub(before);
    let end = (found + query.len() + after).min(chars.len());
    let window: String = chars[start..end].iter().collect();

    let mut description = String::with_capacity(window.len() + 6);
    if start > 0 {
        description.push_str("...");
    }
    description.push_str(window.trim());
    if end < chars.len() {
        description.push_str("...");
    }
    description
}
