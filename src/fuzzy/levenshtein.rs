// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the normalized similarity built on it.
//!
//! `similarity(a, b) = (len(longer) - distance) / len(longer)`, computed on
//! lowercased characters. Two empty strings are identical (1.0).

/// Case-insensitive Levenshtein distance in characters.
///
/// Single-row DP: O(n·m) time, O(m) space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b.len()]
}

/// Normalized similarity in `[0, 1]`; 1.0 means equal ignoring case.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_len = a.to_lowercase().chars().count();
    let b_len = b.to_lowercase().chars().count();
    let longer = a_len.max(b_len);

    if longer == 0 {
        return 1.0;
    }

    (longer - edit_distance(a, b)) as f64 / longer as f64
}
