//! Character-level features of the raw URL.

use std::collections::HashMap;

/// Shannon entropy (bits) of the character distribution of the trimmed URL.
///
/// Returns 0.0 for empty or whitespace-only input. Always within
/// `0.0..=log2(distinct chars)`.
pub fn entropy(url: &str) -> f64 {
    let s = url.trim();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }
    let len = len as f64;
    let h: f64 = counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            p * p.log2()
        })
        .sum();
    // Subtracting from +0.0 keeps a single-symbol input at +0.0, not -0.0.
    0.0 - h
}

pub fn num_digits(url: &str) -> usize {
    url.chars().filter(|c| c.is_numeric()).count()
}

/// Length in characters (not bytes).
pub fn url_length(url: &str) -> usize {
    url.chars().count()
}

/// Number of `&` separators anywhere in the URL.
pub fn num_parameters(url: &str) -> usize {
    url.matches('&').count()
}

/// Number of `#` separators anywhere in the URL.
pub fn num_fragments(url: &str) -> usize {
    url.matches('#').count()
}

pub fn has_http(url: &str) -> bool {
    url.contains("http:")
}

pub fn has_https(url: &str) -> bool {
    url.contains("https:")
}
