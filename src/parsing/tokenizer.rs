//! Word splitting for verse lines.
//!
//! Two notions of "word" live here and they intentionally disagree on edge
//! cases. [`word_count`] counts space-separated chunks plus one per hyphen,
//! while [`nth_word`] walks runs of ASCII alphanumerics (apostrophes allowed
//! after the first character). The scheme builder asks `nth_word` for word
//! number `word_count`, so a line such as `"night "` (trailing space) has no
//! last word.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9']*").expect("word run pattern is valid"));

/// Counts words in a line: one to start with for a non-empty line, one more
/// for each non-space to space transition, and one more for every hyphen.
pub fn word_count(line: &str) -> usize {
    if line.is_empty() {
        return 0;
    }
    let mut count = 1;
    let mut prev = ' ';
    for ch in line.chars() {
        if prev != ' ' && ch == ' ' {
            count += 1;
        } else if ch == '-' {
            count += 1;
        }
        prev = ch;
    }
    count
}

/// Returns the `n`-th (1-indexed) alphanumeric run of `line`, uppercased.
pub fn nth_word(line: &str, n: usize) -> Option<String> {
    if n < 1 {
        return None;
    }
    WORD_RUN_RE
        .find_iter(line)
        .nth(n - 1)
        .map(|m| m.as_str().to_ascii_uppercase())
}

/// The word the scheme builder treats as the line's rhyme word.
pub fn last_word(line: &str) -> Option<String> {
    nth_word(line, word_count(line))
}
