//! Literal find and replace.
//!
//! Matching is case-sensitive and non-overlapping, scanning left to right.
//! Each search resumes after the end of the previous match in the original
//! text, so replacement text is never rescanned.

use std::ops::Range;

/// Result of a [`replace_all`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The rewritten text.
    pub text: String,
    /// Number of occurrences that were replaced.
    pub count: usize,
}

/// Replace every occurrence of `target` in `haystack` with `replacement`.
///
/// An empty `target` matches nothing: the text comes back unchanged with a
/// count of zero. Callers that treat an empty target as an error must check
/// before calling.
pub fn replace_all(haystack: &str, target: &str, replacement: &str) -> Replacement {
    if target.is_empty() {
        return Replacement {
            text: haystack.to_string(),
            count: 0,
        };
    }

    let mut text = String::with_capacity(haystack.len());
    let mut count = 0;
    let mut last_end = 0;
    for (start, matched) in haystack.match_indices(target) {
        text.push_str(&haystack[last_end..start]);
        text.push_str(replacement);
        last_end = start + matched.len();
        count += 1;
    }
    text.push_str(&haystack[last_end..]);

    Replacement { text, count }
}

/// Byte ranges of every non-overlapping occurrence of `target`.
pub fn find_matches(haystack: &str, target: &str) -> Vec<Range<usize>> {
    if target.is_empty() {
        return Vec::new();
    }
    haystack
        .match_indices(target)
        .map(|(start, matched)| start..start + matched.len())
        .collect()
}
