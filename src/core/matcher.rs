//! Fuzzy matcher: responsibility and boundaries
//!
//! This module is responsible ONLY for the query-vs-haystack subsequence
//! test. It MUST NOT know about windows, ranking or cursor state; ordering
//! decisions belong exclusively to the filter engine.

/// Case-folded subsequence containment.
///
/// Walks the query characters in order; each one must occur in the haystack
/// strictly after the position consumed by the previous one (leftmost-greedy).
/// An empty query matches any haystack. No edit distance, no typo tolerance.
pub fn matches(query: &str, haystack: &str) -> bool {
    let mut haystack = haystack.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|qc| haystack.any(|hc| hc == qc))
}
