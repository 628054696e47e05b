//! Filter & rank engine: responsibility and boundaries
//!
//! Applies the fuzzy matcher across the catalog and produces the ordered
//! candidate list for a query. It MUST NOT own any cursor or query state;
//! that belongs exclusively to the session state machine.

use crate::core::matcher;
use crate::events::WindowRecord;

/// Two-pass ranking, stable within each pass.
///
/// Pass 1: records whose class matches the query, in catalog order. A class
/// match is an application-identity signal and outranks a title match.
/// Pass 2: records whose title matches, in catalog order, skipping records
/// already emitted by pass 1 (full-record equality).
///
/// The result is recomputed on every query mutation; the catalog is small
/// enough that memoization is not worth carrying.
pub fn filter<'a>(catalog: &'a [WindowRecord], query: &str) -> Vec<&'a WindowRecord> {
    let mut candidates: Vec<&WindowRecord> = catalog
        .iter()
        .filter(|record| matcher::matches(query, &record.class))
        .collect();

    for record in catalog {
        if matcher::matches(query, &record.title) && !candidates.contains(&record) {
            candidates.push(record);
        }
    }

    candidates
}
