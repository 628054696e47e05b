//! Render model: what the surface draws after every state change.
//!
//! Highlighting here is a display-only rule and deliberately weaker than the
//! matcher: a character is lit whenever its lowercase form occurs anywhere
//! in the lowercased query (plain containment, not the matched subsequence
//! positions). The two rules diverge in the original behavior and are kept
//! divergent on purpose.

use crate::core::session::Session;

/// One display character, already lowercased, with its highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HlChar {
    pub ch: char,
    pub hit: bool,
}

/// One candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Slot number 1-9 for the first nine rows, `None` below that.
    pub slot: Option<usize>,
    pub desktop: String,
    pub class: Vec<HlChar>,
    pub title: Vec<HlChar>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub query: String,
    pub rows: Vec<Row>,
}

/// Lowercases the text and flags every character contained in the query.
pub fn highlight(text: &str, query: &str) -> Vec<HlChar> {
    let query = query.to_lowercase();
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|ch| HlChar {
            ch,
            hit: query.contains(ch),
        })
        .collect()
}

impl RenderModel {
    /// Builds the model for the session's current (query, cursor) state.
    ///
    /// The class column shows the short class name, lowercased like the
    /// title. A cursor parked on the phantom position selects no row.
    pub fn for_session(session: &Session) -> Self {
        let query = session.query().to_string();
        let rows = session
            .candidates()
            .iter()
            .enumerate()
            .map(|(i, record)| Row {
                slot: (i < 9).then_some(i + 1),
                desktop: record.desktop.clone(),
                class: highlight(record.short_class(), &query),
                title: highlight(&record.title, &query),
                selected: i == session.cursor(),
            })
            .collect();

        Self { query, rows }
    }
}
