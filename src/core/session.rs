//! Selection state machine: responsibility and boundaries
//!
//! Owns the query text and the cursor for one selection session and reacts
//! to discrete input events. Every transition recomputes the candidate list
//! through the filter engine before the cursor is used; the candidate list
//! itself is never stored. It MUST NOT talk to the window manager or draw
//! anything; activation and rendering are decided by the caller from the
//! returned `Step` and from `render_model()`.

use crate::core::filter;
use crate::events::{InputEvent, WindowRecord};

/// Highest candidate index reachable through `JumpTo` (slots 1-9).
const JUMP_SLOTS: usize = 9;

/// Outcome of one applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Session keeps running; the caller should re-render.
    Continue,
    /// The user confirmed this record; activate it and end the session.
    Activate(WindowRecord),
    /// Session ends with no activation.
    Cancelled,
}

/// One selection session: immutable catalog plus mutable (query, cursor).
///
/// Created with an empty query and cursor 0; discarded wholesale when the
/// session ends. Nothing survives across sessions.
pub struct Session {
    catalog: Vec<WindowRecord>,
    query: String,
    cursor: usize,
}

impl Session {
    pub fn new(catalog: Vec<WindowRecord>) -> Self {
        Self {
            catalog,
            query: String::new(),
            cursor: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidate list for the current query, recomputed on demand.
    pub fn candidates(&self) -> Vec<&WindowRecord> {
        filter::filter(&self.catalog, &self.query)
    }

    /// Applies one input event and returns what the caller should do next.
    ///
    /// Edits reset the cursor to 0 unconditionally: changing the filter
    /// invalidates any previous position.
    ///
    /// `Next` wraps only when the cursor moves strictly past the list
    /// length, so `cursor == len` — one phantom position below the last
    /// candidate — is reachable and no row is selected there. `Confirm` on
    /// the phantom position is a no-op. This boundary is inherited behavior;
    /// do not "fix" it to `>=` without changing the tests below.
    pub fn apply(&mut self, event: InputEvent) -> Step {
        match event {
            InputEvent::AppendChar(c) => {
                self.query.push(c);
                self.cursor = 0;
            }
            InputEvent::Backspace => {
                self.query.pop();
                self.cursor = 0;
            }
            InputEvent::Clear => {
                self.query.clear();
                self.cursor = 0;
            }
            InputEvent::Next => {
                self.cursor += 1;
                if self.cursor > self.candidates().len() {
                    self.cursor = 0;
                }
            }
            InputEvent::Prev => {
                if self.cursor == 0 {
                    self.cursor = self.candidates().len().saturating_sub(1);
                } else {
                    self.cursor -= 1;
                }
            }
            InputEvent::JumpTo(index) => {
                let candidates = self.candidates();
                if index < JUMP_SLOTS && index < candidates.len() {
                    return Step::Activate(candidates[index].clone());
                }
            }
            InputEvent::Confirm => {
                let candidates = self.candidates();
                if self.cursor < candidates.len() {
                    return Step::Activate(candidates[self.cursor].clone());
                }
            }
            InputEvent::Cancel => return Step::Cancelled,
        }
        Step::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(vec![
            WindowRecord::new("0x01", "0", "a.Foo", "Alpha"),
            WindowRecord::new("0x02", "0", "b.Bar", "Beta"),
            WindowRecord::new("0x03", "1", "c.Baz", "Gamma"),
        ])
    }

    #[test]
    fn starts_with_empty_query_and_cursor_zero() {
        let session = session();

        assert_eq!(session.query(), "");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.candidates().len(), 3);
    }

    #[test]
    fn append_narrows_and_resets_cursor() {
        let mut session = session();
        session.apply(InputEvent::Next);
        session.apply(InputEvent::Next);
        assert_eq!(session.cursor(), 2);

        assert_eq!(session.apply(InputEvent::AppendChar('a')), Step::Continue);
        assert_eq!(session.query(), "a");
        assert_eq!(session.cursor(), 0);

        // "a.Foo" class-matches, "b.Bar" and "c.Baz" class-match via 'a',
        // so narrow further.
        session.apply(InputEvent::AppendChar('l'));
        let candidates = session.candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Alpha");
    }

    #[test]
    fn backspace_and_clear_reset_cursor() {
        let mut session = session();
        session.apply(InputEvent::AppendChar('b'));
        session.apply(InputEvent::Next);
        assert_eq!(session.cursor(), 1);

        session.apply(InputEvent::Backspace);
        assert_eq!(session.query(), "");
        assert_eq!(session.cursor(), 0);

        session.apply(InputEvent::AppendChar('b'));
        session.apply(InputEvent::Next);
        session.apply(InputEvent::Clear);
        assert_eq!(session.query(), "");
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn backspace_on_empty_query_is_a_noop() {
        let mut session = session();
        session.apply(InputEvent::Backspace);

        assert_eq!(session.query(), "");
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn next_reaches_phantom_position_before_wrapping() {
        let mut session = session();
        session.apply(InputEvent::Next);
        session.apply(InputEvent::Next);
        assert_eq!(session.cursor(), 2);

        // One past the last candidate: cursor == len, no row selected.
        session.apply(InputEvent::Next);
        assert_eq!(session.cursor(), 3);

        // Only now does the wrap trigger (cursor > len).
        session.apply(InputEvent::Next);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn prev_wraps_to_last_candidate() {
        let mut session = session();
        session.apply(InputEvent::Prev);
        assert_eq!(session.cursor(), 2);

        session.apply(InputEvent::Prev);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn prev_on_empty_candidate_list_stays_at_zero() {
        let mut session = Session::new(Vec::new());
        session.apply(InputEvent::Prev);

        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn confirm_activates_record_under_cursor() {
        let mut session = session();
        session.apply(InputEvent::Next);

        match session.apply(InputEvent::Confirm) {
            Step::Activate(record) => assert_eq!(record.title, "Beta"),
            step => panic!("ожидался Activate, получен {:?}", step),
        }
    }

    #[test]
    fn confirm_with_no_candidates_is_a_noop() {
        let mut session = session();
        session.apply(InputEvent::AppendChar('z'));
        session.apply(InputEvent::AppendChar('z'));
        assert!(session.candidates().is_empty());

        assert_eq!(session.apply(InputEvent::Confirm), Step::Continue);
    }

    #[test]
    fn confirm_on_phantom_position_is_a_noop() {
        let mut session = session();
        for _ in 0..3 {
            session.apply(InputEvent::Next);
        }
        assert_eq!(session.cursor(), 3);

        assert_eq!(session.apply(InputEvent::Confirm), Step::Continue);
    }

    #[test]
    fn jump_selects_and_confirms_in_one_step() {
        let mut session = session();

        match session.apply(InputEvent::JumpTo(2)) {
            Step::Activate(record) => assert_eq!(record.title, "Gamma"),
            step => panic!("ожидался Activate, получен {:?}", step),
        }
    }

    #[test]
    fn jump_out_of_range_is_a_noop() {
        let mut session = session();

        assert_eq!(session.apply(InputEvent::JumpTo(5)), Step::Continue);
        assert_eq!(session.apply(InputEvent::JumpTo(9)), Step::Continue);
    }

    #[test]
    fn cancel_ends_the_session() {
        let mut session = session();
        assert_eq!(session.apply(InputEvent::Cancel), Step::Cancelled);
    }

    #[test]
    fn cursor_stays_in_bounds_after_edit_sequences() {
        let mut session = session();
        let script = [
            InputEvent::Next,
            InputEvent::AppendChar('b'),
            InputEvent::Next,
            InputEvent::Next,
            InputEvent::Backspace,
            InputEvent::Prev,
            InputEvent::Clear,
        ];

        for event in script {
            session.apply(event);
            let len = session.candidates().len();
            if len > 0 {
                // The phantom slot is the single allowed excursion.
                assert!(session.cursor() <= len);
            }
        }
    }
}
