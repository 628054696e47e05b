//! Surface service: responsibility and boundaries
//!
//! Responsible ONLY for turning keystrokes into `InputEvent`s and drawing
//! the render model after each state change. It MUST NOT mutate session
//! state or decide what a key "means" for the selection; the state machine
//! in `core::session` owns all of that.

mod dry_run;
mod keymap;
mod terminal;
mod r#trait;

pub use self::r#trait::{create_surface, Surface};
