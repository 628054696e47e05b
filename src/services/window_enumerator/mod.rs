//! WindowEnumerator service: responsibility and boundaries
//!
//! This module and its submodules are responsible ONLY for producing the
//! catalog snapshot (id/desktop/class/title per window) once per session,
//! with the configured class exclusions applied. It MUST NOT filter by the
//! user's query or rank anything; all matching and ordering decisions are
//! made exclusively by the core filter engine.

mod dry_run;
mod r#trait;
mod wmctrl;

pub use self::r#trait::{create_window_enumerator, WindowEnumerator};
