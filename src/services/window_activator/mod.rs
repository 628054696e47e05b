//! WindowActivator service: responsibility and boundaries
//!
//! Responsible ONLY for asking the window manager to raise one window,
//! keyed by its title. Whether the call succeeded is logged by the caller
//! and never changes the session outcome: after a confirm the session ends
//! unconditionally.

mod dry_run;
mod r#trait;
mod wmctrl;

pub use self::r#trait::{create_window_activator, WindowActivator};
