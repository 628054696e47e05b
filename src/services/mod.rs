pub mod control;
pub mod surface;
pub mod window_activator;
pub mod window_enumerator;

pub use surface::create_surface;
pub use window_activator::create_window_activator;
pub use window_enumerator::create_window_enumerator;
