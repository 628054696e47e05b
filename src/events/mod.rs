pub mod input;
pub mod window;

pub use input::InputEvent;
pub use window::WindowRecord;
