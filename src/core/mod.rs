pub mod filter;
pub mod matcher;
pub mod render;
pub mod session;

pub use render::RenderModel;
pub use session::{Session, Step};
