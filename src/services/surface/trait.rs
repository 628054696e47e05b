use crate::core::RenderModel;
use crate::error::Result;
use crate::events::InputEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Trait for input/render surfaces that can run in different modes
pub trait Surface: Send {
    /// Start delivering input events into the session channel
    fn start_input(&mut self, tx: UnboundedSender<InputEvent>) -> Result<()>;

    /// Draw the render model after a state change
    fn render(&mut self, model: &RenderModel) -> Result<()>;
}

/// Factory function to create an appropriate surface based on the dry_run flag
pub fn create_surface(dry_run: bool) -> Result<Box<dyn Surface>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunSurface::new()))
    } else {
        Ok(Box::new(super::terminal::TerminalSurface::new()?))
    }
}
