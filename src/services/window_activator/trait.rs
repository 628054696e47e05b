use crate::error::Result;
use crate::events::WindowRecord;

/// Trait for window activators that can run in different modes
#[async_trait::async_trait]
pub trait WindowActivator: Send + Sync {
    /// Raise the window to the foreground; looked up by title
    async fn activate(&self, record: &WindowRecord) -> Result<()>;
}

/// Factory function to create an appropriate activator based on the dry_run flag
pub fn create_window_activator(dry_run: bool) -> Box<dyn WindowActivator + Send> {
    if dry_run {
        Box::new(super::dry_run::DryRunActivator::new())
    } else {
        Box::new(super::wmctrl::WmctrlActivator::new())
    }
}
