use crate::config::Config;
use crate::error::Result;
use crate::events::WindowRecord;
use std::sync::Arc;

/// Trait for window enumerators that can run in different modes
#[async_trait::async_trait]
pub trait WindowEnumerator: Send + Sync {
    /// Live set of manageable windows at call time, exclusion list applied
    async fn list_windows(&self) -> Result<Vec<WindowRecord>>;
}

/// Factory function to create an appropriate enumerator based on the dry_run flag
pub fn create_window_enumerator(
    config: Arc<Config>,
    dry_run: bool,
) -> Box<dyn WindowEnumerator + Send> {
    if dry_run {
        Box::new(super::dry_run::DryRunEnumerator::new())
    } else {
        Box::new(super::wmctrl::WmctrlEnumerator::new(config))
    }
}
