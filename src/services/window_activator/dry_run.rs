use crate::error::Result;
use crate::events::WindowRecord;
use tracing::info;

pub struct DryRunActivator;

impl DryRunActivator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::r#trait::WindowActivator for DryRunActivator {
    async fn activate(&self, record: &WindowRecord) -> Result<()> {
        info!("Dry-run: эмулируем активацию окна: {}", record);
        Ok(())
    }
}
