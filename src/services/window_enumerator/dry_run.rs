use crate::error::Result;
use crate::events::WindowRecord;
use tracing::info;

pub struct DryRunEnumerator;

impl DryRunEnumerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::r#trait::WindowEnumerator for DryRunEnumerator {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        info!("Dry-run режим - перечислитель окон отдаёт эмулированный каталог");

        Ok(vec![
            WindowRecord::new("0x01", "0", "konsole.Konsole", "bash — dry_run"),
            WindowRecord::new("0x02", "0", "navigator.Firefox", "Browser — dry_run"),
            WindowRecord::new("0x03", "1", "kate.Kate", "Editor — dry_run"),
            WindowRecord::new("0x04", "1", "steam.Steam", "Game — dry_run"),
        ])
    }
}
