use crate::error::{Result, ShadowError};
use crate::events::WindowRecord;
use std::process::Command;
use tracing::info;

pub struct WmctrlActivator;

impl WmctrlActivator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::r#trait::WindowActivator for WmctrlActivator {
    async fn activate(&self, record: &WindowRecord) -> Result<()> {
        info!("Активация окна: {}", record);

        // Поиск по заголовку: wmctrl -a поднимает первое окно, чей
        // заголовок содержит строку. Известная хрупкость при
        // неуникальных заголовках.
        let output = Command::new("wmctrl")
            .args(["-a", &record.title])
            .output()
            .map_err(|e| ShadowError::Activation(format!("wmctrl не найден: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShadowError::Activation(format!(
                "wmctrl не смог активировать \"{}\": {}",
                record.title, stderr
            )));
        }

        Ok(())
    }
}
