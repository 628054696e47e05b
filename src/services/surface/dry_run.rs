use crate::core::RenderModel;
use crate::error::Result;
use crate::events::InputEvent;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep, Duration};
use tracing::info;

use super::r#trait::Surface;

pub struct DryRunSurface;

impl DryRunSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for DryRunSurface {
    fn start_input(&mut self, tx: UnboundedSender<InputEvent>) -> Result<()> {
        info!("Dry-run режим - поверхность проигрывает сценарий ввода");

        let script = [
            InputEvent::AppendChar('r'),
            InputEvent::Next,
            InputEvent::Prev,
            InputEvent::Backspace,
            InputEvent::Next,
            InputEvent::Confirm,
        ];

        tokio::spawn(async move {
            for event in script {
                sleep(Duration::from_millis(300)).await;
                info!("Dry-run: эмулируем событие ввода: {:?}", event);
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Ok(())
    }

    fn render(&mut self, model: &RenderModel) -> Result<()> {
        let selected = model
            .rows
            .iter()
            .find(|row| row.selected)
            .map(|row| row.title.iter().map(|c| c.ch).collect::<String>())
            .unwrap_or_else(|| "<нет>".to_string());

        info!(
            "Dry-run: запрос \"{}\", кандидатов: {}, выбрано: {}",
            model.query,
            model.rows.len(),
            selected
        );
        Ok(())
    }
}
