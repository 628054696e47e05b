use crate::config::Config;
use crate::error::{Result, ShadowError};
use crate::events::WindowRecord;
use std::process::Command;
use std::sync::Arc;
use tracing::debug;

pub struct WmctrlEnumerator {
    config: Arc<Config>,
}

impl WmctrlEnumerator {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl super::r#trait::WindowEnumerator for WmctrlEnumerator {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let output = Command::new("wmctrl")
            .args(["-lx"])
            .output()
            .map_err(|e| ShadowError::Enumeration(format!("wmctrl не найден: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShadowError::Enumeration(format!(
                "wmctrl вернул ошибку: {}",
                stderr
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let windows: Vec<WindowRecord> = stdout
            .lines()
            .filter_map(parse_line)
            .filter(|record| !self.config.is_class_excluded(&record.class))
            .collect();

        debug!("wmctrl перечислил {} окон", windows.len());
        Ok(windows)
    }
}

/// Разбор строки `wmctrl -lx`: `id desktop class host title...`.
/// Заголовок может быть пустым; строки короче четырёх полей пропускаются.
fn parse_line(line: &str) -> Option<WindowRecord> {
    let mut parts = line.split_whitespace();
    let id = parts.next()?;
    let desktop = parts.next()?;
    let class = parts.next()?;
    let _host = parts.next()?;
    let title = parts.collect::<Vec<_>>().join(" ");

    Some(WindowRecord::new(id, desktop, class, title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let line = "0x03000003  0 konsole.Konsole hostname bash — Konsole";
        let record = parse_line(line).unwrap();

        assert_eq!(record.id, "0x03000003");
        assert_eq!(record.desktop, "0");
        assert_eq!(record.class, "konsole.Konsole");
        assert_eq!(record.title, "bash — Konsole");
    }

    #[test]
    fn test_parse_line_without_title() {
        let line = "0x0400000a  1 plasmashell.plasmashell hostname";
        let record = parse_line(line).unwrap();

        assert_eq!(record.class, "plasmashell.plasmashell");
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_short_and_empty_lines_are_skipped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("0x01 0").is_none());
        assert!(parse_line("0x01 0 konsole.Konsole").is_none());
    }

    #[test]
    fn test_exclusion_filter() {
        let config = Arc::new(Config::default());
        let stdout = "0x01  0 konsole.Konsole host bash\n0x02 -1 yakuake.Yakuake host drop-down\n";

        let windows: Vec<WindowRecord> = stdout
            .lines()
            .filter_map(parse_line)
            .filter(|record| !config.is_class_excluded(&record.class))
            .collect();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].class, "konsole.Konsole");
    }
}
