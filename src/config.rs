use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    pub control: ControlConfig,
    // Оптимизационный индекс - не сериализуется, строится после загрузки
    #[serde(skip)]
    excluded_set: HashSet<String>, // O(1) lookup для исключённых классов
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    /// WM-классы, которые перечислитель окон никогда не показывает
    pub excluded_classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControlConfig {
    /// Имя сервиса на сессионной шине; владение именем заодно даёт
    /// взаимное исключение экземпляров
    pub service_name: String,
    pub object_path: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                filter: "shadow_rust=info".to_string(),
            },
            window: WindowConfig {
                excluded_classes: vec![
                    "yakuake.Yakuake".to_string(),
                    "explorer.exe.Wine".to_string(),
                ],
            },
            control: ControlConfig {
                service_name: "org.shadow.QtDBus.Control".to_string(),
                object_path: "/".to_string(),
            },
            excluded_set: HashSet::new(),
        };
        config.build_optimization_indexes();
        config
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(figment::providers::Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SHADOW_"));

        let mut config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;
        config.build_optimization_indexes();

        Ok(config)
    }

    /// Строит оптимизационный индекс для быстрой проверки исключений
    pub fn build_optimization_indexes(&mut self) {
        self.excluded_set = self.window.excluded_classes.iter().cloned().collect();
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Валидация настроек D-Bus
        if self.control.service_name.is_empty() {
            anyhow::bail!("control.service_name не может быть пустым");
        }

        if !self.control.object_path.starts_with('/') {
            anyhow::bail!(
                "control.object_path должен начинаться с '/': {}",
                self.control.object_path
            );
        }

        Ok(())
    }

    /// Проверить, исключён ли WM-класс из перечисления (точное совпадение)
    pub fn is_class_excluded(&self, class: &str) -> bool {
        self.excluded_set.contains(class)
    }
}
