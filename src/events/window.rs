use serde::{Deserialize, Serialize};
use std::fmt;

/// Запись об окне из перечислителя окон.
///
/// Неизменяема после перечисления; один сеанс держит упорядоченный
/// список таких записей (порядок источника сохраняется).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: String,
    pub desktop: String,
    pub class: String,
    pub title: String,
}

impl WindowRecord {
    pub fn new(
        id: impl Into<String>,
        desktop: impl Into<String>,
        class: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            desktop: desktop.into(),
            class: class.into(),
            title: title.into(),
        }
    }

    /// Короткое имя класса для отображения: вторая компонента WM-класса
    /// ("konsole.Konsole" -> "Konsole"). Без точки возвращается весь класс.
    pub fn short_class(&self) -> &str {
        self.class.split('.').nth(1).unwrap_or(&self.class)
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] \"{}\" ({})", self.desktop, self.title, self.class)
    }
}
