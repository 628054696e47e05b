use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка D-Bus: {0}")]
    DBus(#[from] zbus::Error),

    #[error("Экземпляр уже запущен")]
    AlreadyRunning,

    #[error("Ошибка перечисления окон: {0}")]
    Enumeration(String),

    #[error("Ошибка активации окна: {0}")]
    Activation(String),
}

pub type Result<T> = std::result::Result<T, ShadowError>;
