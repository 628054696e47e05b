//! Single-instance coordination over the D-Bus session bus.
//!
//! The primary instance claims the well-known service name and serves the
//! `nextItem` method; owning the name doubles as the mutual-exclusion lock.
//! A second launch finds the name taken, forwards one `nextItem` call to
//! the running instance and exits without building any session state.

use crate::config::Config;
use crate::error::{Result, ShadowError};
use crate::events::InputEvent;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};
use zbus::{connection, interface, Connection};

const CONTROL_INTERFACE: &str = "org.shadow.Control";

pub struct ControlInterface {
    tx: UnboundedSender<InputEvent>,
}

impl ControlInterface {
    pub fn new(tx: UnboundedSender<InputEvent>) -> Self {
        Self { tx }
    }
}

#[interface(name = "org.shadow.Control")]
impl ControlInterface {
    /// Удалённая команда "следующий кандидат" от второго экземпляра.
    /// Дубликаты безвредны: лишний вызов лишь сдвигает курсор ещё раз.
    #[zbus(name = "nextItem")]
    async fn next_item(&self) {
        debug!("nextItem получен по D-Bus");
        let _ = self.tx.send(InputEvent::Next);
    }
}

/// Занять имя сервиса и опубликовать интерфейс управления.
/// Возвращает `AlreadyRunning`, если имя уже занято другим экземпляром.
pub async fn register(config: &Config, tx: UnboundedSender<InputEvent>) -> Result<Connection> {
    let builder = connection::Builder::session()?
        .name(config.control.service_name.clone())?
        .serve_at(
            config.control.object_path.clone(),
            ControlInterface::new(tx),
        )?;

    match builder.build().await {
        Ok(conn) => {
            info!(
                "Сервис {} зарегистрирован на сессионной шине",
                config.control.service_name
            );
            Ok(conn)
        }
        Err(zbus::Error::NameTaken) => Err(ShadowError::AlreadyRunning),
        Err(e) => Err(e.into()),
    }
}

/// Переслать одну команду Next уже работающему экземпляру.
pub async fn forward_next(config: &Config) -> Result<()> {
    let conn = Connection::session().await?;
    let proxy = zbus::Proxy::new(
        &conn,
        config.control.service_name.clone(),
        config.control.object_path.clone(),
        CONTROL_INTERFACE,
    )
    .await?;

    let _: () = proxy.call("nextItem", &()).await?;
    info!("nextItem переслан работающему экземпляру");
    Ok(())
}
