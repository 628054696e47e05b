use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

mod config;
mod core;
mod error;
mod events;
mod services;

use crate::core::{RenderModel, Session, Step};
use config::Config;
use error::ShadowError;
use services::{create_surface, create_window_activator, create_window_enumerator};

#[derive(Parser, Debug)]
#[command(name = "shadow-rust")]
#[command(about = "Оверлей для переключения окон с нечётким поиском")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "shadow.toml")]
    config: String,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Инициализация системы логирования
    init_tracing(&args.log_level)?;

    info!("Запуск Shadow Rust v{}", env!("CARGO_PKG_VERSION"));

    // Загрузка конфигурации
    let config = Arc::new(Config::load(&args.config)?);
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    // Единая точка диспетчеризации: все события ввода (клавиатура и
    // D-Bus) идут через один канал в один цикл
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Взаимное исключение экземпляров: владение именем на шине.
    // Второй запуск пересылает Next работающему экземпляру и выходит.
    let _control = match services::control::register(&config, tx.clone()).await {
        Ok(conn) => Some(conn),
        Err(ShadowError::AlreadyRunning) => {
            info!("Экземпляр уже запущен, пересылаем Next и выходим");
            services::control::forward_next(&config).await?;
            return Ok(());
        }
        Err(e) if args.dry_run => {
            // В dry-run сессионная шина не обязательна
            warn!("D-Bus недоступен в dry-run: {}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    // Каталог окон снимается один раз на сеанс; ошибка перечисления
    // поглощается как пустой каталог
    let enumerator = create_window_enumerator(config.clone(), args.dry_run);
    let catalog = match enumerator.list_windows().await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Перечисление окон не удалось, каталог пуст: {}", e);
            Vec::new()
        }
    };
    info!("Каталог содержит {} окон", catalog.len());

    let activator = create_window_activator(args.dry_run);
    let mut surface = create_surface(args.dry_run)?;
    surface.start_input(tx)?;

    let mut session = Session::new(catalog);
    surface.render(&RenderModel::for_session(&session))?;

    // Цикл сеанса: синхронные переходы, никакой конкурентной мутации
    while let Some(event) = rx.recv().await {
        match session.apply(event) {
            Step::Continue => {
                surface.render(&RenderModel::for_session(&session))?;
            }
            Step::Activate(record) => {
                // Fire-and-forget: сеанс завершается независимо от исхода
                if let Err(e) = activator.activate(&record).await {
                    warn!("Активация не удалась: {}", e);
                }
                break;
            }
            Step::Cancelled => {
                info!("Сеанс отменён");
                break;
            }
        }
    }

    info!("Shadow Rust завершил работу");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    Ok(())
}
