use crate::core::render::{HlChar, RenderModel};
use crate::error::Result;
use crate::events::InputEvent;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::keymap;
use super::r#trait::Surface;

/// Цвета оригинального оверлея
const SELECTED_COLOR: Color = Color::Rgb {
    r: 35,
    g: 157,
    b: 201,
};
const HIGHLIGHT_COLOR: Color = Color::Rgb {
    r: 143,
    g: 116,
    b: 56,
};

pub struct TerminalSurface {
    stdout: io::Stdout,
}

impl TerminalSurface {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    fn print_highlighted(&mut self, chars: &[HlChar], bold: bool) -> Result<()> {
        for hl in chars {
            if hl.hit {
                queue!(
                    self.stdout,
                    PrintStyledContent(hl.ch.to_string().with(HIGHLIGHT_COLOR).bold())
                )?;
            } else if bold {
                queue!(self.stdout, PrintStyledContent(hl.ch.to_string().bold()))?;
            } else {
                queue!(self.stdout, Print(hl.ch))?;
            }
        }
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn start_input(&mut self, tx: UnboundedSender<InputEvent>) -> Result<()> {
        // event::read() блокирует, поэтому клавиатуру читает отдельный
        // поток; завершается, когда приёмник канала закрыт
        std::thread::spawn(move || input_loop(tx));
        Ok(())
    }

    fn render(&mut self, model: &RenderModel) -> Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(format!("# {}", model.query))
        )?;

        for (i, row) in model.rows.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, (i + 2) as u16))?;

            let slot = row
                .slot
                .map(|n| n.to_string())
                .unwrap_or_else(|| " ".to_string());
            if row.selected {
                queue!(
                    self.stdout,
                    PrintStyledContent(format!("> {}", slot).with(SELECTED_COLOR).bold())
                )?;
            } else {
                queue!(self.stdout, Print(format!("  {}", slot)))?;
            }

            queue!(self.stdout, Print(format!(" [{}] ", row.desktop)))?;
            self.print_highlighted(&row.class, true)?;
            queue!(self.stdout, Print("   "))?;
            self.print_highlighted(&row.title, false)?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Терминал восстанавливаем в любом случае, даже после ошибки
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.stdout, LeaveAlternateScreen, cursor::Show);
    }
}

fn input_loop(tx: UnboundedSender<InputEvent>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                warn!("Ошибка чтения событий терминала: {}", e);
                break;
            }
        };

        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = keymap::map_key(&key) {
                if tx.send(input).is_err() {
                    debug!("Сеанс завершён, поток ввода останавливается");
                    break;
                }
            }
        }
    }
}
