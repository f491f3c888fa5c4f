use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};
use tokio::sync::mpsc::UnboundedSender;

use snake_scores::game::Direction;

use crate::app::Key;

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }

    /// Redraws the frame line by line, clearing leftovers of the previous one.
    pub fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        for (y, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                style::Print(line),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
        }
        queue!(
            self.stdout,
            cursor::MoveTo(0, lines.len() as u16),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.stdout.flush()
    }
}

/// Blocks on terminal input and forwards keys until the receiver is gone or
/// reading fails. Meant to run on its own thread.
pub fn forward_keys(keys: UnboundedSender<Key>) {
    loop {
        // A read error ends the thread; the closed channel then quits the app
        let Ok(event) = event::read() else {
            return;
        };

        if let Event::Key(key_event) = event {
            if let Some(key) = translate(key_event) {
                if keys.send(key).is_err() {
                    return;
                }
            }
        }
    }
}

fn translate(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Esc => Key::Quit,
        KeyCode::Tab => Key::Tab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Arrow(Direction::Up),
        KeyCode::Down => Key::Arrow(Direction::Down),
        KeyCode::Left => Key::Arrow(Direction::Left),
        KeyCode::Right => Key::Arrow(Direction::Right),
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(key)
}
