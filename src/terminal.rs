use crate::canvas::Canvas;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

/// User requests the flower box reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Plant { row: i32, col: i32 },
    BulkPlant,
    ToggleDiagnostics,
    Help,
    Exit,
}

/// Map a terminal event to a command, if it means anything to us
pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Command::Plant {
            row: *row as i32,
            col: *column as i32,
        }),
        Event::Key(KeyEvent { code, modifiers, kind, .. }) if *kind != KeyEventKind::Release => match code {
            KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => Some(Command::Exit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Exit),
            KeyCode::F(2) => Some(Command::BulkPlant),
            KeyCode::F(3) => Some(Command::ToggleDiagnostics),
            KeyCode::Char('?') => Some(Command::Help),
            _ => None,
        },
        _ => None,
    }
}

/// Terminal abstraction for rendering
///
/// Drawing goes into a back buffer; `present` writes only the cells that
/// changed since the previous frame.
pub struct Terminal {
    canvas: Canvas,
    shown: Canvas,
}

impl Terminal {
    /// Take over the terminal: raw mode, alternate screen, mouse capture
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, EnableMouseCapture, Clear(ClearType::All))?;

        Ok(Self {
            canvas: Canvas::new(width, height),
            shown: Canvas::new(width, height),
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        self.canvas.size()
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Flush changed cells to the screen
    pub fn present(&mut self) -> io::Result<()> {
        let mut out = stdout();
        for ((x, y, cell), (_, _, old)) in self.canvas.cells().zip(self.shown.cells()) {
            if cell != old {
                queue!(out, MoveTo(x, y))?;
                draw(&mut out, cell)?;
            }
        }
        out.flush()?;
        self.shown = self.canvas.clone();
        Ok(())
    }

    /// Redraw the whole back buffer, e.g. after an overlay covered it
    pub fn render(&mut self) -> io::Result<()> {
        let mut out = stdout();
        for (x, y, cell) in self.canvas.cells() {
            queue!(out, MoveTo(x, y))?;
            draw(&mut out, cell)?;
        }
        out.flush()?;
        self.shown = self.canvas.clone();
        Ok(())
    }

    /// Wait up to `timeout` for an event that maps to a command
    pub fn poll_command(&self, timeout: Duration) -> io::Result<Option<Command>> {
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let left = time_left(deadline, timeout);
            if !poll(left)? {
                return Ok(None);
            }
            if let Some(command) = command_for(&read()?) {
                return Ok(Some(command));
            }
            if left.is_zero() {
                return Ok(None);
            }
        }
    }

    /// Wait for a keypress with timeout
    pub fn wait_key(&self, timeout_ms: u64) -> io::Result<Option<KeyCode>> {
        if poll(Duration::from_millis(timeout_ms))? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some(key_event.code));
                }
            }
        }
        Ok(None)
    }
}

/// Time until `deadline`; an unrepresentable deadline waits the full timeout
fn time_left(deadline: Option<Instant>, timeout: Duration) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(Instant::now()),
        None => timeout,
    }
}

fn draw(out: &mut impl Write, cell: &crate::canvas::Cell) -> io::Result<()> {
    if cell.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }

    if let Some(color) = cell.fg {
        queue!(out, SetForegroundColor(color), Print(cell.ch), ResetColor)?;
    } else {
        queue!(out, Print(cell.ch))?;
    }

    if cell.bold {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
