use crate::terminal::Terminal;
use crossterm::cursor::MoveTo;
use crossterm::event::KeyCode;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, stdout, Write};

/// Overlay the key help on top of the box until `?` closes it.
///
/// The back buffer is left alone, so closing just repaints it. Returns true
/// when a quit key was pressed instead.
pub fn show_help_modal(term: &mut Terminal, text: &str) -> io::Result<bool> {
    let (width, height) = term.size();
    draw_panel(width, height, &panel_lines(text))?;

    loop {
        match term.wait_key(50)? {
            Some(KeyCode::Char('?')) => break,
            Some(KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1)) => return Ok(true),
            _ => {}
        }
    }

    term.render()?;
    Ok(false)
}

/// The help text framed in a box, one string per screen row
fn panel_lines(text: &str) -> Vec<String> {
    let inner = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let rule = "─".repeat(inner);

    let mut rows = vec![format!("┌{}┐", rule)];
    rows.extend(text.lines().map(|line| format!("│ {:<w$} │", line, w = inner - 2)));
    rows.push(format!("└{}┘", rule));
    rows
}

/// Top-left corner that centers a `cols` x `rows` panel, pinned at 0,0 when it does not fit
fn panel_origin(width: u16, height: u16, cols: usize, rows: usize) -> (u16, u16) {
    let x = (width as usize).saturating_sub(cols) / 2;
    let y = (height as usize).saturating_sub(rows) / 2;
    (x as u16, y as u16)
}

fn draw_panel(width: u16, height: u16, rows: &[String]) -> io::Result<()> {
    let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let (x, y) = panel_origin(width, height, cols, rows.len());

    let mut out = stdout();
    queue!(out, SetForegroundColor(Color::White))?;
    for (dy, row) in rows.iter().enumerate() {
        queue!(out, MoveTo(x, y.saturating_add(dy as u16)), Print(row))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}
