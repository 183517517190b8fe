use crossterm::style::Color;

/// A single cell in the back buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bold: bool) -> Self {
        Self {
            ch,
            fg: Some(fg),
            bold,
        }
    }
}

/// Character cells the growth engine draws into, addressed by (row, col).
///
/// Writes outside the surface are dropped and reads outside it return a
/// blank cell, so callers never have to clip themselves.
pub trait Surface {
    fn write_cell(&mut self, row: i32, col: i32, cell: Cell);
    fn read_cell(&self, row: i32, col: i32) -> Cell;
}

/// In-memory screen buffer
#[derive(Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Get dimensions as (width, height)
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, fg, bold };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Iterate over every cell with its (x, y) position
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }
}

impl Surface for Canvas {
    fn write_cell(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    fn read_cell(&self, row: i32, col: i32) -> Cell {
        self.get(col, row)
    }
}

/// Colors used by the flower box
pub mod colors {
    use crossterm::style::Color;

    pub const BOX: Color = Color::DarkYellow;
    pub const SEED: Color = Color::Yellow;
    pub const STEM: Color = Color::DarkGreen;
    pub const LEAF: Color = Color::Green;
    pub const BLOOM_CENTER: Color = Color::Yellow;
    pub const BLOOMS: [Color; 3] = [Color::Red, Color::Magenta, Color::White];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_are_clipped() {
        let mut canvas = Canvas::new(4, 3);
        canvas.write_cell(-1, 0, Cell::new('x', Color::Red, false));
        canvas.write_cell(0, 4, Cell::new('x', Color::Red, false));
        canvas.write_cell(3, 0, Cell::new('x', Color::Red, false));
        assert!(canvas.cells().all(|(_, _, c)| *c == Cell::default()));
    }

    #[test]
    fn read_outside_is_blank() {
        let canvas = Canvas::new(2, 2);
        assert_eq!(canvas.read_cell(-5, 1), Cell::default());
        assert_eq!(canvas.read_cell(1, 9), Cell::default());
    }

    #[test]
    fn surface_uses_row_then_column() {
        let mut canvas = Canvas::new(10, 5);
        let cell = Cell::new('#', Color::Blue, true);
        canvas.write_cell(3, 7, cell);
        assert_eq!(canvas.get(7, 3), cell);
        assert_eq!(canvas.read_cell(3, 7), cell);
    }

    #[test]
    fn set_str_runs_left_to_right() {
        let mut canvas = Canvas::new(10, 1);
        canvas.set_str(2, 0, "abc", None, false);
        assert_eq!(canvas.get(2, 0).ch, 'a');
        assert_eq!(canvas.get(4, 0).ch, 'c');
        assert_eq!(canvas.get(5, 0).ch, ' ');
    }
}
