//! The decorative box seeds fall into, plus the status line

use crate::canvas::{colors, Canvas};
use crate::config::Layout;
use crossterm::style::Color;

const STATUS_WIDTH: usize = 24;

/// Draw the flower box and its instructions
pub fn draw_box(canvas: &mut Canvas, layout: &Layout) {
    let color = Some(colors::BOX);
    let (rows, cols) = (layout.rows, layout.cols);
    let side = layout.side_margin;
    let bottom = rows - layout.bottom_margin;

    // Floor
    for x in side..cols - side {
        canvas.set(x, bottom, '-', color, false);
    }

    // Slanted walls
    for i in 0..3 {
        canvas.set(side - i, bottom - i, '\\', color, false);
        canvas.set(cols - side + i, bottom - i, '/', color, false);
    }

    // Side lip
    for i in 3..5 {
        canvas.set(side - 3, bottom - i, '|', color, false);
        canvas.set(cols - side + 3, bottom - i, '|', color, false);
    }

    // Front and back lip
    for x in side - 2..cols - side + 3 {
        canvas.set(x, bottom - 4, '-', color, false);
        canvas.set(x, bottom - 3, '-', color, false);
    }

    canvas.set_str(cols / 2 - 8, bottom - 2, "Click to drop seed", color, false);
    canvas.set_str(cols / 2 - 7, bottom - 1, "F1-exit  F2-auto", color, false);
}

/// Show the live flower count on the last row, or blank it
pub fn draw_status(canvas: &mut Canvas, layout: &Layout, count: Option<usize>) {
    let row = layout.rows - 1;
    canvas.set_str(0, row, &" ".repeat(STATUS_WIDTH), None, false);
    if let Some(count) = count {
        canvas.set_str(0, row, &format!("flowers: {}", count), Some(Color::White), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(canvas: &Canvas, y: i32, from: i32, to: i32) -> String {
        (from..to).map(|x| canvas.get(x, y).ch).collect()
    }

    #[test]
    fn box_sits_on_the_bottom_margin() {
        let layout = Layout::new(40, 24, 7, 3).unwrap();
        let mut canvas = Canvas::new(40, 24);
        draw_box(&mut canvas, &layout);

        assert_eq!(row_text(&canvas, 21, 8, 33), "-".repeat(25));
        assert_eq!(canvas.get(7, 21).ch, '\\');
        assert_eq!(canvas.get(33, 21).ch, '/');
        assert_eq!(canvas.get(6, 20).ch, '\\');
        assert_eq!(canvas.get(34, 20).ch, '/');
        assert_eq!(canvas.get(4, 17).ch, '|');
        assert_eq!(canvas.get(36, 18).ch, '|');
        // The lip's top row is the floor seeds land on.
        assert_eq!(canvas.get(20, layout.floor_row()).ch, '-');
        assert_eq!(row_text(&canvas, 19, 12, 30), "Click to drop seed");
        assert_eq!(row_text(&canvas, 20, 13, 29), "F1-exit  F2-auto");
    }

    #[test]
    fn status_line_shows_and_clears() {
        let layout = Layout::new(40, 24, 7, 3).unwrap();
        let mut canvas = Canvas::new(40, 24);

        draw_status(&mut canvas, &layout, Some(12));
        assert_eq!(row_text(&canvas, 23, 0, 11), "flowers: 12");

        draw_status(&mut canvas, &layout, None);
        assert_eq!(row_text(&canvas, 23, 0, 11), " ".repeat(11));
    }
}
