use crate::error::GardenError;
use std::path::PathBuf;
use std::time::Duration;

/// Smallest terminal the flower box fits in
pub const MIN_COLS: u16 = 32;
pub const MIN_ROWS: u16 = 12;

/// A stem whose pre-move row is within one of this always blooms
/// (it leaves row 4 and opens on row 3)
pub const BLOOM_CEILING: i32 = 3;

/// Longest tick accepted from flags or settings
pub const MAX_TICK: Duration = Duration::from_secs(10);

/// Configuration for a flower box session
#[derive(Clone, Debug)]
pub struct GardenConfig {
    pub tick: Duration,
    pub seed: Option<u64>,
    pub side_margin: i32,
    pub bottom_margin: i32,
    pub auto_plant: bool,
    pub diagnostics: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            seed: None,
            side_margin: 7,
            bottom_margin: 3,
            auto_plant: false,
            diagnostics: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

/// Screen geometry shared by the growth rules, the placement gate and the box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub rows: i32,
    pub cols: i32,
    pub side_margin: i32,
    pub bottom_margin: i32,
}

impl Layout {
    pub fn new(cols: u16, rows: u16, side_margin: i32, bottom_margin: i32) -> Result<Self, GardenError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GardenError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }

        let layout = Self {
            rows: rows as i32,
            cols: cols as i32,
            side_margin,
            bottom_margin,
        };

        // The box lip sits three columns outside the walls, and there has to be
        // at least one plantable column and a few rows for stems to climb.
        let interior_cols = layout.cols - 2 * side_margin - 1;
        if side_margin < 3 || bottom_margin < 0 || interior_cols < 1 || layout.floor_row() <= BLOOM_CEILING + 1 {
            return Err(GardenError::Margins {
                side: side_margin,
                bottom: bottom_margin,
            });
        }

        Ok(layout)
    }

    /// Row where a falling seed lands and turns into a stem
    pub fn floor_row(&self) -> i32 {
        self.rows - self.bottom_margin - 4
    }

    /// Row used for bulk planting
    pub fn planting_row(&self) -> i32 {
        0
    }

    /// Plantable columns, strictly inside the side margins
    pub fn interior_cols(&self) -> std::ops::Range<i32> {
        self.side_margin + 1..self.cols - self.side_margin
    }

    /// Whether a seed may be dropped at (row, col)
    pub fn admits(&self, row: i32, col: i32) -> bool {
        self.interior_cols().contains(&col) && row >= 0 && row < self.floor_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_sits_above_the_box() {
        let layout = Layout::new(80, 24, 7, 3).unwrap();
        assert_eq!(layout.floor_row(), 17);
        assert_eq!(layout.interior_cols(), 8..73);
    }

    #[test]
    fn rejects_tiny_terminal() {
        assert!(matches!(
            Layout::new(31, 24, 7, 3),
            Err(GardenError::TerminalTooSmall { cols: 31, .. })
        ));
        assert!(matches!(
            Layout::new(80, 11, 7, 3),
            Err(GardenError::TerminalTooSmall { rows: 11, .. })
        ));
    }

    #[test]
    fn rejects_margins_without_room() {
        assert!(matches!(Layout::new(32, 12, 2, 3), Err(GardenError::Margins { .. })));
        assert!(matches!(Layout::new(32, 12, 16, 3), Err(GardenError::Margins { .. })));
        assert!(matches!(Layout::new(32, 12, 7, 8), Err(GardenError::Margins { .. })));
        assert!(Layout::new(32, 12, 7, 3).is_ok());
    }
}
