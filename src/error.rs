use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the flower box before or while it runs
#[derive(Debug, Error)]
pub enum GardenError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("your terminal is too small ({cols}x{rows}, min {min_cols}x{min_rows})")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("margins leave no room to grow (side {side}, bottom {bottom})")]
    Margins { side: i32, bottom: i32 },

    #[error("could not read settings from {path}: {reason}")]
    Settings { path: PathBuf, reason: String },
}
