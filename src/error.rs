use std::io;

use thiserror::Error;

/// Failures that end a run instead of a single life.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal of {width}x{height} is too small for the board")]
    BoardTooSmall { width: u16, height: u16 },

    /// No interior cell is left for food.
    #[error("no free cell left for food")]
    BoardFull,

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
