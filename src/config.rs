use ratatui::style::Color;

use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
///
/// The outermost ring of cells is always wall; the playable interior is
/// `(width - 2) × (height - 2)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid, walls included.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the number of cells inside the wall ring.
    #[must_use]
    pub fn interior_cells(self) -> usize {
        usize::from(self.width.saturating_sub(2)) * usize::from(self.height.saturating_sub(2))
    }

    /// Rejects boards too small to hold the starting snake and one food cell.
    pub fn validate(self) -> Result<Self, GameError> {
        if self.width < MIN_GRID_WIDTH || self.height < MIN_GRID_HEIGHT {
            return Err(GameError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        Ok(self)
    }
}

impl From<(u16, u16)> for GridSize {
    /// Takes `(columns, rows)` as reported by the terminal.
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

/// Smallest width that fits the starting snake with a free cell beside it.
pub const MIN_GRID_WIDTH: u16 = 8;

/// Smallest height that leaves one interior row.
pub const MIN_GRID_HEIGHT: u16 = 3;

/// Segments in a freshly initialized snake.
pub const INITIAL_SNAKE_LEN: usize = 5;

/// Pause between ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 80;

pub const GLYPH_WALL: char = '#';
pub const GLYPH_EMPTY: char = ' ';
pub const GLYPH_SNAKE: char = '*';
pub const GLYPH_FOOD: char = '@';

pub const COLOR_WALL: Color = Color::DarkGray;
pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_FOOD: Color = Color::Red;
