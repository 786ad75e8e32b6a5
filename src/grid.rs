use crate::config::{GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE, GLYPH_WALL, GridSize};
use crate::snake::{Position, Snake};

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Wall,
    Empty,
    Snake,
    Food,
}

impl Cell {
    /// Character drawn for this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Wall => GLYPH_WALL,
            Self::Empty => GLYPH_EMPTY,
            Self::Snake => GLYPH_SNAKE,
            Self::Food => GLYPH_FOOD,
        }
    }
}

/// Row-major cell buffer for the whole board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    bounds: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty board with the wall ring painted.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let mut grid = Self {
            bounds,
            cells: vec![Cell::Empty; bounds.total_cells()],
        };
        grid.paint_walls();
        grid
    }

    fn paint_walls(&mut self) {
        let width = usize::from(self.bounds.width);
        let height = usize::from(self.bounds.height);
        if width == 0 || height == 0 {
            return;
        }

        // Corners get painted twice; harmless.
        self.cells[..width].fill(Cell::Wall);
        self.cells[(height - 1) * width..].fill(Cell::Wall);
        for row in self.cells.chunks_exact_mut(width) {
            row[0] = Cell::Wall;
            row[width - 1] = Cell::Wall;
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.bounds) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.bounds.width) + x)
    }

    /// Returns the cell at `position`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Overwrites one cell. Writes off the board are ignored.
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(index) = self.index(position) {
            self.cells[index] = cell;
        }
    }

    /// Turns every snake cell back into empty space; walls and food stay.
    pub fn clear_snake(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Snake {
                *cell = Cell::Empty;
            }
        }
    }

    /// Marks every live segment.
    pub fn stamp_snake(&mut self, snake: &Snake) {
        for segment in snake.segments() {
            self.set(*segment, Cell::Snake);
        }
    }

    /// Iterates over the board one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(usize::from(self.bounds.width).max(1))
    }
}
