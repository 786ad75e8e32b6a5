use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::config::{COLOR_FOOD, COLOR_SNAKE, COLOR_WALL};
use crate::game::GameState;
use crate::grid::{Cell, Grid};

/// Draws the board into the frame, anchored at the top-left corner.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    blit(&state.grid, frame.buffer_mut(), area);
}

/// Copies the grid row by row into `buffer`, clipped to `area`.
pub fn blit(grid: &Grid, buffer: &mut Buffer, area: Rect) {
    let area = area.intersection(buffer.area);

    for (row, y) in grid.rows().zip(area.top()..area.bottom()) {
        for (cell, x) in row.iter().zip(area.left()..area.right()) {
            let mut glyph = [0; 4];
            buffer.set_string(x, y, cell.glyph().encode_utf8(&mut glyph), cell_style(*cell));
        }
    }
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Wall => Style::new().fg(COLOR_WALL),
        Cell::Empty => Style::new(),
        Cell::Snake => Style::new().fg(COLOR_SNAKE),
        Cell::Food => Style::new().fg(COLOR_FOOD),
    }
}
