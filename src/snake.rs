use std::mem;

use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Marks one past the last live segment. `(0, 0)` is a wall corner, so no
    /// live segment can ever hold it.
    pub const SENTINEL: Self = Self { x: 0, y: 0 };

    /// Returns true when both coordinates are zero.
    #[must_use]
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one cell towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body stored in a fixed-capacity arena.
///
/// Segments run tail (index 0) to head (index `len - 1`). The slot at `len`
/// always holds [`Position::SENTINEL`], so the length can be recovered by
/// scanning, but it is also tracked directly to keep each tick O(1) on
/// lookup.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Box<[Position]>,
    len: usize,
}

impl Snake {
    /// Creates the starting snake: five cells on the middle row, from
    /// `width / 4` rightwards, head last.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        let x0 = i32::from(bounds.width / 4);
        let y = i32::from(bounds.height / 2);
        let body: Vec<Position> = (0..INITIAL_SNAKE_LEN as i32)
            .map(|i| Position { x: x0 + i, y })
            .collect();

        Self::from_segments(bounds, &body)
    }

    /// Creates a snake from explicit segments ordered tail to head.
    ///
    /// Segments beyond the arena capacity are dropped.
    #[must_use]
    pub fn from_segments(bounds: GridSize, body: &[Position]) -> Self {
        // One extra slot so a board-filling snake still has room for its sentinel.
        let capacity = bounds.total_cells() + 1;
        let mut segments = vec![Position::SENTINEL; capacity].into_boxed_slice();

        let len = body.len().min(capacity - 1);
        segments[..len].copy_from_slice(&body[..len]);
        debug_assert!(segments[..len].iter().all(|segment| !segment.is_sentinel()));

        Self { segments, len }
    }

    /// Counts live segments by scanning for the first sentinel.
    #[must_use]
    pub fn scan_len(&self) -> usize {
        self.segments
            .iter()
            .position(|segment| segment.is_sentinel())
            .unwrap_or(self.segments.len())
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the arena size, sentinel slot included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.segments.len()
    }

    /// Returns the current head position, or the sentinel for an empty snake.
    #[must_use]
    pub fn head(&self) -> Position {
        self.segments[self.len.saturating_sub(1)]
    }

    /// Returns the current tail position, or the sentinel for an empty snake.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.segments[0]
    }

    /// Live segments from tail to head.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments[..self.len]
    }

    /// Returns true if any live segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments().contains(&position)
    }

    /// Moves the head to `next_head` and shifts every other segment into the
    /// slot of the one ahead of it. The old tail cell is vacated.
    pub(crate) fn slide_to(&mut self, next_head: Position) {
        let Some(head_index) = self.len.checked_sub(1) else {
            return;
        };

        let mut prev = mem::replace(&mut self.segments[head_index], next_head);
        for segment in self.segments[..head_index].iter_mut().rev() {
            prev = mem::replace(segment, prev);
        }
    }

    /// Appends `next_head` in front of the current head, keeping every
    /// existing segment in place. Length grows by one.
    pub(crate) fn extend_to(&mut self, next_head: Position) {
        debug_assert!(self.len + 1 < self.segments.len());
        if self.len + 1 >= self.segments.len() {
            return;
        }

        self.segments[self.len] = next_head;
        self.len += 1;
        debug_assert!(self.segments[self.len].is_sentinel());
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 10,
    };

    #[test]
    fn initial_snake_sits_on_middle_row() {
        let snake = Snake::initial(BOUNDS);

        assert_eq!(snake.len(), 5);
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
        assert_eq!(snake.head(), Position { x: 9, y: 5 });
    }

    #[test]
    fn sentinel_scan_agrees_with_tracked_length() {
        let mut snake = Snake::initial(BOUNDS);
        assert_eq!(snake.scan_len(), snake.len());

        snake.extend_to(Position { x: 10, y: 5 });
        assert_eq!(snake.scan_len(), 6);
        assert_eq!(snake.len(), 6);

        snake.slide_to(Position { x: 11, y: 5 });
        assert_eq!(snake.scan_len(), 6);
    }

    #[test]
    fn only_origin_is_sentinel() {
        assert!(Position { x: 0, y: 0 }.is_sentinel());
        assert!(!Position { x: 0, y: 1 }.is_sentinel());
        assert!(!Position { x: 1, y: 0 }.is_sentinel());
    }

    #[test]
    fn slide_moves_each_segment_into_the_one_ahead() {
        let mut snake = Snake::from_segments(
            BOUNDS,
            &[
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
            ],
        );

        snake.slide_to(Position { x: 3, y: 4 });

        assert_eq!(
            snake.segments(),
            &[
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 4 },
            ]
        );
    }

    #[test]
    fn extend_keeps_the_tail() {
        let mut snake = Snake::initial(BOUNDS);
        let tail = snake.tail();

        snake.extend_to(Position { x: 10, y: 5 });

        assert_eq!(snake.tail(), tail);
        assert_eq!(snake.head(), Position { x: 10, y: 5 });
    }

    #[test]
    fn capacity_reserves_room_for_sentinel() {
        let snake = Snake::initial(BOUNDS);
        assert_eq!(snake.capacity(), BOUNDS.total_cells() + 1);
    }
}
