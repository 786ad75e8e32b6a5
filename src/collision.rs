use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Why a snake's run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Returns true when `point` lies on the wall ring or off the board.
#[must_use]
pub fn is_wall(point: Position, bounds: GridSize) -> bool {
    point.x <= 0
        || point.y <= 0
        || point.x >= i32::from(bounds.width) - 1
        || point.y >= i32::from(bounds.height) - 1
}

/// Classifies what `point` would hit. Walls take precedence over the body.
///
/// Every live segment is compared, the tail included, even though the tail
/// is about to move away on a plain step.
#[must_use]
pub fn collision(point: Position, snake: &Snake, bounds: GridSize) -> Option<DeathReason> {
    if is_wall(point, bounds) {
        return Some(DeathReason::WallCollision);
    }

    if snake.occupies(point) {
        return Some(DeathReason::SelfCollision);
    }

    None
}

/// Returns true when `point` hits a wall or any live segment.
#[must_use]
pub fn collides(point: Position, snake: &Snake, bounds: GridSize) -> bool {
    collision(point, snake, bounds).is_some()
}
