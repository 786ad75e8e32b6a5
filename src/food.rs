use log::debug;
use rand::Rng;

use crate::collision::collides;
use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::snake::{Position, Snake};

/// Picks a free interior cell for food and marks it on the grid.
///
/// A uniform random draw inside the wall ring is tried first. On a hit the
/// candidate walks diagonally (x + 1, y + 1, each wrapping back to 1 at the
/// wall) for one full cycle of that walk. If the cycle never reaches a free
/// cell, the interior is scanned row by row. A board with no free interior
/// cell yields [`GameError::BoardFull`].
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    snake: &Snake,
) -> Result<Position, GameError> {
    let bounds = grid.bounds();
    let max_x = i32::from(bounds.width) - 2;
    let max_y = i32::from(bounds.height) - 2;
    if max_x < 1 || max_y < 1 {
        return Err(GameError::BoardFull);
    }

    let start = Position {
        x: rng.gen_range(1..=max_x),
        y: rng.gen_range(1..=max_y),
    };

    let food = match diagonal_walk(start, snake, grid) {
        Some(food) => food,
        None => {
            debug!("diagonal walk exhausted from {start:?}, scanning interior");
            scan_interior(snake, grid).ok_or(GameError::BoardFull)?
        }
    };

    grid.set(food, Cell::Food);
    Ok(food)
}

/// Walks from `start` along the wrapping diagonal until a free cell turns up
/// or the walk comes back to `start`.
fn diagonal_walk(start: Position, snake: &Snake, grid: &Grid) -> Option<Position> {
    let bounds = grid.bounds();
    let max_x = i32::from(bounds.width) - 2;
    let max_y = i32::from(bounds.height) - 2;
    let cycle = lcm(max_x as usize, max_y as usize);

    let mut candidate = start;
    for _ in 0..cycle {
        if !collides(candidate, snake, bounds) {
            return Some(candidate);
        }

        candidate.x += 1;
        if candidate.x > max_x {
            candidate.x = 1;
        }
        candidate.y += 1;
        if candidate.y > max_y {
            candidate.y = 1;
        }
    }

    None
}

fn scan_interior(snake: &Snake, grid: &Grid) -> Option<Position> {
    let bounds = grid.bounds();
    (1..i32::from(bounds.height) - 1)
        .flat_map(|y| (1..i32::from(bounds.width) - 1).map(move |x| Position { x, y }))
        .find(|position| !collides(*position, snake, bounds))
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
