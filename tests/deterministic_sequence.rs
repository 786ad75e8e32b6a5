use grid_snake::collision::DeathReason;
use grid_snake::config::GridSize;
use grid_snake::game::{GameState, StepOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};

fn move_food(state: &mut GameState, food: Position) {
    if let Some(old) = state.food {
        state.grid.set(old, Cell::Empty);
    }
    state.grid.set(food, Cell::Food);
    state.food = Some(food);
}

fn row(y: i32, xs: std::ops::RangeInclusive<i32>) -> Vec<Position> {
    xs.map(|x| Position { x, y }).collect()
}

#[test]
fn three_plain_steps_shift_the_whole_body() {
    let bounds = GridSize {
        width: 12,
        height: 10,
    };
    let mut state = GameState::new_with_seed(bounds, 42).expect("board is large enough");
    state.snake = Snake::from_segments(bounds, &row(5, 2..=6));
    move_food(&mut state, Position { x: 1, y: 1 });

    for _ in 0..3 {
        assert_eq!(state.step(), StepOutcome::Moved);
    }

    assert_eq!(state.snake.segments(), row(5, 5..=9).as_slice());
    assert_eq!(state.snake.tail(), Position { x: 5, y: 5 });
    assert_eq!(state.snake.head(), Position { x: 9, y: 5 });
    assert_eq!(state.snake.len(), 5);
}

#[test]
fn running_into_the_wall_ends_the_life_and_keeps_food() {
    let bounds = GridSize {
        width: 10,
        height: 10,
    };
    let mut state = GameState::new_with_seed(bounds, 7).expect("board is large enough");
    assert_eq!(state.snake.segments(), row(5, 2..=6).as_slice());
    move_food(&mut state, Position { x: 1, y: 1 });

    assert_eq!(state.step(), StepOutcome::Moved);
    assert_eq!(state.step(), StepOutcome::Moved);
    assert_eq!(state.snake.head(), Position { x: 8, y: 5 });

    let before = state.snake.clone();
    assert_eq!(
        state.step(),
        StepOutcome::Collided(DeathReason::WallCollision)
    );
    assert_eq!(state.food, Some(Position { x: 1, y: 1 }));
    assert_eq!(state.snake.segments(), before.segments());
}

#[test]
fn turning_into_the_left_wall_ends_the_life_and_keeps_food() {
    let bounds = GridSize {
        width: 10,
        height: 10,
    };
    let mut state = GameState::new_with_seed(bounds, 9).expect("board is large enough");
    move_food(&mut state, Position { x: 8, y: 8 });

    // Head starts at (6, 5); go up one row, then left along y = 4.
    state.set_direction(GameInput::Direction(Direction::Up));
    assert_eq!(state.step(), StepOutcome::Moved);
    state.set_direction(GameInput::Direction(Direction::Left));
    for _ in 0..5 {
        assert_eq!(state.step(), StepOutcome::Moved);
    }
    assert_eq!(state.snake.head(), Position { x: 1, y: 4 });

    let before = state.snake.clone();
    assert_eq!(
        state.step(),
        StepOutcome::Collided(DeathReason::WallCollision)
    );
    assert_eq!(state.food, Some(Position { x: 8, y: 8 }));
    assert_eq!(state.grid.cell(Position { x: 8, y: 8 }), Some(Cell::Food));
    assert_eq!(state.snake.segments(), before.segments());
}

#[test]
fn steering_then_eating_then_dying_then_restarting() {
    let bounds = GridSize {
        width: 10,
        height: 8,
    };
    let mut state = GameState::new_with_seed(bounds, 3).expect("board is large enough");
    move_food(&mut state, Position { x: 6, y: 3 });

    // Head starts at (6, 4) heading right; reversing is refused.
    state.set_direction(GameInput::Direction(Direction::Left));
    assert_eq!(state.direction, Direction::Right);

    state.set_direction(GameInput::Direction(Direction::Up));
    assert_eq!(state.advance().expect("no reset needed"), StepOutcome::Grew);
    assert_eq!(state.snake.len(), 6);
    assert_eq!(state.snake.head(), Position { x: 6, y: 3 });

    // Straight up into the top wall from y = 3 takes three ticks.
    let mut outcomes = Vec::new();
    while state.life == 1 {
        outcomes.push(state.advance().expect("reset succeeds"));
    }

    let Some(last) = outcomes.last() else {
        panic!("at least one tick ran");
    };
    assert!(!last.is_alive());
    assert_eq!(state.life, 2);
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.direction, Direction::Right);
}
