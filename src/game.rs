use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{DeathReason, collision};
use crate::config::GridSize;
use crate::error::GameError;
use crate::food::place_food;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Heading every life starts with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Moved,
    /// Ate food and grew by one segment; new food is on the board.
    Grew,
    /// Ate the last food and left no free interior cell.
    Filled,
    Collided(DeathReason),
}

impl StepOutcome {
    /// Returns true when the current life continues.
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Moved | Self::Grew)
    }
}

/// Complete mutable game state for one run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Option<Position>,
    pub direction: Direction,
    pub tick_count: u64,
    /// Lives started so far, the current one included.
    pub life: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    pub fn new(bounds: GridSize) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Result<Self, GameError> {
        let bounds = bounds.validate()?;
        let mut state = Self {
            grid: Grid::new(bounds),
            snake: Snake::initial(bounds),
            food: None,
            direction: INITIAL_DIRECTION,
            tick_count: 0,
            life: 0,
            bounds,
            rng,
        };
        state.reset()?;
        Ok(state)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Starts a fresh life: new walls, starting snake, heading and food.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.grid = Grid::new(self.bounds);
        self.snake = Snake::initial(self.bounds);
        self.direction = INITIAL_DIRECTION;
        self.food = Some(place_food(&mut self.rng, &mut self.grid, &self.snake)?);
        self.life += 1;
        self.redraw();

        info!("life {} started", self.life);
        Ok(())
    }

    /// Adopts a steering input unless it reverses the current heading.
    /// Non-directional input is ignored.
    pub fn set_direction(&mut self, input: GameInput) {
        let GameInput::Direction(requested) = input else {
            return;
        };

        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }
    }

    /// Moves the snake one cell along the current heading.
    ///
    /// The next head is checked against the snake as it stands before moving.
    /// On collision nothing is mutated.
    pub fn step(&mut self) -> StepOutcome {
        self.tick_count += 1;

        let next_head = self.snake.head().step(self.direction);
        if let Some(reason) = collision(next_head, &self.snake, self.bounds) {
            return StepOutcome::Collided(reason);
        }

        if self.food != Some(next_head) {
            self.snake.slide_to(next_head);
            return StepOutcome::Moved;
        }

        // Growth keeps the tail in place instead of shifting the body.
        self.snake.extend_to(next_head);
        self.grid.set(next_head, Cell::Empty);

        match place_food(&mut self.rng, &mut self.grid, &self.snake) {
            Ok(food) => {
                self.food = Some(food);
                StepOutcome::Grew
            }
            Err(error) => {
                warn!("{error} after {} segments", self.snake.len());
                self.food = None;
                StepOutcome::Filled
            }
        }
    }

    /// Steps once and starts a new life when the current one ends.
    pub fn advance(&mut self) -> Result<StepOutcome, GameError> {
        let outcome = self.step();
        if !outcome.is_alive() {
            debug!(
                "life {} ended at tick {} with {} segments: {outcome:?}",
                self.life,
                self.tick_count,
                self.snake.len()
            );
            self.reset()?;
        }

        Ok(outcome)
    }

    /// Re-stamps the snake onto the grid after clearing its previous cells.
    pub fn redraw(&mut self) {
        self.grid.clear_snake();
        self.grid.stamp_snake(&self.snake);
    }
}
