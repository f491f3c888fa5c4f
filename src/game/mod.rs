//! Grid engine of the snake game.
//!
//! The engine has no notion of time: the caller invokes [`Game::tick`] once
//! every [`TICK_INTERVAL`]. Randomness is injected so that tests can use a
//! seeded generator.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

use crate::score::GameScore;

mod player;
mod position;

pub use player::{PlayerName, MAX_PLAYER_NAME_LEN};
pub use position::{Direction, Position};

/// Width and height of the square grid.
pub const GRID_SIZE: i32 = 20;
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
/// Points awarded per food eaten.
pub const FOOD_SCORE: GameScore = 10;

const INITIAL_HEAD: Position = Position::new(10, 10);
const INITIAL_FOOD: Position = Position::new(15, 15);
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Never started.
    Idle,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed.
    Idle,
    Moved,
    Ate,
    /// The snake hit a wall or itself. Reported once per game.
    GameOver { score: GameScore },
}

#[derive(Clone, Debug)]
pub struct Game {
    /// Head first.
    snake: VecDeque<Position>,
    food: Position,
    direction: Direction,
    score: GameScore,
    status: Status,
}

impl Game {
    pub fn new() -> Self {
        Self {
            snake: VecDeque::from(vec![INITIAL_HEAD]),
            food: INITIAL_FOOD,
            direction: INITIAL_DIRECTION,
            score: 0,
            status: Status::Idle,
        }
    }

    /// Starts a fresh game, discarding any game in progress.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new();
        self.food = random_cell(rng);
        self.status = Status::Playing;
    }

    /// Requests a new direction of travel. Turns along the axis the snake
    /// is already travelling on are ignored, so it can never reverse.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !self.is_playing() || direction.is_parallel(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Idle;
        }

        let new_head = self.head().step(self.direction);

        // The tail has not moved yet, so stepping onto it is a collision too
        if !new_head.is_on_grid() || self.snake.contains(&new_head) {
            self.status = Status::GameOver;
            return TickOutcome::GameOver { score: self.score };
        }

        self.snake.push_front(new_head);

        if new_head == self.food {
            // Respawn anywhere, even under the snake
            self.food = random_cell(rng);
            self.score += FOOD_SCORE;
            return TickOutcome::Ate;
        }

        self.snake.pop_back();
        TickOutcome::Moved
    }

    pub fn snake(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> GameScore {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE))
}
