use crate::apple::Apple;
use crate::config::Config;
use crate::geometry::{in_bounds, squares_overlap, Direction, Point};
use crate::snake::Snake;

use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    GameOver,
}

/// The whole game state plus its per-tick transition. Knows nothing
/// about the terminal, so every rule is testable headlessly.
pub struct World {
    config: Config,
    snake: Snake,
    apples: Vec<Apple>,
    score: u32,
    state: RunState,
}

impl World {
    pub fn new(config: Config) -> Self {
        let center = Point::new(config.screen_width / 2.0, config.screen_height / 2.0);
        let mut rng = rand::thread_rng();
        let apple = Apple::new(Point::new(
            rng.gen_range(0.0..=config.screen_width - config.apple_size),
            rng.gen_range(0.0..=config.screen_height - config.apple_size),
        ));

        World {
            snake: Snake::new(center, config.separation),
            apples: vec![apple],
            score: 0,
            state: RunState::Running,
            config,
        }
    }

    /// One tick: apply the pending direction, move, then run the
    /// boundary, self-collision and apple checks. Stepping a finished
    /// world does nothing.
    pub fn step(&mut self, dir: Option<Direction>) {
        if self.state == RunState::GameOver {
            return;
        }

        if let Some(dir) = dir {
            self.snake.set_direction(dir);
        }

        self.snake.move_step(self.config.step_px());

        let head = self.snake.head().pos;
        if !in_bounds(head, self.config.screen_width, self.config.screen_height)
            || self.snake.self_collision(self.config.snake_size)
        {
            self.state = RunState::GameOver;
            return;
        }

        for apple in self.apples.iter_mut().filter(|a| a.active) {
            if squares_overlap(head, self.config.snake_size, apple.pos, self.config.apple_size) {
                apple.active = false;
                self.snake.grow(self.config.snake_size);
                self.score += self.config.apple_reward;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apples(&self) -> &[Apple] {
        &self.apples
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
