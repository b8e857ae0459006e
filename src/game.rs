use std::{process::exit, thread::sleep, time::Duration};

use crate::config::Config;
use crate::geometry::{Direction::{self, *}, Point};
use crate::term::{Cell, TermManager};
use crate::world::World;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;

const SNAKE_CHAR: char = '█';
const APPLE_CHAR: char = 'O';

const HEAD_COLOR: Color = Color::Green;
const BODY_COLOR: Color = Color::Yellow;
const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const SCORE_LABEL_COLOR: Color = Color::Green;
const SCORE_NUMBER_COLOR: Color = Color::Red;

const GAME_OVER_HOLD_MS: u64 = 2000;

pub struct Game {
    config: Config,
    term: TermManager,
    world: World,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let grid_w = (config.screen_width / config.snake_size) as u16;
        let grid_h = (config.screen_height / config.snake_size) as u16;

        Game {
            term: TermManager::new(grid_w, grid_h),
            world: World::new(config),
            config,
        }
    }

    /// The main loop: sleep one tick, drain input, step the world,
    /// draw. Returns once the game-over screen has been shown.
    pub fn run(&mut self) {
        self.term.setup();
        let tick = Duration::from_millis(1000 / self.config.fps);

        while self.world.is_running() {
            sleep(tick);

            let mut dir_change: Option<Direction> = None;
            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => dir_change = Some(Up),
                        KeyCode::Char('a') | KeyCode::Left => dir_change = Some(Left),
                        KeyCode::Char('s') | KeyCode::Down => dir_change = Some(Down),
                        KeyCode::Char('d') | KeyCode::Right => dir_change = Some(Right),
                        KeyCode::Esc => self.clean_exit(),
                        _ => {}
                    },
                }
            }

            self.world.step(dir_change);

            if self.world.is_running() {
                self.render();
            }
        }

        self.game_over();
        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self) {
        self.term.begin_frame();

        for apple in self.world.apples().iter().filter(|a| a.active) {
            self.term.print_cell(self.to_cell(apple.pos), APPLE_CHAR, APPLE_COLOR);
        }

        for (i, seg) in self.world.snake().segments().iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            self.term.print_cell(self.to_cell(seg.pos), SNAKE_CHAR, color);
        }

        self.draw_score();
        self.term.flush();
    }

    fn draw_score(&mut self) {
        let grid_w = (self.config.screen_width / self.config.snake_size) as u16;
        let number = self.world.score().to_string();
        let x = grid_w.saturating_sub(8 + number.len() as u16);

        self.term.print_text((x, 0), "Score: ", SCORE_LABEL_COLOR);
        self.term.print_text((x + 7, 0), &number, SCORE_NUMBER_COLOR);
    }

    fn game_over(&mut self) {
        let score_line = format!("Score: {}", self.world.score());
        self.term.show_message(&["Game Over", &score_line], Color::White);
        sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
    }

    fn clean_exit(&mut self) -> ! {
        self.term.restore();
        exit(0);
    }

    /// Pixel position to terminal cell, one cell per body-cell size.
    fn to_cell(&self, pos: Point) -> Cell {
        let x = (pos.x.max(0.0) / self.config.snake_size) as u16;
        let y = (pos.y.max(0.0) / self.config.snake_size) as u16;
        (x, y)
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
