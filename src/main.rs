mod apple;
mod config;
mod game;
mod geometry;
mod snake;
mod term;
mod world;

/// Game logic lives in pixel coordinates; the terminal layer quantizes
/// them to character cells only when drawing.
pub type Px = f32;

fn main() {
    let config = config::Config::default();
    let mut game = game::Game::new(config);

    // Runs until the snake dies or the player quits with Esc/CTRL+C
    game.run();
}
