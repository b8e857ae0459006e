use crate::Px;

/// Fixed game parameters, built once in `main` and passed down to the
/// world and the renderer.
#[derive(Copy, Clone)]
pub struct Config {
    pub screen_width: Px,
    pub screen_height: Px,
    pub snake_size: Px,
    pub apple_size: Px,
    pub separation: Px,
    pub speed: Px,
    pub fps: u64,
    pub apple_reward: u32,
}

impl Config {
    /// Distance the head advances per tick, in pixels.
    pub fn step_px(&self) -> Px {
        self.speed * self.fps as Px
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: 800.0,
            screen_height: 600.0,
            snake_size: 15.0,
            apple_size: 15.0,
            separation: 10.0,
            speed: 0.36,
            fps: 25,
            apple_reward: 10,
        }
    }
}
