use crate::geometry::Point;

/// Apples are deactivated when eaten rather than removed, so the list
/// length never changes during a game.
pub struct Apple {
    pub pos: Point,
    pub active: bool,
}

impl Apple {
    pub fn new(pos: Point) -> Self {
        Apple { pos, active: true }
    }
}
