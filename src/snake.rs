use crate::geometry::{squares_overlap, Direction, Point};
use crate::Px;

/// One body cell. Segments are plain values owned by the snake's
/// sequence; the head is simply the segment at index 0.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
    pub pos: Point,
    pub dir: Direction,
}

pub struct Snake {
    segments: Vec<Segment>,
}

impl Snake {
    /// A new snake faces up: head at `pos` and one trailing segment
    /// `separation` pixels below it.
    pub fn new(pos: Point, separation: Px) -> Self {
        let segments = vec![
            Segment { pos, dir: Direction::Up },
            Segment { pos: Point::new(pos.x, pos.y + separation), dir: Direction::Up },
        ];
        Snake { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// The last direction pressed wins, reversals included; running
    /// back into the body is settled by the self-collision check.
    pub fn set_direction(&mut self, dir: Direction) {
        self.segments[0].dir = dir;
    }

    /// Advances the snake one tick: every segment adopts the state of
    /// the one ahead of it, tail first, then the head moves `step`
    /// pixels in its own direction. Count is preserved and nothing is
    /// allocated. With a single segment the shift is empty and the
    /// head just advances in place.
    pub fn move_step(&mut self, step: Px) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let head = &mut self.segments[0];
        let (dx, dy) = head.dir.delta();
        head.pos.x += dx * step;
        head.pos.y += dy * step;
    }

    /// Appends one segment after the tail, one body-cell `size` away
    /// from it in the tail's facing direction.
    pub fn grow(&mut self, size: Px) {
        let tail = *self.segments.last().unwrap();
        let (dx, dy) = tail.dir.delta();
        self.segments.push(Segment {
            pos: Point::new(tail.pos.x + dx * size, tail.pos.y + dy * size),
            dir: tail.dir,
        });
    }

    /// Head-vs-body overlap test. The neck always overlaps the head
    /// because the per-tick step is shorter than a body cell, so the
    /// scan starts at the second body segment.
    pub fn self_collision(&self, size: Px) -> bool {
        let head = self.segments[0].pos;
        self.segments
            .iter()
            .skip(2)
            .any(|seg| squares_overlap(head, size, seg.pos, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction::*;

    const SIZE: Px = 15.0;
    const STEP: Px = 9.0;

    fn positions(snake: &Snake) -> Vec<(Px, Px)> {
        snake.segments().iter().map(|s| (s.pos.x, s.pos.y)).collect()
    }

    #[test]
    fn new_snake_has_two_segments_facing_up() {
        let snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        assert_eq!(snake.segments().len(), 2);
        assert_eq!(snake.head().dir, Up);
        assert_eq!(positions(&snake), vec![(400.0, 300.0), (400.0, 310.0)]);
    }

    #[test]
    fn move_step_propagates_tail_to_head() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        snake.grow(SIZE);
        snake.move_step(STEP);

        // Head advanced, each body segment took over its leader's spot
        assert_eq!(positions(&snake), vec![(400.0, 291.0), (400.0, 300.0), (400.0, 310.0)]);

        snake.move_step(STEP);
        assert_eq!(positions(&snake), vec![(400.0, 282.0), (400.0, 291.0), (400.0, 300.0)]);
    }

    #[test]
    fn move_step_preserves_segment_count() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        for _ in 0..50 {
            snake.move_step(STEP);
        }
        assert_eq!(snake.segments().len(), 2);
    }

    #[test]
    fn growth_appends_one_segment_per_event() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        for n in 1..=5 {
            snake.grow(SIZE);
            snake.move_step(STEP);
            assert_eq!(snake.segments().len(), 2 + n);
        }
    }

    #[test]
    fn growth_extends_along_tail_direction() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        snake.set_direction(Right);
        snake.move_step(STEP);
        snake.move_step(STEP);

        // Tail now faces right at (409, 300); the new segment lands
        // one cell further along that direction
        let tail = *snake.segments().last().unwrap();
        assert_eq!(tail.dir, Right);
        snake.grow(SIZE);

        let new_tail = snake.segments().last().unwrap();
        assert_eq!((new_tail.pos.x, new_tail.pos.y), (tail.pos.x + SIZE, tail.pos.y));
    }

    #[test]
    fn set_direction_has_no_reversal_guard() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        assert_eq!(snake.head().dir, Up);
        snake.set_direction(Down);
        assert_eq!(snake.head().dir, Down);
    }

    #[test]
    fn trailing_body_is_not_a_self_collision() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        snake.grow(SIZE);
        snake.move_step(STEP);
        snake.move_step(STEP);
        assert!(!snake.self_collision(SIZE));
    }

    #[test]
    fn reversing_into_the_body_collides() {
        let mut snake = Snake::new(Point::new(400.0, 300.0), 10.0);
        snake.grow(SIZE);
        snake.move_step(STEP);
        snake.move_step(STEP);

        snake.set_direction(Down);
        snake.move_step(STEP);
        assert!(snake.self_collision(SIZE));
    }

    #[test]
    fn single_segment_snake_still_moves() {
        let mut snake = Snake::new(Point::new(100.0, 100.0), 10.0);
        snake.segments.truncate(1);
        snake.move_step(STEP);
        assert_eq!(positions(&snake), vec![(100.0, 91.0)]);
    }
}
