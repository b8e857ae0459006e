use crate::Px;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl Point {
    pub fn new(x: Px, y: Px) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement on screen, y growing downwards.
    pub fn delta(self) -> (Px, Px) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Strict AABB overlap test between two axis-aligned squares given by
/// their top-left corners and side lengths. Touching edges don't count.
pub fn squares_overlap(a: Point, a_size: Px, b: Point, b_size: Px) -> bool {
    a.x < b.x + b_size && a.x + a_size > b.x && a.y < b.y + b_size && a.y + a_size > b.y
}

/// True while `p` is inside [0, width) x [0, height).
pub fn in_bounds(p: Point, width: Px, height: Px) -> bool {
    p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(20.0, 18.0);
        assert_eq!(squares_overlap(a, 15.0, b, 15.0), squares_overlap(b, 15.0, a, 15.0));

        let far = Point::new(100.0, 100.0);
        assert_eq!(squares_overlap(a, 15.0, far, 15.0), squares_overlap(far, 15.0, a, 15.0));
    }

    #[test]
    fn identical_squares_overlap() {
        let p = Point::new(42.0, 7.0);
        assert!(squares_overlap(p, 15.0, p, 15.0));
    }

    #[test]
    fn separated_squares_do_not_overlap() {
        let a = Point::new(0.0, 0.0);
        assert!(!squares_overlap(a, 15.0, Point::new(16.0, 0.0), 15.0));
        assert!(!squares_overlap(a, 15.0, Point::new(0.0, 40.0), 15.0));
    }

    #[test]
    fn touching_edges_are_not_overlap() {
        let a = Point::new(0.0, 0.0);
        assert!(!squares_overlap(a, 15.0, Point::new(15.0, 0.0), 15.0));
        assert!(!squares_overlap(a, 15.0, Point::new(0.0, 15.0), 15.0));
    }

    #[test]
    fn bounds_are_inclusive_exclusive() {
        let (w, h) = (800.0, 600.0);
        assert!(in_bounds(Point::new(0.0, 0.0), w, h));
        assert!(in_bounds(Point::new(w - 1.0, h - 1.0), w, h));
        assert!(!in_bounds(Point::new(-1.0, 300.0), w, h));
        assert!(!in_bounds(Point::new(w, 300.0), w, h));
        assert!(!in_bounds(Point::new(300.0, -1.0), w, h));
        assert!(!in_bounds(Point::new(300.0, h), w, h));
    }
}
