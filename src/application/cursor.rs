use crate::domain::ScreenCoord;

/// The visible window, measured in screen cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Check if a screen position falls inside the window
    pub fn contains(&self, pos: ScreenCoord) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn center(&self) -> ScreenCoord {
        ScreenCoord::new(self.width / 2, self.height / 2)
    }

    /// Pull a position back inside the window
    pub fn clamp(&self, pos: ScreenCoord) -> ScreenCoord {
        ScreenCoord::new(pos.x.clamp(0, self.width - 1), pos.y.clamp(0, self.height - 1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen space (y grows downward)
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Edit cursor shown while paused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub pos: ScreenCoord,
}

impl Cursor {
    pub fn centered(viewport: Viewport) -> Self {
        Self { pos: viewport.center() }
    }

    /// Move one cell. When the cursor is pinned at the window edge it stays
    /// put and the returned offset says how far the view should pan instead.
    pub fn step(&mut self, direction: Direction, viewport: Viewport) -> Option<(i64, i64)> {
        let (dx, dy) = direction.delta();
        let target = ScreenCoord::new(self.pos.x + dx, self.pos.y + dy);

        if viewport.contains(target) {
            self.pos = target;
            None
        } else {
            Some((dx, dy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_centered() {
        let cursor = Cursor::centered(Viewport::new(80, 24));
        assert_eq!(cursor.pos, ScreenCoord::new(40, 12));
    }

    #[test]
    fn test_cursor_moves_inside_viewport() {
        let viewport = Viewport::new(10, 10);
        let mut cursor = Cursor::centered(viewport);

        assert_eq!(cursor.step(Direction::Left, viewport), None);
        assert_eq!(cursor.step(Direction::Up, viewport), None);
        assert_eq!(cursor.pos, ScreenCoord::new(4, 4));
    }

    #[test]
    fn test_cursor_at_edge_requests_pan() {
        let viewport = Viewport::new(3, 3);
        let mut cursor = Cursor { pos: ScreenCoord::new(2, 0) };

        assert_eq!(cursor.step(Direction::Right, viewport), Some((1, 0)));
        assert_eq!(cursor.step(Direction::Up, viewport), Some((0, -1)));
        assert_eq!(cursor.pos, ScreenCoord::new(2, 0));
    }

    #[test]
    fn test_viewport_bounds() {
        let viewport = Viewport::new(4, 2);
        assert!(viewport.contains(ScreenCoord::new(3, 1)));
        assert!(!viewport.contains(ScreenCoord::new(4, 1)));
        assert!(!viewport.contains(ScreenCoord::new(0, -1)));
        assert_eq!(viewport.clamp(ScreenCoord::new(9, -3)), ScreenCoord::new(3, 0));
        assert_eq!(Viewport::new(0, -5), Viewport::new(1, 1));
    }
}
