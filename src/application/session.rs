use crate::domain::{Cell, LiveSet, ScreenCoord, SimulationEngine};

use super::config::SessionConfig;
use super::cursor::{Cursor, Direction, Viewport};

/// Session is one simulation run: the engine plus the view state around it.
/// It is created when a configuration is started or loaded and dropped
/// when the next one replaces it.
pub struct Session {
    pub engine: SimulationEngine,
    pub cursor: Cursor,
    /// Total pan applied so far, in world units
    pub pan_offset: (i64, i64),
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl Session {
    pub fn new(initial: LiveSet, config: &SessionConfig, viewport: Viewport) -> Self {
        let engine = SimulationEngine::new(initial)
            .with_scale(config.scale_unit())
            .with_algorithm(config.algorithm);
        Self {
            engine,
            cursor: Cursor::centered(viewport),
            pan_offset: (0, 0),
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
        }
    }

    /// Advance the clock; steps the engine once per update interval.
    /// Returns true if a step happened.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.update_timer += delta_time;
        if self.update_timer < 1.0 / self.updates_per_second {
            return false;
        }

        self.update_timer = 0.0;
        self.engine.step();
        true
    }

    /// Move the view by (dx, dy) world units, committing the shifted cells
    pub fn pan_view(&mut self, dx: i64, dy: i64) {
        self.engine.apply_pan(dx, dy);
        self.pan_offset.0 += dx;
        self.pan_offset.1 += dy;
    }

    /// Move the cursor, panning by one unit when it hits the edge
    pub fn move_cursor(&mut self, direction: Direction, viewport: Viewport) {
        if let Some((dx, dy)) = self.cursor.step(direction, viewport) {
            self.pan_view(dx, dy);
        }
    }

    pub fn cursor_world(&self) -> Cell {
        let (dx, dy) = self.pan_offset;
        self.engine.screen_to_world(self.cursor.pos, dx, dy)
    }

    /// Returns whether the cell under the cursor is now alive
    pub fn toggle_at_cursor(&mut self) -> bool {
        let cell = self.cursor_world();
        self.engine.toggle(cell)
    }

    pub fn to_screen(&self, cell: Cell) -> ScreenCoord {
        let (dx, dy) = self.pan_offset;
        self.engine.world_to_screen(cell, dx, dy)
    }

    /// Screen positions of live cells inside the viewport
    pub fn visible_live(&self, viewport: Viewport) -> impl Iterator<Item = ScreenCoord> + '_ {
        self.engine
            .live()
            .iter()
            .map(|&c| self.to_screen(c))
            .filter(move |&p| viewport.contains(p))
    }

    /// Screen positions of cells that died in the last step, inside the viewport
    pub fn visible_died(&self, viewport: Viewport) -> impl Iterator<Item = ScreenCoord> + '_ {
        self.engine
            .died()
            .map(|&c| self.to_screen(c))
            .filter(move |&p| viewport.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScaleUnit;

    fn session(cells: &[(i64, i64)]) -> Session {
        let initial = cells.iter().copied().map(Cell::from).collect();
        Session::new(initial, &SessionConfig::default(), Viewport::new(20, 10))
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut s = session(&[(0, 0), (1, 0), (2, 0)]);

        assert!(!s.tick(0.05));
        assert_eq!(s.engine.generation(), 0);
        assert!(s.tick(0.06));
        assert_eq!(s.engine.generation(), 1);
        assert_eq!(s.update_timer, 0.0);
    }

    #[test]
    fn test_pan_view_tracks_offset() {
        let mut s = session(&[(5, 5)]);
        s.pan_view(2, -3);
        s.pan_view(1, 1);

        assert_eq!(s.pan_offset, (3, -2));
        assert!(s.engine.is_alive(Cell::new(2, 7)));
    }

    #[test]
    fn test_cursor_toggles_cell_under_it() {
        let mut s = session(&[]);
        assert_eq!(s.cursor_world(), Cell::new(10, 5));

        assert!(s.toggle_at_cursor());
        assert!(s.engine.is_alive(Cell::new(10, 5)));
        assert!(!s.toggle_at_cursor());
        assert!(s.engine.live().is_empty());
    }

    #[test]
    fn test_cursor_edge_pans_content() {
        let viewport = Viewport::new(3, 3);
        let mut s = Session::new(
            [Cell::new(1, 1)].into_iter().collect(),
            &SessionConfig::default(),
            viewport,
        );

        s.move_cursor(Direction::Right, viewport);
        assert_eq!(s.cursor.pos, ScreenCoord::new(2, 1));
        s.move_cursor(Direction::Right, viewport);

        assert_eq!(s.cursor.pos, ScreenCoord::new(2, 1));
        assert!(s.engine.is_alive(Cell::new(0, 1)));
        assert_eq!(s.pan_offset, (1, 0));
    }

    #[test]
    fn test_visible_cells_are_clipped() {
        let s = session(&[(0, 0), (19, 9), (20, 0), (-1, 3)]);
        let mut visible: Vec<_> = s.visible_live(Viewport::new(20, 10)).collect();
        visible.sort_by_key(|p| (p.x, p.y));

        assert_eq!(visible, vec![ScreenCoord::new(0, 0), ScreenCoord::new(19, 9)]);
    }

    #[test]
    fn test_scaled_session_round_trips_cursor() {
        let config = SessionConfig { scale: 2, ..SessionConfig::default() };
        let mut s = Session::new(LiveSet::default(), &config, Viewport::new(8, 8));
        assert_eq!(s.engine.scale(), ScaleUnit::new(2).unwrap());

        s.pan_view(3, 0);
        let world = s.cursor_world();
        assert_eq!(s.to_screen(world), s.cursor.pos);
    }
}
