use super::algorithm::Algorithm;
use super::viewport::{self, ScaleUnit, ScreenCoord};
use super::{Cell, LiveSet, cell};

/// SimulationEngine owns the live cells of one session and advances them
/// one generation at a time on an unbounded plane.
///
/// The previous generation is kept alongside the current one so a renderer
/// can tell which cells were just born or just died.
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    live: LiveSet,
    prior: LiveSet,
    running: bool,
    scale: ScaleUnit,
    algorithm: Algorithm,
    generation: u64,
}

impl SimulationEngine {
    /// Create an engine from an initial configuration (possibly empty)
    pub fn new(initial: LiveSet) -> Self {
        Self {
            prior: initial.clone(),
            live: initial,
            running: true,
            scale: ScaleUnit::ONE,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    pub fn with_scale(mut self, scale: ScaleUnit) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    pub fn live(&self) -> &LiveSet {
        &self.live
    }

    /// Live cells as they were before the most recent `step()`
    pub fn prior(&self) -> &LiveSet {
        &self.prior
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Generations actually advanced; paused steps do not count
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn scale(&self) -> ScaleUnit {
        self.scale
    }

    pub fn set_scale(&mut self, scale: ScaleUnit) {
        self.scale = scale;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Flip a cell between alive and dead. Returns whether it is now alive.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.live.remove(&cell) {
            false
        } else {
            self.live.insert(cell)
        }
    }

    /// Returns true if the cell was not already alive
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.live.insert(cell)
    }

    /// Returns true if the cell was alive
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.live.remove(&cell)
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Advance one generation.
    ///
    /// The prior snapshot is refreshed on every call, including paused ones.
    /// Death and birth are both evaluated against one frozen neighbor count,
    /// so the order in which cells are visited never matters.
    pub fn step(&mut self) {
        self.prior.clone_from(&self.live);

        if !self.running {
            return;
        }

        let counts = self.algorithm.count_neighbors(&self.live);

        // Death: live cells outside the survival range
        self.live
            .retain(|c| counts.get(c).is_some_and(|&n| cell::survives(n)));

        // Birth: any counted coordinate with exactly three neighbors
        self.live.extend(
            counts
                .iter()
                .filter(|&(_, &n)| cell::is_born(n))
                .map(|(&c, _)| c),
        );

        self.generation += 1;
        log::debug!(
            "generation {} population {} ({} counted)",
            self.generation,
            self.live.len(),
            counts.len()
        );
    }

    /// Live cells translated by (-dx, -dy). The engine itself is untouched;
    /// the caller decides whether to `commit` the result.
    pub fn pan(&self, dx: i64, dy: i64) -> LiveSet {
        viewport::pan_cells(&self.live, dx, dy)
    }

    /// Replace the live cells, e.g. with the result of `pan`
    pub fn commit(&mut self, live: LiveSet) {
        self.live = live;
    }

    /// Pan and commit in one go
    pub fn apply_pan(&mut self, dx: i64, dy: i64) {
        let panned = self.pan(dx, dy);
        self.commit(panned);
    }

    /// World cell under a screen position at this engine's scale
    pub fn screen_to_world(&self, pos: ScreenCoord, dx: i64, dy: i64) -> Cell {
        viewport::screen_to_world(pos, dx, dy, self.scale)
    }

    /// Screen position of a world cell at this engine's scale
    pub fn world_to_screen(&self, cell: Cell, dx: i64, dy: i64) -> ScreenCoord {
        viewport::world_to_screen(cell, dx, dy, self.scale)
    }

    /// Cells alive now that were not alive before the last step
    pub fn born(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.live.difference(&self.prior)
    }

    /// Cells alive before the last step that are no longer alive
    pub fn died(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.prior.difference(&self.live)
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(LiveSet::default())
    }
}
