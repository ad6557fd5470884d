use rand::Rng;

use super::{Cell, LiveSet, SimulationEngine};

/// A named group of cells that can be stamped onto the plane
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<Cell>, // Relative to the top-left corner
}

impl Pattern {
    /// Build a pattern from text rows: `O` is alive, anything else is dead
    pub fn from_rows(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells: Vec<Cell> = rows
            .iter()
            .zip(0..)
            .flat_map(|(row, y)| {
                row.chars()
                    .zip(0..)
                    .filter(|&(ch, _)| ch == 'O')
                    .map(move |(_, x)| Cell::new(x, y))
            })
            .collect();
        let width = rows.iter().map(|r| r.chars().count() as i64).max().unwrap_or(0);
        let height = rows.len() as i64;
        Self { name, description, width, height, cells }
    }

    /// Cells of the pattern with its top-left corner at `origin`
    pub fn cells_at(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |c| origin.offset(c.x, c.y))
    }

    /// The pattern as a live set, top-left corner at `origin`
    pub fn to_live_set(&self, origin: Cell) -> LiveSet {
        self.cells_at(origin).collect()
    }

    /// Stamp the pattern centered on `center`
    pub fn place_on(&self, engine: &mut SimulationEngine, center: Cell) {
        let origin = center.offset(-self.width / 2, -self.height / 2);
        for cell in self.cells_at(origin) {
            engine.insert(cell);
        }
    }
}

/// Fill a `width` x `height` box starting at `origin`, each cell alive with probability `density`
pub fn random_soup<R: Rng>(rng: &mut R, origin: Cell, width: i64, height: i64, density: f64) -> LiveSet {
    let density = density.clamp(0.0, 1.0);
    (0..height)
        .flat_map(|y| (0..width).map(move |x| origin.offset(x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::from_rows("Glider", "Spaceship (period 4)", &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    pub fn blinker() -> Pattern {
        Pattern::from_rows("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    pub fn toad() -> Pattern {
        Pattern::from_rows("Toad", "Oscillator (period 2)", &[
            ".OOO",
            "OOO.",
        ])
    }

    pub fn beacon() -> Pattern {
        Pattern::from_rows("Beacon", "Oscillator (period 2)", &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ])
    }

    pub fn block() -> Pattern {
        Pattern::from_rows("Block", "Still life", &[
            "OO",
            "OO",
        ])
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_rows("LWSS", "Lightweight spaceship (period 4)", &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ])
    }

    /// R-pentomino - stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::from_rows("R-pentomino", "Methuselah - stabilizes at gen 1103", &[
            ".OO",
            "OO.",
            ".O.",
        ])
    }

    /// Acorn - stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_rows("Acorn", "Methuselah - stabilizes at gen 5206", &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
            acorn(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_rows_dimensions() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(glider.cells.len(), 5);
        assert!(glider.cells.contains(&Cell::new(1, 0)));
        assert!(glider.cells.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = presets::glider();
        let mut engine = SimulationEngine::new(glider.to_live_set(Cell::new(-10, -10)));

        for _ in 0..4 {
            engine.step();
        }

        assert_eq!(engine.live(), &glider.to_live_set(Cell::new(-9, -9)));
    }

    #[test]
    fn test_period_two_oscillators_return() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let start = pattern.to_live_set(Cell::new(0, 0));
            let mut engine = SimulationEngine::new(start.clone());

            engine.step();
            assert_ne!(engine.live(), &start, "{} should change", pattern.name);
            engine.step();
            assert_eq!(engine.live(), &start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_place_on_centers_pattern() {
        let mut engine = SimulationEngine::default();
        presets::block().place_on(&mut engine, Cell::new(5, 5));

        assert_eq!(engine.live(), &presets::block().to_live_set(Cell::new(4, 4)));
    }

    #[test]
    fn test_random_soup_stays_in_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let soup = random_soup(&mut rng, Cell::new(-5, 3), 10, 4, 0.5);

        assert!(!soup.is_empty());
        assert!(soup.iter().all(|c| (-5..5).contains(&c.x) && (3..7).contains(&c.y)));
        assert!(random_soup(&mut rng, Cell::default(), 10, 10, 0.0).is_empty());
        assert_eq!(random_soup(&mut rng, Cell::default(), 3, 3, 1.0).len(), 9);
    }

    #[test]
    fn test_all_patterns_have_cells() {
        assert!(presets::all_patterns().iter().all(|p| !p.cells.is_empty()));
    }
}
