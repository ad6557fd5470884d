//! Neighbor counting strategies for the sparse engine.
//!
//! Both strategies build the same frozen count map; the engine applies
//! death and birth against it only after counting has finished.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Cell, LiveSet};

/// Live-neighbor count for every live cell and every cell adjacent to one.
pub type NeighborCounts = HashMap<Cell, u8, ahash::RandomState>;

/// Available neighbor-counting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single pass over the live set
    #[default]
    Sequential,
    /// Rayon fold/reduce over the live set
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sequential, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Sparse",
            Algorithm::Parallel => "Sparse+Par",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Hash map of neighbor counts, serial",
            Algorithm::Parallel => "Per-thread count maps merged after counting",
        }
    }

    /// Count neighbors with this strategy
    pub fn count_neighbors(&self, live: &LiveSet) -> NeighborCounts {
        match self {
            Algorithm::Sequential => count_neighbors(live),
            Algorithm::Parallel => count_neighbors_parallel(live),
        }
    }
}

/// Record one live cell: itself with count >= 0, each neighbor incremented.
fn tally(counts: &mut NeighborCounts, cell: Cell) {
    counts.entry(cell).or_insert(0);
    for neighbor in cell.neighbors() {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
}

/// Serial neighbor count
pub fn count_neighbors(live: &LiveSet) -> NeighborCounts {
    let mut counts = NeighborCounts::with_capacity_and_hasher(live.len() * 9, Default::default());
    for &cell in live {
        tally(&mut counts, cell);
    }
    counts
}

/// Parallel neighbor count. Each rayon job fills its own map and the maps
/// are summed, so the result is identical to [`count_neighbors`].
pub fn count_neighbors_parallel(live: &LiveSet) -> NeighborCounts {
    live.par_iter()
        .fold(NeighborCounts::default, |mut counts, &cell| {
            tally(&mut counts, cell);
            counts
        })
        .reduce(NeighborCounts::default, merge)
}

fn merge(into: NeighborCounts, from: NeighborCounts) -> NeighborCounts {
    // Fold the smaller map into the larger one
    let (mut into, from) = if into.len() < from.len() { (from, into) } else { (into, from) };
    for (cell, n) in from {
        *into.entry(cell).or_insert(0) += n;
    }
    into
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i64, i64)]) -> LiveSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_isolated_cell_is_counted_with_zero() {
        let counts = count_neighbors(&set(&[(5, 5)]));

        assert_eq!(counts.get(&Cell::new(5, 5)), Some(&0));
        assert_eq!(counts.len(), 9);
        assert!(Cell::new(5, 5).neighbors().all(|n| counts[&n] == 1));
    }

    #[test]
    fn test_counts_overlap_between_cells() {
        let counts = count_neighbors(&set(&[(0, 0), (1, 0), (0, 1)]));

        assert_eq!(counts[&Cell::new(1, 1)], 3);
        assert_eq!(counts[&Cell::new(0, 0)], 2);
        assert_eq!(counts[&Cell::new(-1, -1)], 1);
        assert!(!counts.contains_key(&Cell::new(3, 3)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let live: LiveSet = (0..40)
            .flat_map(|y| (0..40).map(move |x| (x, y)))
            .filter(|&(x, y)| (x * 7 + y * 13) % 5 < 2)
            .map(Cell::from)
            .collect();

        assert_eq!(count_neighbors_parallel(&live), count_neighbors(&live));
    }

    #[test]
    fn test_empty_set_has_no_counts() {
        assert!(count_neighbors(&LiveSet::default()).is_empty());
        assert!(count_neighbors_parallel(&LiveSet::default()).is_empty());
    }

    #[test]
    fn test_all_algorithms_returns_two() {
        assert_eq!(Algorithm::all().len(), 2);
        assert_eq!(Algorithm::default(), Algorithm::Sequential);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
