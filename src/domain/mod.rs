mod cell;
mod engine;
mod patterns;
mod algorithm;
pub mod viewport;
pub mod life_format;

pub use cell::{Cell, LiveSet, survives, is_born};
pub use engine::SimulationEngine;
pub use patterns::{Pattern, presets, random_soup};
pub use algorithm::{Algorithm, NeighborCounts, count_neighbors, count_neighbors_parallel};
pub use viewport::{ScaleUnit, ScreenCoord, screen_to_world, world_to_screen};
pub use life_format::{LifeFile, ParseError, LIFE_HEADER};
