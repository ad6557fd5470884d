// Domain layer - sparse Life engine, coordinate transforms, .life format
pub mod domain;

// Application layer - sessions, modes, config and pattern files
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, SimulationEngine, ScaleUnit, ScreenCoord, LifeFile, ParseError, Pattern, presets, Algorithm};
pub use application::{App, Command, Flow, Mode, Session, SessionConfig};
