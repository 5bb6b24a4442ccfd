mod algorithm;
mod bit_grid;
mod cell;
mod engine;
mod patterns;
mod stagnation;

pub use algorithm::StepMode;
pub use bit_grid::{BLOCK_BITS, BitGrid, BlockSource, GridError};
pub use cell::Cell;
pub use engine::{EngineError, LifeEngine, TickOutcome};
pub use patterns::{Pattern, presets};
pub use stagnation::{DEFAULT_STAGNATION_THRESHOLD, StagnationDetector};
