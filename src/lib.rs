//! Conway's Game of Life for a low-resolution badge display.

// Domain layer - packed grid and Life engine
pub mod domain;

// Application layer - configuration and session policy
pub mod application;

// Infrastructure layer - drawing and button polling
pub mod rendering;
pub mod input;

pub use domain::{BitGrid, LifeEngine, Pattern, StepMode, TickOutcome, presets};
pub use application::{Colour, Command, LifeConfig, Session};
