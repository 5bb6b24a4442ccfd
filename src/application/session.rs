use tracing::info;

use super::config::{LifeConfig, cells_for_display};
use crate::domain::{BlockSource, EngineError, LifeEngine, TickOutcome};

/// Live-cell colours the badge cycles through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

impl Colour {
    pub const PALETTE: [Colour; 3] = [Colour::Red, Colour::Green, Colour::Blue];

    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Colour::Red => [255, 0, 0, 255],
            Colour::Green => [0, 255, 0, 255],
            Colour::Blue => [0, 0, 255, 255],
        }
    }

    fn index(self) -> usize {
        match self {
            Colour::Red => 0,
            Colour::Green => 1,
            Colour::Blue => 2,
        }
    }
}

/// User requests coming from the input layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Throw the grid away and start over with a random one
    Reset,
    /// Leave the app
    Quit,
}

/// Session orchestrates the simulation: frame pacing, resets and the
/// palette policy that sits on top of the engine.
pub struct Session<R: BlockSource> {
    engine: LifeEngine<R>,
    config: LifeConfig,
    colour: Colour,
    update_timer: f32,
    pub is_running: bool,
    reseeds: u64,
}

impl<R: BlockSource> Session<R> {
    /// Build the engine for the configured display and randomize it
    pub fn new(config: LifeConfig, source: R) -> Result<Self, EngineError> {
        let (width, height) = config.grid_dimensions();
        let engine = LifeEngine::new(width, height, source)?
            .with_stagnation_threshold(config.stagnation_threshold)?
            .with_step_mode(config.step_mode);

        let mut session = Self {
            engine,
            config,
            colour: Colour::Red,
            update_timer: 0.0,
            is_running: true,
            reseeds: 0,
        };
        session.reset();
        Ok(session)
    }

    pub fn engine(&self) -> &LifeEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LifeEngine<R> {
        &mut self.engine
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Times the engine reseeded itself after stagnating
    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }

    /// Fresh random grid in a random colour
    pub fn reset(&mut self) {
        self.engine.randomize();
        let roll = self.engine.source_mut().next_block() as usize;
        self.colour = Colour::PALETTE[roll % Colour::PALETTE.len()];
        self.update_timer = 0.0;
        info!(
            colour = ?self.colour,
            population = self.engine.population(),
            "grid reset"
        );
    }

    /// Switch to one of the other palette colours
    fn cycle_colour(&mut self) {
        let roll = self.engine.source_mut().next_block() as usize;
        let step = 1 + roll % (Colour::PALETTE.len() - 1);
        self.colour = Colour::PALETTE[(self.colour.index() + step) % Colour::PALETTE.len()];
    }

    /// Apply a user command. Returns `false` once the session should end.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            Command::Quit => {
                self.is_running = false;
                false
            }
        }
    }

    /// Advance the frame timer, ticking the engine once per frame delay
    pub fn update(&mut self, delta_time: f32) -> Option<TickOutcome> {
        if !self.is_running {
            return None;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.config.frame_delay_secs() {
            return None;
        }
        self.update_timer = 0.0;

        let outcome = self.engine.tick();
        if outcome == TickOutcome::Reseeded {
            self.reseeds += 1;
            self.cycle_colour();
            info!(colour = ?self.colour, reseeds = self.reseeds, "stagnation reseed");
        }
        Some(outcome)
    }

    /// Rebuild the grid if the display now fits a different number of cells.
    /// Returns whether the grid was rebuilt.
    pub fn resize_display(&mut self, width: f32, height: f32) -> Result<bool, EngineError> {
        let dims = cells_for_display(width, height, self.config.pixel_width, self.config.pixel_height);
        if dims == self.engine.dimensions() {
            return Ok(false);
        }
        self.engine.resize(dims.0, dims.1)?;
        info!(width = dims.0, height = dims.1, "display resized");
        Ok(true)
    }
}
