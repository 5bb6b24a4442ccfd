//! Double-buffered Life engine on a toroidal grid.
//!
//! Cell `(x, y)` lives at bit `x + y * width` of each buffer. A tick reads
//! only `current`, writes every block of `scratch`, then swaps the two.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::bit_grid::{BLOCK_BITS, BitGrid, BlockSource, GridError};
use super::stagnation::{DEFAULT_STAGNATION_THRESHOLD, StagnationDetector};
use super::{Cell, Pattern, StepMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("stagnation threshold must be at least 1")]
    InvalidThreshold,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// What a call to [`LifeEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new generation was committed
    Advanced,
    /// The committed generation completed a stagnant run and the grid was
    /// re-randomized
    Reseeded,
}

pub struct LifeEngine<R: BlockSource> {
    width: usize,
    height: usize,
    current: BitGrid,
    scratch: BitGrid,
    stagnation: StagnationDetector,
    step_mode: StepMode,
    generation: u64,
    source: R,
}

/// `[i - 1, i, i + 1]` wrapped into `0..n`
#[inline]
fn wrap3(i: usize, n: usize) -> [usize; 3] {
    let before = if i == 0 { n - 1 } else { i - 1 };
    let after = if i + 1 == n { 0 } else { i + 1 };
    [before, i, after]
}

/// Next state of the cell at `rows[1] + cols[1]`.
/// `rows` holds row start offsets, `cols` column indices, both pre-wrapped.
#[inline]
fn next_state(grid: &BitGrid, rows: [usize; 3], cols: [usize; 3]) -> bool {
    let mut neighbors = 0u8;
    for (ri, &row) in rows.iter().enumerate() {
        for (ci, &col) in cols.iter().enumerate() {
            if ri == 1 && ci == 1 {
                continue;
            }
            neighbors += grid.test_unchecked(row + col) as u8;
        }
    }
    Cell::from_bit(grid.test_unchecked(rows[1] + cols[1]))
        .evolve(neighbors)
        .is_alive()
}

fn cell_count(width: usize, height: usize) -> Result<usize, EngineError> {
    match width.checked_mul(height) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(EngineError::InvalidDimensions { width, height }),
    }
}

impl<R: BlockSource> LifeEngine<R> {
    /// Create an engine with an all-dead grid. Call [`Self::randomize`] or
    /// [`Self::seed_pattern`] to populate it.
    pub fn new(width: usize, height: usize, source: R) -> Result<Self, EngineError> {
        let cells = cell_count(width, height)?;
        let current = BitGrid::new(cells)?;
        let scratch = BitGrid::new(cells)?;
        let stagnation = StagnationDetector::new(DEFAULT_STAGNATION_THRESHOLD, current.hash());

        Ok(Self {
            width,
            height,
            current,
            scratch,
            stagnation,
            step_mode: StepMode::default(),
            generation: 0,
            source,
        })
    }

    pub fn with_stagnation_threshold(mut self, threshold: u32) -> Result<Self, EngineError> {
        if threshold == 0 {
            return Err(EngineError::InvalidThreshold);
        }
        self.stagnation = StagnationDetector::new(threshold, self.current.hash());
        Ok(self)
    }

    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = step_mode;
        self
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Last committed generation, for renderers
    pub fn current(&self) -> &BitGrid {
        &self.current
    }

    /// The injected random source, shared with presentation policy
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    pub fn set_step_mode(&mut self, step_mode: StepMode) {
        self.step_mode = step_mode;
    }

    pub fn population(&self) -> usize {
        self.current.count_alive()
    }

    pub fn hash(&self) -> u32 {
        self.current.hash()
    }

    /// Consecutive generations that matched the one two steps earlier
    pub fn stagnation_count(&self) -> u32 {
        self.stagnation.matches()
    }

    pub fn stagnation_threshold(&self) -> u32 {
        self.stagnation.threshold()
    }

    /// Whether the latest generation repeated the one two steps earlier
    pub fn is_stagnant(&self) -> bool {
        self.stagnation.matches() > 0
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        let index = self.index_of(x, y)?;
        Ok(self.current.test(index)?)
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), EngineError> {
        let index = self.index_of(x, y)?;
        self.current.assign(index, alive)?;
        self.stagnation.prime(self.current.hash());
        Ok(())
    }

    /// Replace `current` with random bits. `scratch` is left alone since the
    /// next tick overwrites all of it.
    pub fn randomize(&mut self) {
        self.current.randomize(&mut self.source);
        self.generation = 0;
        self.stagnation.prime(self.current.hash());
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.current.clear_all();
        self.generation = 0;
        self.stagnation.prime(self.current.hash());
    }

    /// Stamp `pattern` at `origin` on top of the existing cells. Offsets that
    /// run past an edge wrap to the opposite side.
    pub fn seed_pattern(&mut self, pattern: &Pattern, origin: (usize, usize)) -> Result<(), EngineError> {
        self.index_of(origin.0, origin.1)?;
        for (x, y) in pattern.wrapped_cells(origin, self.width, self.height) {
            self.current.set(x + y * self.width)?;
        }
        self.stagnation.prime(self.current.hash());
        Ok(())
    }

    /// Reallocate both buffers for new dimensions and randomize. The random
    /// source and stagnation threshold carry over.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        let cells = cell_count(width, height)?;
        self.current = BitGrid::new(cells)?;
        self.scratch = BitGrid::new(cells)?;
        self.width = width;
        self.height = height;
        self.randomize();
        debug!(width, height, population = self.population(), "resized grid");
        Ok(())
    }

    /// Advance one generation, reseeding if the grid has stagnated
    pub fn tick(&mut self) -> TickOutcome {
        match self.step_mode {
            StepMode::Serial => self.step_serial(),
            StepMode::Parallel => self.step_parallel(),
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;

        if self.stagnation.observe(self.current.hash()) {
            debug!(
                generation = self.generation,
                population = self.population(),
                threshold = self.stagnation.threshold(),
                "grid stagnated, reseeding"
            );
            self.randomize();
            return TickOutcome::Reseeded;
        }
        TickOutcome::Advanced
    }

    fn step_serial(&mut self) {
        let (width, height) = (self.width, self.height);
        let current = &self.current;
        let out = self.scratch.blocks_mut();

        let mut word = 0u32;
        let mut index = 0usize;
        for y in 0..height {
            let rows = wrap3(y, height).map(|r| r * width);
            for x in 0..width {
                if next_state(current, rows, wrap3(x, width)) {
                    word |= 1u32 << (index % BLOCK_BITS);
                }
                index += 1;
                if index % BLOCK_BITS == 0 {
                    out[index / BLOCK_BITS - 1] = word;
                    word = 0;
                }
            }
        }
        if index % BLOCK_BITS != 0 {
            out[index / BLOCK_BITS] = word;
        }
    }

    fn step_parallel(&mut self) {
        let (width, height) = (self.width, self.height);
        let bit_count = self.current.bit_count();
        let current = &self.current;

        self.scratch
            .blocks_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(block, out)| {
                let start = block * BLOCK_BITS;
                let end = (start + BLOCK_BITS).min(bit_count);
                let mut word = 0u32;
                for index in start..end {
                    let (x, y) = (index % width, index / width);
                    let rows = wrap3(y, height).map(|r| r * width);
                    if next_state(current, rows, wrap3(x, width)) {
                        word |= 1u32 << (index - start);
                    }
                }
                *out = word;
            });
    }
}
