/// Default number of consecutive repeats before the grid counts as stagnant
pub const DEFAULT_STAGNATION_THRESHOLD: u32 = 20;

/// Tracks generation hashes to spot still lifes and period-2 oscillators.
///
/// Each new hash is compared with the one from two generations earlier, so a
/// blinker repeats just like a block does. Hash matches are a heuristic: an
/// XOR-fold collision can make a changing grid look repeated for a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagnationDetector {
    /// `[previous, two_back]`
    history: [u32; 2],
    matches: u32,
    threshold: u32,
}

impl StagnationDetector {
    /// `threshold` must be non-zero; the engine validates it.
    pub fn new(threshold: u32, initial_hash: u32) -> Self {
        Self {
            history: [initial_hash; 2],
            matches: 0,
            threshold,
        }
    }

    /// Forget the history and treat `hash` as the state it was in for the
    /// last two generations.
    pub fn prime(&mut self, hash: u32) {
        self.history = [hash; 2];
        self.matches = 0;
    }

    /// Record the hash of a freshly committed generation.
    /// Returns `true` once the match run reaches the threshold.
    pub fn observe(&mut self, hash: u32) -> bool {
        if hash == self.history[1] {
            self.matches += 1;
        } else {
            self.matches = 0;
        }
        self.history = [hash, self.history[0]];
        self.matches >= self.threshold
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
