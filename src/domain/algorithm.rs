//! Selection of the generation-advance strategy.

use serde::Deserialize;

/// How [`super::LifeEngine::tick`] evaluates the next generation.
/// Both strategies produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Row-by-row on the calling thread
    #[default]
    Serial,
    /// Output blocks evaluated concurrently with rayon
    Parallel,
}

impl StepMode {
    pub fn all() -> [StepMode; 2] {
        [StepMode::Serial, StepMode::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Serial => "Serial",
            StepMode::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepMode::Serial => "Row scan, wraparound computed once per row/column",
            StepMode::Parallel => "One rayon task per 32-cell output block",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(StepMode::default(), StepMode::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let [a, b] = StepMode::all();
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn test_deserializes_lowercase() {
        let mode: StepMode = serde_json::from_str("\"parallel\"").unwrap();
        assert_eq!(mode, StepMode::Parallel);
    }
}
