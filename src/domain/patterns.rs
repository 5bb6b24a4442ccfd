/// Fixed set of live-cell offsets that can be stamped onto the engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Offsets of live cells relative to the placement origin
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// Offsets moved to `origin` on a `width` x `height` torus
    pub fn wrapped_cells(
        &self,
        origin: (usize, usize),
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| ((origin.0 + dx) % width, (origin.1 + dy) % height))
    }
}

/// Seed patterns for the badge
pub mod presets {
    use super::*;

    /// Glider - travels (+1, +1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Lightweight spaceship
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - runs for 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
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
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(glider.cells.len(), 5);
    }

    #[test]
    fn test_empty_pattern_has_zero_extent() {
        let empty = Pattern::new("Empty", "", vec![]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_wrapped_cells_cross_edges() {
        let block = presets::block();
        let mut cells: Vec<_> = block.wrapped_cells((9, 9), 10, 10).collect();
        cells.sort();
        assert_eq!(cells, vec![(0, 0), (0, 9), (9, 0), (9, 9)]);
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(presets::by_name("glider"), Some(presets::glider()));
        assert_eq!(presets::by_name("R-PENTOMINO"), Some(presets::r_pentomino()));
        assert!(presets::by_name("gun").is_none());
    }
}
