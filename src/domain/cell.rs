/// State of a single Life cell, decoded from one bit of a [`super::BitGrid`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub const fn from_bit(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Standard Life transition (B3/S23):
    /// a live cell survives on 2 or 3 neighbours, a dead cell is born on
    /// exactly 3, everything else is dead next generation.
    #[inline]
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
