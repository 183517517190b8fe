use crate::canvas::Cell;

use super::registry::Mortal;

/// Horizontal drift of a stem's next upward step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Left,
    Straight,
    Right,
}

impl Heading {
    pub fn dx(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Straight => 0,
            Heading::Right => 1,
        }
    }

    fn from_dx(dx: i32) -> Self {
        match dx {
            -1 => Heading::Left,
            0 => Heading::Straight,
            _ => Heading::Right,
        }
    }

    /// Shift the heading by `offset` (-1, 0 or +1), wrapping around so that
    /// an offset of zero always keeps the current heading.
    pub fn steer(self, offset: i32) -> Self {
        Self::from_dx((self.dx() + offset + 1).rem_euclid(3) - 1)
    }

    pub fn glyph(self) -> char {
        match self {
            Heading::Left => '\\',
            Heading::Straight => '|',
            Heading::Right => '/',
        }
    }
}

/// Which way a leaf grows away from its stem
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn dx(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Growth stage, carrying only the state that stage needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Falling seed; `saved` is what it covered on its previous row
    Seed { saved: Option<Cell> },
    Stem { heading: Heading },
    /// `side` is decided on the leaf's first tick
    Leaf { side: Option<Side> },
    Bloom,
    /// Finished; dropped from the registry at the end of the tick
    Dead,
}

/// One growth point on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub row: i32,
    pub col: i32,
    pub kind: Kind,
}

impl Entity {
    pub fn seed(row: i32, col: i32) -> Self {
        Self { row, col, kind: Kind::Seed { saved: None } }
    }

    pub fn leaf(row: i32, col: i32) -> Self {
        Self { row, col, kind: Kind::Leaf { side: None } }
    }
}

impl Mortal for Entity {
    fn is_dead(&self) -> bool {
        self.kind == Kind::Dead
    }
}
