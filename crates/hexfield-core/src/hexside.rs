//! Hexside directions: [`Hexside`] and the [`Hexsides`] bitmask.

use std::fmt;

// ---------------------------------------------------------------------------
// Hexside
// ---------------------------------------------------------------------------

/// One of the six edge-directions of a hexagon, clockwise from North.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Hexside {
    North = 0,
    NorthEast = 1,
    SouthEast = 2,
    South = 3,
    SouthWest = 4,
    NorthWest = 5,
}

impl Hexside {
    /// All six sides in clockwise order from North.
    pub const ALL: [Hexside; 6] = [
        Hexside::North,
        Hexside::NorthEast,
        Hexside::SouthEast,
        Hexside::South,
        Hexside::SouthWest,
        Hexside::NorthWest,
    ];

    /// Index in clockwise order (North = 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side from an index modulo 6.
    #[inline]
    pub const fn from_index(i: usize) -> Hexside {
        Self::ALL[i % 6]
    }

    /// The opposite side (±3 wraparound).
    #[inline]
    pub const fn reversed(self) -> Hexside {
        Self::ALL[(self as usize + 3) % 6]
    }

    /// Bitmask flag for this side.
    #[inline]
    pub const fn as_flag(self) -> Hexsides {
        Hexsides(1 << self as u8)
    }
}

impl fmt::Display for Hexside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Hexside::North => "N",
            Hexside::NorthEast => "NE",
            Hexside::SouthEast => "SE",
            Hexside::South => "S",
            Hexside::SouthWest => "SW",
            Hexside::NorthWest => "NW",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Hexsides
// ---------------------------------------------------------------------------

/// Bitmask of hexsides for multi-direction queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hexsides(pub u8);

impl Hexsides {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const NORTH_EAST: Self = Self(1 << 1);
    pub const SOUTH_EAST: Self = Self(1 << 2);
    pub const SOUTH: Self = Self(1 << 3);
    pub const SOUTH_WEST: Self = Self(1 << 4);
    pub const NORTH_WEST: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b0011_1111);

    /// Whether this mask contains all bits of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the individual sides set in this mask.
    pub fn iter(self) -> impl Iterator<Item = Hexside> {
        Hexside::ALL
            .into_iter()
            .filter(move |s| self.contains(s.as_flag()))
    }
}

impl std::ops::BitOr for Hexsides {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Hexsides {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for Hexsides {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<Hexside> for Hexsides {
    #[inline]
    fn from(side: Hexside) -> Self {
        side.as_flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_is_involution() {
        for side in Hexside::ALL {
            assert_eq!(side.reversed().reversed(), side);
            assert_ne!(side.reversed(), side);
        }
    }

    #[test]
    fn reversed_pairs() {
        assert_eq!(Hexside::North.reversed(), Hexside::South);
        assert_eq!(Hexside::NorthEast.reversed(), Hexside::SouthWest);
        assert_eq!(Hexside::SouthEast.reversed(), Hexside::NorthWest);
    }

    #[test]
    fn indices_are_clockwise_from_north() {
        for (i, side) in Hexside::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), i);
            assert_eq!(Hexside::from_index(i), side);
        }
        assert_eq!(Hexside::from_index(7), Hexside::NorthEast);
    }

    #[test]
    fn flags_are_disjoint() {
        let mut seen = Hexsides::NONE;
        for side in Hexside::ALL {
            assert!(!seen.contains(side.as_flag()));
            seen |= side.as_flag();
        }
        assert_eq!(seen, Hexsides::ALL);
    }

    #[test]
    fn mask_iter_round_trip() {
        let mask = Hexsides::NORTH | Hexsides::SOUTH_EAST | Hexsides::SOUTH_WEST;
        let sides: Vec<_> = mask.iter().collect();
        assert_eq!(
            sides,
            vec![Hexside::North, Hexside::SouthEast, Hexside::SouthWest]
        );
        assert!(!mask.contains(Hexsides::SOUTH));
        assert!(mask.contains(Hexsides::NORTH | Hexsides::SOUTH_WEST));
    }
}
