//! Dual-frame hex coordinates: [`HexCoord`] and [`Neighbour`].
//!
//! A hex grid cell is addressed in two integer frames at once:
//!
//! - the **canonical** frame, an obtuse 120°-basis in which all distance and
//!   geometric math is done and every direction has a single offset vector;
//! - the **rectangular** ("user") frame, axis-aligned for storage indexing and
//!   display, where odd columns sit half a row lower than even columns.
//!
//! Conversion between the frames is the fixed change of basis
//! `canon = ((2,0),(1,2))/2 · user`, i.e. `cy = uy + ceil(ux/2)` with floor
//! rounding so negative columns behave the same as positive ones. Both frames
//! are stored; equality and hashing use the rectangular vector.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hexside::Hexside;

/// Canonical-frame offsets, one per [`Hexside`], clockwise from North.
///
/// Frame-independent: valid for every hex regardless of column parity.
const CANON_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, 0),   // NE
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
    (-1, -1), // NW
];

/// Rectangular-frame offsets for hexes in an even column.
const USER_OFFSETS_EVEN: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
    (-1, -1), // NW
];

/// Rectangular-frame offsets for hexes in an odd column.
const USER_OFFSETS_ODD: [(i32, i32); 6] = [
    (0, -1), // N
    (1, 0),  // NE
    (1, 1),  // SE
    (0, 1),  // S
    (-1, 1), // SW
    (-1, 0), // NW
];

/// `ceil(n / 2)` with floor semantics for negative `n`.
#[inline]
const fn ceil_half(n: i32) -> i32 {
    // Arithmetic shift right floors, so (n + 1) >> 1 == ceil(n / 2).
    (n + 1) >> 1
}

// ---------------------------------------------------------------------------
// HexCoord
// ---------------------------------------------------------------------------

/// A hex-grid coordinate holding both the canonical and rectangular vectors
/// of the same physical hex.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    cx: i32,
    cy: i32,
    ux: i32,
    uy: i32,
}

impl HexCoord {
    /// Origin in both frames.
    pub const ORIGIN: Self = Self {
        cx: 0,
        cy: 0,
        ux: 0,
        uy: 0,
    };

    /// Construct from rectangular (storage/display) coordinates.
    #[inline]
    pub const fn from_user(x: i32, y: i32) -> Self {
        Self {
            cx: x,
            cy: y + ceil_half(x),
            ux: x,
            uy: y,
        }
    }

    /// Construct from canonical (geometry) coordinates.
    #[inline]
    pub const fn from_canon(x: i32, y: i32) -> Self {
        Self {
            cx: x,
            cy: y,
            ux: x,
            uy: y - ceil_half(x),
        }
    }

    /// Rectangular-frame column.
    #[inline]
    pub const fn user_x(self) -> i32 {
        self.ux
    }

    /// Rectangular-frame row.
    #[inline]
    pub const fn user_y(self) -> i32 {
        self.uy
    }

    /// Canonical-frame x component.
    #[inline]
    pub const fn canon_x(self) -> i32 {
        self.cx
    }

    /// Canonical-frame y component.
    #[inline]
    pub const fn canon_y(self) -> i32 {
        self.cy
    }

    /// Canonical-frame vector from `self` to `other`.
    #[inline]
    pub const fn canon_delta(self, other: HexCoord) -> (i32, i32) {
        (other.cx - self.cx, other.cy - self.cy)
    }

    /// Hex-Manhattan distance to `other`.
    ///
    /// `(|dx| + |dy| + |dx - dy|) / 2` over canonical deltas. Symmetric,
    /// satisfies the triangle inequality, and zero iff the coordinates are
    /// equal.
    #[inline]
    pub const fn range(self, other: HexCoord) -> i32 {
        let dx = other.cx - self.cx;
        let dy = other.cy - self.cy;
        (dx.abs() + dy.abs() + (dx - dy).abs()) / 2
    }

    /// The single neighbour across the given side.
    #[inline]
    pub const fn neighbour(self, side: Hexside) -> HexCoord {
        let (dx, dy) = CANON_OFFSETS[side.index()];
        Self::from_canon(self.cx + dx, self.cy + dy)
    }

    /// All six neighbours with their exit side, clockwise from North.
    #[inline]
    pub fn neighbours(self) -> [Neighbour; 6] {
        Hexside::ALL.map(|side| Neighbour {
            coord: self.neighbour(side),
            exit: side,
        })
    }

    /// Rectangular-frame offset for `side` from a hex in this column.
    ///
    /// The offset depends on column parity because odd columns are shifted
    /// down half a row. Exposed for storage-layer code that walks the
    /// rectangular frame directly; equivalent to going through the
    /// canonical frame.
    #[inline]
    pub fn user_offset(self, side: Hexside) -> (i32, i32) {
        if self.ux.rem_euclid(2) == 0 {
            USER_OFFSETS_EVEN[side.index()]
        } else {
            USER_OFFSETS_ODD[side.index()]
        }
    }
}

// Equality is defined on the rectangular vector; the canonical vector is
// derived from it, so comparing one frame is comparing both.

impl PartialEq for HexCoord {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ux == other.ux && self.uy == other.uy
    }
}

impl Eq for HexCoord {}

impl Hash for HexCoord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ux.hash(state);
        self.uy.hash(state);
    }
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HexCoord {
    /// Row-major order over the rectangular frame.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.uy.cmp(&other.uy).then(self.ux.cmp(&other.ux))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ux, self.uy)
    }
}

// ---------------------------------------------------------------------------
// Neighbour
// ---------------------------------------------------------------------------

/// One edge traversal: the hex reached and the side it was exited through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbour {
    /// The hex on the far side of the edge.
    pub coord: HexCoord,
    /// The side of the *source* hex the step exited through.
    pub exit: Hexside,
}

impl Neighbour {
    /// The side of the destination hex the step entered through.
    ///
    /// Always `exit.reversed()`; derived rather than stored.
    #[inline]
    pub const fn entry(self) -> Hexside {
        self.exit.reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_canon_round_trip() {
        for x in -8..=8 {
            for y in -8..=8 {
                let c = HexCoord::from_user(x, y);
                let back = HexCoord::from_canon(c.canon_x(), c.canon_y());
                assert_eq!(back.user_x(), x);
                assert_eq!(back.user_y(), y);
                assert_eq!(back, c);
            }
        }
    }

    #[test]
    fn canon_user_round_trip() {
        for x in -8..=8 {
            for y in -8..=8 {
                let c = HexCoord::from_canon(x, y);
                let back = HexCoord::from_user(c.user_x(), c.user_y());
                assert_eq!(back.canon_x(), x);
                assert_eq!(back.canon_y(), y);
            }
        }
    }

    #[test]
    fn range_metric_laws() {
        let coords: Vec<HexCoord> = (-4..=4)
            .flat_map(|x| (-4..=4).map(move |y| HexCoord::from_user(x, y)))
            .collect();
        for &a in &coords {
            assert_eq!(a.range(a), 0);
            for &b in &coords {
                assert_eq!(a.range(b), b.range(a));
                assert!(a.range(b) > 0 || a == b);
                for &c in &coords {
                    assert!(a.range(c) <= a.range(b) + b.range(c));
                }
            }
        }
    }

    #[test]
    fn neighbours_are_at_range_one() {
        for x in -4..=4 {
            for y in -4..=4 {
                let h = HexCoord::from_user(x, y);
                for n in h.neighbours() {
                    assert_eq!(h.range(n.coord), 1, "{h} -> {} via {}", n.coord, n.exit);
                }
            }
        }
    }

    #[test]
    fn neighbour_involution() {
        for x in -4..=4 {
            for y in -4..=4 {
                let h = HexCoord::from_user(x, y);
                for side in Hexside::ALL {
                    assert_eq!(h.neighbour(side).neighbour(side.reversed()), h);
                }
            }
        }
    }

    #[test]
    fn neighbours_are_distinct() {
        let h = HexCoord::from_user(3, -2);
        let ns = h.neighbours();
        for i in 0..6 {
            for j in (i + 1)..6 {
                assert_ne!(ns[i].coord, ns[j].coord);
            }
        }
    }

    /// The parity-split rectangular offset tables must agree with the
    /// canonical-frame route for every column parity, including negative
    /// columns. This is the most error-prone part of hex-grid code.
    #[test]
    fn user_offsets_match_canonical_route() {
        for x in -5..=5 {
            for y in -5..=5 {
                let h = HexCoord::from_user(x, y);
                for side in Hexside::ALL {
                    let (dx, dy) = h.user_offset(side);
                    let via_table = HexCoord::from_user(x + dx, y + dy);
                    assert_eq!(
                        via_table,
                        h.neighbour(side),
                        "offset table mismatch at {h} side {side}"
                    );
                }
            }
        }
    }

    #[test]
    fn known_neighbours_even_column() {
        let h = HexCoord::from_user(0, 0);
        assert_eq!(h.neighbour(Hexside::North), HexCoord::from_user(0, -1));
        assert_eq!(h.neighbour(Hexside::NorthEast), HexCoord::from_user(1, -1));
        assert_eq!(h.neighbour(Hexside::SouthEast), HexCoord::from_user(1, 0));
        assert_eq!(h.neighbour(Hexside::South), HexCoord::from_user(0, 1));
        assert_eq!(h.neighbour(Hexside::SouthWest), HexCoord::from_user(-1, 0));
        assert_eq!(h.neighbour(Hexside::NorthWest), HexCoord::from_user(-1, -1));
    }

    #[test]
    fn known_neighbours_odd_column() {
        let h = HexCoord::from_user(1, 0);
        assert_eq!(h.neighbour(Hexside::North), HexCoord::from_user(1, -1));
        assert_eq!(h.neighbour(Hexside::NorthEast), HexCoord::from_user(2, 0));
        assert_eq!(h.neighbour(Hexside::SouthEast), HexCoord::from_user(2, 1));
        assert_eq!(h.neighbour(Hexside::South), HexCoord::from_user(1, 1));
        assert_eq!(h.neighbour(Hexside::SouthWest), HexCoord::from_user(0, 1));
        assert_eq!(h.neighbour(Hexside::NorthWest), HexCoord::from_user(0, 0));
    }

    #[test]
    fn entry_side_is_reversed_exit() {
        let h = HexCoord::from_user(2, 2);
        for n in h.neighbours() {
            assert_eq!(n.entry(), n.exit.reversed());
            // Walking back through the entry side returns home.
            assert_eq!(n.coord.neighbour(n.entry()), h);
        }
    }

    #[test]
    fn straight_line_range() {
        // Six hexes due South are six steps away.
        let a = HexCoord::from_user(0, 0);
        assert_eq!(a.range(HexCoord::from_user(0, 6)), 6);
        // Columns are adjacent.
        assert_eq!(a.range(HexCoord::from_user(1, 0)), 1);
        // Two columns over on the same row is two steps.
        assert_eq!(a.range(HexCoord::from_user(2, 0)), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn hexcoord_round_trip() {
        let c = HexCoord::from_user(-3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: HexCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.canon_x(), c.canon_x());
        assert_eq!(back.canon_y(), c.canon_y());
    }
}
