use hexfield_core::{HexCoord, Hexside};

/// Capability interface to an immutable board snapshot.
///
/// This is the only boundary between the search core and the world: pure
/// queries over coordinates, never mutated by a search and never calling
/// back into it.
pub trait Board {
    /// Whether `coord` is a valid hex of this board.
    fn is_on_board(&self, coord: HexCoord) -> bool;

    /// Cost of leaving `coord` through `exit`.
    ///
    /// A non-positive value means the hexside cannot be traversed.
    fn step_cost(&self, coord: HexCoord, exit: Hexside) -> i32;

    /// Admissible estimate of the remaining cost over `range` hexes.
    ///
    /// Must be monotonic and must never overestimate the true remaining
    /// cost, or the searches silently degrade to suboptimal (but still
    /// terminating) results. This contract is the caller's to uphold; it
    /// is spot-checked only in debug builds.
    fn heuristic(&self, range: i32) -> i32;

    /// Advisory Manhattan-range threshold above which a caller might
    /// prefer a concurrency-friendly frontier backing.
    ///
    /// The single frontier implementation in this crate preserves ordering
    /// and tie-break semantics at every range, so the default is only ever
    /// consulted by callers with their own scheduling policy.
    fn range_cutoff(&self) -> i32 {
        i32::MAX
    }
}
