//! The priority-ordered open set shared by every search.

use std::collections::BinaryHeap;

use hexfield_core::HexCoord;

/// Bits reserved for the directional-preference tie-break.
const PREFERENCE_BITS: u32 = 16;
const PREFERENCE_MASK: u32 = (1 << PREFERENCE_BITS) - 1;

/// Build a composite frontier key from a cost estimate and a tie-break.
///
/// High 16 bits carry the admissible estimate (`g + h`), low 16 bits the
/// directional preference, so comparing keys compares estimates first and
/// the preference only distinguishes among equal estimates. The tie-break
/// exists purely for path aesthetics and never affects optimality.
///
/// Estimates must fit in 16 bits: larger values saturate at 65 535 and lose
/// their relative order, which forfeits the first-goal-dequeue optimality
/// guarantee. Debug builds assert on overflow.
#[inline]
pub(crate) fn search_key(estimate: i32, preference: u32) -> u32 {
    debug_assert!(estimate >= 0, "estimates are non-negative");
    debug_assert!(
        estimate <= PREFERENCE_MASK as i32,
        "estimate {estimate} exceeds the 16-bit key field"
    );
    let hi = (estimate as u32).min(PREFERENCE_MASK);
    (hi << PREFERENCE_BITS) | preference.min(PREFERENCE_MASK)
}

/// Extract the cost estimate from a composite key.
#[inline]
pub(crate) fn key_estimate(key: u32) -> i32 {
    (key >> PREFERENCE_BITS) as i32
}

/// Directional preference of `hex` for a search aimed along `start -> goal`.
///
/// The absolute cross product of the start-to-goal vector and the
/// start-to-hex vector, in canonical coordinates: zero on the straight
/// line to the goal, growing with angular deviation. Among equal-cost
/// paths the frontier then prefers the most colinear one.
#[inline]
pub(crate) fn preference(start: HexCoord, goal: HexCoord, hex: HexCoord) -> u32 {
    let (gx, gy) = start.canon_delta(goal);
    let (hx, hy) = start.canon_delta(hex);
    let cross = (gx as i64) * (hy as i64) - (gy as i64) * (hx as i64);
    cross.unsigned_abs().min(PREFERENCE_MASK as u64) as u32
}

// ---------------------------------------------------------------------------
// PriorityFrontier
// ---------------------------------------------------------------------------

/// Entry in the frontier heap, ordered by key for min-first popping.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry<T> {
    key: u32,
    value: T,
}

impl<T: Eq> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key.cmp(&self.key)
    }
}

impl<T: Eq> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue over 32-bit composite search keys.
///
/// Stale entries are tolerated: searches push a fresh entry on every cost
/// improvement and discard outdated ones at pop time, so no decrease-key
/// operation is needed.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T: Copy + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Queue `value` at `key`.
    #[inline]
    pub fn push(&mut self, key: u32, value: T) {
        self.heap.push(Entry { key, value });
    }

    /// Remove and return the minimum-key entry.
    #[inline]
    pub fn pop(&mut self) -> Option<(u32, T)> {
        self.heap.pop().map(|e| (e.key, e.value))
    }

    /// The current minimum key, if any.
    #[inline]
    pub fn peek_key(&self) -> Option<u32> {
        self.heap.peek().map(|e| e.key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: Copy + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
