use std::cmp::Ordering;
use std::fmt;

/// An exact line-of-sight pitch: `rise` height units over `run` hexes.
///
/// Compared by cross-multiplication in 64 bits, never by division, so two
/// pitches are ordered identically no matter which side of the comparison
/// they sit on. Floating point here would make visibility depend on
/// rounding direction and break reflective symmetry.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseRun {
    rise: i32,
    run: i32,
}

impl RiseRun {
    /// A pitch below every representable line of sight, used as the
    /// "nothing occluded yet" threshold of a fresh cone.
    pub const FLOOR: Self = Self {
        rise: i32::MIN,
        run: 1,
    };

    /// Build a pitch of `rise` over `run`. `run` must be positive.
    #[inline]
    pub fn new(rise: i32, run: i32) -> Self {
        debug_assert!(run > 0, "pitch run must be positive");
        Self { rise, run }
    }

    #[inline]
    pub fn rise(self) -> i32 {
        self.rise
    }

    #[inline]
    pub fn run(self) -> i32 {
        self.run
    }
}

impl PartialEq for RiseRun {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RiseRun {}

impl PartialOrd for RiseRun {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiseRun {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Runs are positive, so cross-multiplying preserves order.
        let lhs = self.rise as i64 * other.run as i64;
        let rhs = other.rise as i64 * self.run as i64;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for RiseRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rise, self.run)
    }
}
