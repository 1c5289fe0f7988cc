use std::cmp::Ordering;

use crate::riserun::RiseRun;

/// A yaw ratio `num / den` within a dodecant, with `0 < den`.
///
/// Yaw 0 is the dodecant's leading edge and 1/2 its trailing edge, so every
/// clipped slope lives in `[0, 1/2]`. Ordered by cross-multiplication like
/// [`RiseRun`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct Slope {
    pub num: i32,
    pub den: i32,
}

impl Slope {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const HALF: Self = Self { num: 1, den: 2 };

    #[inline]
    pub fn new(num: i32, den: i32) -> Self {
        debug_assert!(den > 0, "slope denominator must be positive");
        Self { num, den }
    }
}

impl PartialEq for Slope {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

impl PartialOrd for Slope {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slope {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i64 * other.den as i64;
        let rhs = other.num as i64 * self.den as i64;
        lhs.cmp(&rhs)
    }
}

/// One live segment of a dodecant sweep: the yaw interval still open to
/// the observer, together with the steepest obstruction pitch picked up
/// so far inside that interval.
#[derive(Copy, Clone, Debug)]
pub struct FovCone {
    pub(crate) top: Slope,
    pub(crate) bottom: Slope,
    pub(crate) rise_run: RiseRun,
}

impl FovCone {
    /// The whole-dodecant cone with no occlusion yet.
    pub(crate) fn full() -> Self {
        Self {
            top: Slope::ZERO,
            bottom: Slope::HALF,
            rise_run: RiseRun::FLOOR,
        }
    }
}
