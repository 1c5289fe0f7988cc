use hexfield_core::HexCoord;

/// A per-hex visibility grid covering the whole map, indexed by user
/// coordinates with `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityMask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl VisibilityMask {
    /// An all-hidden mask for a `width` by `height` map.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width >= 0 && height >= 0);
        Self {
            width,
            height,
            bits: vec![false; (width * height).max(0) as usize],
        }
    }

    #[inline]
    fn index(&self, coord: HexCoord) -> Option<usize> {
        let (x, y) = (coord.user_x(), coord.user_y());
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Mark `coord` visible. Off-map coordinates are ignored.
    #[inline]
    pub fn set(&mut self, coord: HexCoord) {
        if let Some(i) = self.index(coord) {
            self.bits[i] = true;
        }
    }

    /// Whether `coord` is visible. Off-map coordinates are hidden.
    #[inline]
    pub fn visible(&self, coord: HexCoord) -> bool {
        self.index(coord).is_some_and(|i| self.bits[i])
    }

    /// Fold another mask of the same extent into this one.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (dst, src) in self.bits.iter_mut().zip(&other.bits) {
            *dst |= src;
        }
    }

    /// Number of visible hexes.
    pub fn count_visible(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Every visible hex, in row-major user order.
    pub fn iter_visible(&self) -> impl Iterator<Item = HexCoord> + '_ {
        let width = self.width;
        self.bits.iter().enumerate().filter_map(move |(i, b)| {
            if *b {
                Some(HexCoord::from_user(i as i32 % width, i as i32 / width))
            } else {
                None
            }
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_hidden() {
        let mask = VisibilityMask::new(4, 3);
        assert_eq!(mask.count_visible(), 0);
        assert!(!mask.visible(HexCoord::from_user(0, 0)));
    }

    #[test]
    fn set_and_query() {
        let mut mask = VisibilityMask::new(4, 3);
        mask.set(HexCoord::from_user(2, 1));
        assert!(mask.visible(HexCoord::from_user(2, 1)));
        assert!(!mask.visible(HexCoord::from_user(1, 2)));
        assert_eq!(mask.count_visible(), 1);
    }

    #[test]
    fn off_map_is_hidden_and_set_is_ignored() {
        let mut mask = VisibilityMask::new(2, 2);
        mask.set(HexCoord::from_user(-1, 0));
        mask.set(HexCoord::from_user(2, 0));
        assert_eq!(mask.count_visible(), 0);
        assert!(!mask.visible(HexCoord::from_user(5, 5)));
    }

    #[test]
    fn merge_is_union() {
        let mut a = VisibilityMask::new(3, 1);
        let mut b = VisibilityMask::new(3, 1);
        a.set(HexCoord::from_user(0, 0));
        b.set(HexCoord::from_user(2, 0));
        a.merge(&b);
        let seen: Vec<_> = a.iter_visible().collect();
        assert_eq!(
            seen,
            vec![HexCoord::from_user(0, 0), HexCoord::from_user(2, 0)]
        );
    }
}
