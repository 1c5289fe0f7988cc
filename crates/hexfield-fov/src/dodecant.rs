use hexfield_core::HexCoord;

/// The twelve 30-degree sector transforms, as 2x2 integer matrices over
/// canonical coordinates. The first six are successive 60-degree
/// rotations; the second six compose each rotation with the reflection
/// that swaps a sector with its mirror across the north axis. Together
/// they map the zero sector onto the full ring.
pub(crate) const DODECANT_MATRICES: [[[i32; 2]; 2]; 12] = [
    [[1, 0], [0, 1]],
    [[1, -1], [1, 0]],
    [[0, -1], [1, -1]],
    [[-1, 0], [0, -1]],
    [[-1, 1], [-1, 0]],
    [[0, 1], [-1, 1]],
    [[-1, 0], [-1, 1]],
    [[0, -1], [-1, 0]],
    [[1, -1], [0, -1]],
    [[1, 0], [1, -1]],
    [[0, 1], [1, 0]],
    [[-1, 1], [0, 1]],
];

/// The hex at ring distance `r`, column `k` of the zero sector, pushed
/// through `mat` and re-anchored at `origin`. In the zero sector the ring
/// runs due north, so column `k` sits at canonical delta `(k, k - r)`.
#[inline]
pub(crate) fn dodecant_hex(origin: HexCoord, mat: &[[i32; 2]; 2], r: i32, k: i32) -> HexCoord {
    let (lx, ly) = (k, k - r);
    let dx = mat[0][0] * lx + mat[0][1] * ly;
    let dy = mat[1][0] * lx + mat[1][1] * ly;
    HexCoord::from_canon(origin.canon_x() + dx, origin.canon_y() + dy)
}
