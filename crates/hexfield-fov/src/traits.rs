use hexfield_core::HexCoord;

/// What a map must expose for field-of-view computation.
///
/// All heights are absolute, measured from a common datum: a hex's
/// terrain stands on its ground elevation, and a target on a hex is
/// likewise reported at its absolute height. Implementations decide how
/// obstruction height relates to ground (walls, forests, nothing at all).
pub trait FovBoard {
    /// Whether `coord` lies on the map.
    fn is_on_board(&self, coord: HexCoord) -> bool;

    /// Ground elevation of `coord`, from the datum.
    fn elevation_asl(&self, coord: HexCoord) -> i32;

    /// Top of whatever blocks sight on `coord`, from the datum. A hex
    /// with nothing on it reports its ground elevation.
    fn terrain_height(&self, coord: HexCoord) -> i32;

    /// Height at which a target on `coord` is seen, from the datum.
    fn target_height(&self, coord: HexCoord) -> i32;

    /// Map extent in user-frame hexes `(width, height)`.
    fn map_size_hexes(&self) -> (i32, i32);
}
