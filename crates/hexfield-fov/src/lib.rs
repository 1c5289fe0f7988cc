//! Elevation-aware field of view on hexagonal grids.
//!
//! Visibility is computed by recursive shadow casting over the 12-fold
//! symmetry of the hex grid: the plane around the observer decomposes into
//! twelve 30° **dodecants**, each swept independently outward range by
//! range with a queue of visibility cones. Cone boundaries are exact
//! rational yaw slopes and every pitch comparison uses the exact rational
//! [`RiseRun`] ordering, with no floating point anywhere, so visibility
//! is deterministic and reflectively symmetric.
//!
//! The observer's world is supplied through the [`FovBoard`] capability
//! trait; results land in a monotone [`VisibilityMask`]. The twelve sweeps
//! are mutually independent and run as rayon fork-join tasks over private
//! masks merged after the join.

mod cone;
mod dodecant;
mod error;
mod mask;
mod riserun;
mod shadowcast;
mod traits;

pub use cone::FovCone;
pub use error::FovError;
pub use mask::VisibilityMask;
pub use riserun::RiseRun;
pub use shadowcast::compute_field_of_view;
pub use traits::FovBoard;
