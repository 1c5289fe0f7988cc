//! Pathfinding algorithms for hexagonal grids.
//!
//! This crate provides shortest-path search between hexes under per-hexside
//! terrain cost, consumed through the [`Board`] capability trait:
//!
//! - **Unidirectional A\*** ([`Pathfinder::astar_path`]): classic
//!   single-frontier search with coordinate-keyed cost relaxation.
//! - **Bidirectional A\*** ([`Pathfinder::bidir_path`]): two cooperating
//!   frontiers (forward from the start, reverse from the goal) meeting in
//!   the middle under a shared best-cost bound.
//!
//! Both searches operate through [`Pathfinder`], which owns and reuses all
//! internal caches (path arenas, frontiers, open/closed sets) so repeated
//! queries incur no allocations after warm-up. "No path exists" is the
//! normal `Ok(None)` outcome; off-board endpoints are caller bugs and fail
//! fast with a [`PathError`].

mod astar;
mod bidir;
mod error;
mod frontier;
mod path;
mod traits;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::PathError;
pub use frontier::PriorityFrontier;
pub use path::{Path, PathStep};
pub use traits::Board;

pub use astar::Pathfinder;
