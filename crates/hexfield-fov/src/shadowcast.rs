use log::trace;
use rayon::prelude::*;

use hexfield_core::HexCoord;

use crate::cone::{FovCone, Slope};
use crate::dodecant::{DODECANT_MATRICES, dodecant_hex};
use crate::error::FovError;
use crate::mask::VisibilityMask;
use crate::riserun::RiseRun;
use crate::traits::FovBoard;

/// Compute everything an observer on `origin`, with eyes `observer_height`
/// above the ground, can see out to `radius` hexes.
///
/// The ring around the observer is cut into twelve 30-degree sectors and
/// each sector is swept outward independently, so the whole computation
/// parallelises across sectors. Sector seams are swept by both
/// neighbouring sectors; the union keeps a hex visible whenever either
/// sweep can see it.
///
/// A hex is visible when the pitch up to its target height clears every
/// obstruction pitch accumulated between it and the observer. All pitch
/// comparisons are exact rational arithmetic.
pub fn compute_field_of_view<B: FovBoard + Sync>(
    board: &B,
    origin: HexCoord,
    radius: i32,
    observer_height: i32,
) -> Result<VisibilityMask, FovError> {
    if !board.is_on_board(origin) {
        return Err(FovError::OriginOffBoard(origin));
    }

    let (width, height) = board.map_size_hexes();
    let mut mask = VisibilityMask::new(width, height);
    mask.set(origin);
    if radius <= 0 {
        return Ok(mask);
    }

    let observer_asl = board.elevation_asl(origin) + observer_height;
    if board.terrain_height(origin) > observer_asl {
        // The observer's own hex rises above their eyes. Nothing beyond
        // it can be sighted.
        return Ok(mask);
    }

    let merged = (0..DODECANT_MATRICES.len())
        .into_par_iter()
        .map(|d| {
            let mut sector = VisibilityMask::new(width, height);
            sweep_dodecant(
                board,
                origin,
                &DODECANT_MATRICES[d],
                radius,
                observer_asl,
                &mut sector,
            );
            sector
        })
        .reduce(
            || VisibilityMask::new(width, height),
            |mut acc, sector| {
                acc.merge(&sector);
                acc
            },
        );
    mask.merge(&merged);

    trace!(
        "fov from {origin} radius {radius}: {} hexes visible",
        mask.count_visible()
    );
    Ok(mask)
}

/// Sweep one sector ring by ring, carrying the open cones forward.
fn sweep_dodecant<B: FovBoard>(
    board: &B,
    origin: HexCoord,
    mat: &[[i32; 2]; 2],
    radius: i32,
    observer_asl: i32,
    mask: &mut VisibilityMask,
) {
    let mut cones = vec![FovCone::full()];
    for r in 1..=radius {
        let mut next = Vec::with_capacity(cones.len() + 1);
        for cone in &cones {
            scan_cone(board, origin, mat, r, cone, observer_asl, mask, &mut next);
        }
        if next.is_empty() {
            break;
        }
        cones = next;
    }
}

/// Scan the hexes of ring `r` that overlap `cone`, marking visible ones
/// and emitting the cone's children for the next ring.
fn scan_cone<B: FovBoard>(
    board: &B,
    origin: HexCoord,
    mat: &[[i32; 2]; 2],
    r: i32,
    cone: &FovCone,
    observer_asl: i32,
    mask: &mut VisibilityMask,
    out: &mut Vec<FovCone>,
) {
    // Ring hex k spans yaw [(2k - 1) / 2r, (2k + 1) / 2r]. Keep the hexes
    // whose span overlaps the cone with positive width.
    let k_min = first_column_past(cone.top, r);
    let k_max = last_column_before(cone.bottom, r);

    for k in k_min..=k_max {
        let coord = dodecant_hex(origin, mat, r, k);
        let span_lo = cone.top.max(Slope::new(2 * k - 1, 2 * r));
        let span_hi = cone.bottom.min(Slope::new(2 * k + 1, 2 * r));

        let child_rise = if board.is_on_board(coord) {
            // Visibility is judged on the sight line to the hex's centre
            // yaw k/r; a clear sliver of cone off the centre line never
            // reveals the hex. Centre-line sight is mutual between hexes
            // at reciprocal heights.
            let centre = Slope::new(k, r);
            if cone.top <= centre && centre <= cone.bottom {
                let target = RiseRun::new(board.target_height(coord) - observer_asl, r);
                if target >= cone.rise_run {
                    mask.set(coord);
                }
            }
            let obstruction = RiseRun::new(board.terrain_height(coord) - observer_asl, r);
            cone.rise_run.max(obstruction)
        } else {
            // Off-board hexes neither show nor block.
            cone.rise_run
        };

        push_segment(
            out,
            FovCone {
                top: span_lo,
                bottom: span_hi,
                rise_run: child_rise,
            },
        );
    }
}

/// Smallest ring column whose span reaches strictly below `top`.
#[inline]
fn first_column_past(top: Slope, r: i32) -> i32 {
    // Smallest k with (2k + 1) / 2r > top, via floor division.
    let num = 2 * r as i64 * top.num as i64 - top.den as i64;
    let den = 2 * top.den as i64;
    (num.div_euclid(den) + 1) as i32
}

/// Largest ring column whose span starts strictly above `bottom`.
#[inline]
fn last_column_before(bottom: Slope, r: i32) -> i32 {
    // Largest k with (2k - 1) / 2r < bottom, via ceiling division.
    let num = 2 * r as i64 * bottom.num as i64 + bottom.den as i64;
    let den = 2 * bottom.den as i64;
    (-((-num).div_euclid(den)) - 1) as i32
}

/// Append a child segment, coalescing it with the previous one when the
/// occlusion pitch is unchanged across the shared edge.
fn push_segment(out: &mut Vec<FovCone>, seg: FovCone) {
    if let Some(last) = out.last_mut() {
        if last.rise_run == seg.rise_run && last.bottom == seg.top {
            last.bottom = seg.bottom;
            return;
        }
    }
    out.push(seg);
}
