//! Test fixtures: a simple rectangular hex board and a brute-force oracle.

use hexfield_core::{HexCoord, Hexside};
use rustc_hash::FxHashMap;

use crate::traits::Board;

/// A `width` x `height` rectangular test board with per-hex terrain cost.
///
/// Stepping onto a hex costs that hex's terrain cost (default 1); a cost
/// of zero marks the hex impassable. This models per-hexside cost as
/// "cost of the hex being entered", the common wargame convention.
pub(crate) struct GridBoard {
    width: i32,
    height: i32,
    terrain: FxHashMap<(i32, i32), i32>,
    /// Per-hexside overrides; takes precedence over the terrain cost of
    /// the destination, so edges can cost differently per direction.
    exit_costs: FxHashMap<(i32, i32, usize), i32>,
}

impl GridBoard {
    /// An open board where every hex costs 1 to enter.
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            terrain: FxHashMap::default(),
            exit_costs: FxHashMap::default(),
        }
    }

    pub(crate) fn set_terrain_cost(&mut self, x: i32, y: i32, cost: i32) {
        self.terrain.insert((x, y), cost);
    }

    pub(crate) fn set_impassable(&mut self, x: i32, y: i32) {
        self.terrain.insert((x, y), 0);
    }

    /// Override the cost of leaving `(x, y)` through `side` only.
    pub(crate) fn set_exit_cost(&mut self, x: i32, y: i32, side: Hexside, cost: i32) {
        self.exit_costs.insert((x, y, side.index()), cost);
    }

    fn entry_cost(&self, coord: HexCoord) -> i32 {
        self.terrain
            .get(&(coord.user_x(), coord.user_y()))
            .copied()
            .unwrap_or(1)
    }
}

impl Board for GridBoard {
    fn is_on_board(&self, coord: HexCoord) -> bool {
        (0..self.width).contains(&coord.user_x()) && (0..self.height).contains(&coord.user_y())
    }

    fn step_cost(&self, coord: HexCoord, exit: Hexside) -> i32 {
        let dest = coord.neighbour(exit);
        if !self.is_on_board(dest) {
            return 0;
        }
        self.exit_costs
            .get(&(coord.user_x(), coord.user_y(), exit.index()))
            .copied()
            .unwrap_or_else(|| self.entry_cost(dest))
    }

    fn heuristic(&self, range: i32) -> i32 {
        // Cheapest possible step is 1, so range itself is admissible.
        range
    }
}

/// Brute-force shortest-path oracle: Bellman-Ford-style relaxation over
/// every hex until a fixed point. Obviously correct and hopelessly slow.
pub(crate) fn brute_force_cost<B: Board>(
    board: &B,
    start: HexCoord,
    goal: HexCoord,
) -> Option<i32> {
    let mut dist: FxHashMap<HexCoord, i32> = FxHashMap::default();
    dist.insert(start, 0);
    loop {
        let mut changed = false;
        let coords: Vec<(HexCoord, i32)> = dist.iter().map(|(&c, &d)| (c, d)).collect();
        for (coord, d) in coords {
            for n in coord.neighbours() {
                if !board.is_on_board(n.coord) {
                    continue;
                }
                let step = board.step_cost(coord, n.exit);
                if step <= 0 {
                    continue;
                }
                let cand = d + step;
                if dist.get(&n.coord).is_none_or(|&cur| cand < cur) {
                    dist.insert(n.coord, cand);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.get(&goal).copied()
}
