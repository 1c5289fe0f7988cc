use std::sync::atomic::{AtomicBool, Ordering};

use hexfield_core::HexCoord;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::bidir::DirectedSearch;
use crate::error::PathError;
use crate::frontier::{PriorityFrontier, preference, search_key};
use crate::path::{NodeHandle, Path, PathArena};
use crate::traits::Board;

/// Central coordinator for path queries on a hex board.
///
/// `Pathfinder` owns all internal caches (path arenas, frontiers, open and
/// closed sets for both the unidirectional and the bidirectional search) so
/// that repeated queries incur no allocations after the first use. Queries
/// themselves are stateless given a board snapshot: nothing carries over
/// between calls except capacity.
pub struct Pathfinder {
    // Unidirectional A* caches
    pub(crate) arena: PathArena,
    pub(crate) frontier: PriorityFrontier<NodeHandle>,
    pub(crate) open: FxHashMap<HexCoord, NodeHandle>,
    pub(crate) closed: FxHashSet<HexCoord>,
    // Bidirectional caches
    pub(crate) fwd: DirectedSearch,
    pub(crate) rev: DirectedSearch,
    pub(crate) shared_closed: FxHashSet<HexCoord>,
}

impl Pathfinder {
    pub fn new() -> Self {
        Self {
            arena: PathArena::new(),
            frontier: PriorityFrontier::new(),
            open: FxHashMap::default(),
            closed: FxHashSet::default(),
            fwd: DirectedSearch::new(),
            rev: DirectedSearch::new(),
            shared_closed: FxHashSet::default(),
        }
    }

    /// Compute the shortest path from `start` to `goal` using A*.
    ///
    /// Returns the full path (both endpoints included) or `Ok(None)` if no
    /// path exists. Off-board endpoints are precondition violations and
    /// fail fast with a [`PathError`].
    pub fn astar_path<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
    ) -> Result<Option<Path>, PathError> {
        self.astar_inner(board, start, goal, None)
    }

    /// Like [`astar_path`](Self::astar_path), checking `stop` once per
    /// dequeue and returning [`PathError::Interrupted`] once it is raised.
    pub fn astar_path_with_stop<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
        stop: &AtomicBool,
    ) -> Result<Option<Path>, PathError> {
        self.astar_inner(board, start, goal, Some(stop))
    }

    fn astar_inner<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
        stop: Option<&AtomicBool>,
    ) -> Result<Option<Path>, PathError> {
        check_endpoints(board, start, goal)?;

        self.arena.clear();
        self.frontier.clear();
        self.open.clear();
        self.closed.clear();

        let root = self.arena.root(start);
        if start == goal {
            return Ok(Some(self.arena.extract(root)));
        }

        self.open.insert(start, root);
        self.frontier
            .push(search_key(board.heuristic(start.range(goal)), 0), root);

        while let Some((_, handle)) = self.frontier.pop() {
            if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                return Err(PathError::Interrupted);
            }

            let coord = self.arena.coord(handle);
            // Skip entries superseded by a cheaper relaxation.
            if self.open.get(&coord) != Some(&handle) {
                continue;
            }
            if coord == goal {
                // First dequeue of the goal is optimal under an admissible,
                // monotonic heuristic.
                let path = self.arena.extract(handle);
                debug!("astar: {start} -> {goal} cost {}", path.total_cost());
                return Ok(Some(path));
            }
            if !self.closed.insert(coord) {
                continue;
            }

            let g = self.arena.cost(handle);
            for n in coord.neighbours() {
                if !board.is_on_board(n.coord) || self.closed.contains(&n.coord) {
                    continue;
                }
                let step = board.step_cost(coord, n.exit);
                if step <= 0 {
                    continue;
                }
                let cost = g + step;
                if let Some(&seen) = self.open.get(&n.coord) {
                    if self.arena.cost(seen) <= cost {
                        continue;
                    }
                }
                let next = self.arena.extend(handle, n.coord, n.entry(), cost);
                self.open.insert(n.coord, next);
                let key = search_key(
                    cost + board.heuristic(n.coord.range(goal)),
                    preference(start, goal, n.coord),
                );
                self.frontier.push(key, next);
            }
        }

        debug!("astar: {start} -> {goal} unreachable");
        Ok(None)
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Endpoint preconditions shared by both searches, plus a debug-build
/// spot-check of heuristic monotonicity (a full check is impossible here;
/// admissibility is the board implementor's contract).
pub(crate) fn check_endpoints<B: Board>(
    board: &B,
    start: HexCoord,
    goal: HexCoord,
) -> Result<(), PathError> {
    if !board.is_on_board(start) {
        return Err(PathError::StartOffBoard(start));
    }
    if !board.is_on_board(goal) {
        return Err(PathError::GoalOffBoard(goal));
    }
    debug_assert!(
        board.heuristic(0) <= board.heuristic(1) && board.heuristic(1) <= board.heuristic(4),
        "board heuristic must be monotonic in range"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{GridBoard, brute_force_cost};
    use std::sync::atomic::AtomicBool;

    #[test]
    fn off_board_endpoints_fail_fast() {
        let board = GridBoard::open(5, 5);
        let mut pf = Pathfinder::new();
        let inside = HexCoord::from_user(2, 2);
        let outside = HexCoord::from_user(9, 9);

        assert_eq!(
            pf.astar_path(&board, outside, inside),
            Err(PathError::StartOffBoard(outside))
        );
        assert_eq!(
            pf.astar_path(&board, inside, outside),
            Err(PathError::GoalOffBoard(outside))
        );
    }

    #[test]
    fn trivial_start_equals_goal() {
        let board = GridBoard::open(3, 3);
        let mut pf = Pathfinder::new();
        let h = HexCoord::from_user(1, 1);
        let path = pf.astar_path(&board, h, h).unwrap().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_cost(), 0);
    }

    #[test]
    fn open_board_path_is_straight_cost() {
        let board = GridBoard::open(7, 7);
        let mut pf = Pathfinder::new();
        let start = HexCoord::from_user(0, 3);
        let goal = HexCoord::from_user(6, 3);
        let path = pf.astar_path(&board, start, goal).unwrap().unwrap();
        // Uniform cost 1 per step: total equals the hex range.
        assert_eq!(path.total_cost(), start.range(goal));
        assert_eq!(path.start(), start);
        assert_eq!(path.goal(), goal);
        // Steps are contiguous and cost-monotone.
        for pair in path.steps().windows(2) {
            assert_eq!(pair[0].coord.range(pair[1].coord), 1);
            assert!(pair[0].cost < pair[1].cost);
        }
    }

    #[test]
    fn routes_through_wall_gap() {
        // A high-cost wall row with a single cheap gap: the optimal path
        // must detour through the gap.
        let mut board = GridBoard::open(5, 5);
        for x in 0..5 {
            if x != 2 {
                board.set_terrain_cost(x, 2, 100);
            }
        }
        let mut pf = Pathfinder::new();
        let start = HexCoord::from_user(0, 0);
        let goal = HexCoord::from_user(4, 4);

        let path = pf.astar_path(&board, start, goal).unwrap().unwrap();
        let brute = brute_force_cost(&board, start, goal).unwrap();
        assert_eq!(path.total_cost(), brute);
        assert!(
            path.steps()
                .iter()
                .any(|s| s.coord == HexCoord::from_user(2, 2)),
            "optimal path must pass through the gap"
        );
    }

    #[test]
    fn no_path_across_barrier() {
        // An unbroken impassable column partitions the board.
        let mut board = GridBoard::open(5, 5);
        for y in 0..5 {
            board.set_impassable(2, y);
        }
        let mut pf = Pathfinder::new();
        let res = pf
            .astar_path(
                &board,
                HexCoord::from_user(0, 2),
                HexCoord::from_user(4, 2),
            )
            .unwrap();
        assert!(res.is_none());
    }

    #[test]
    fn respects_per_hex_costs() {
        let mut board = GridBoard::open(3, 3);
        // Make the middle column expensive but passable.
        for y in 0..3 {
            board.set_terrain_cost(1, y, 5);
        }
        let mut pf = Pathfinder::new();
        let start = HexCoord::from_user(0, 1);
        let goal = HexCoord::from_user(2, 1);
        let path = pf.astar_path(&board, start, goal).unwrap().unwrap();
        assert_eq!(
            path.total_cost(),
            brute_force_cost(&board, start, goal).unwrap()
        );
    }

    #[test]
    fn stop_flag_interrupts() {
        let board = GridBoard::open(10, 10);
        let mut pf = Pathfinder::new();
        let stop = AtomicBool::new(true);
        let res = pf.astar_path_with_stop(
            &board,
            HexCoord::from_user(0, 0),
            HexCoord::from_user(9, 9),
            &stop,
        );
        assert_eq!(res, Err(PathError::Interrupted));
    }
}
