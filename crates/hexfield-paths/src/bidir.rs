//! Bidirectional A*: two cooperating frontiers meeting in the middle.
//!
//! A forward search grows from the start under normal costs; a reverse
//! search grows from the goal, evaluating the cost of entering a hex as the
//! cost of exiting its neighbour through the reversed side. The halves
//! alternate strictly (one dequeue-and-expand step each), share one closed
//! set and one best-total-cost bound, and stop once no frontier can still
//! beat the bound. The halves are then spliced into a single path without
//! double-counting the meeting hex.

use std::sync::atomic::{AtomicBool, Ordering};

use hexfield_core::HexCoord;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::astar::{Pathfinder, check_endpoints};
use crate::error::PathError;
use crate::frontier::{PriorityFrontier, key_estimate, preference, search_key};
use crate::path::{NodeHandle, Path, PathArena, PathStep};
use crate::traits::Board;

/// One half of the bidirectional search.
pub(crate) struct DirectedSearch {
    /// The hex this frontier grows from (start for forward, goal for
    /// reverse).
    origin: HexCoord,
    /// The other endpoint, aimed at by the heuristic and the tie-break.
    target: HexCoord,
    /// Reverse halves evaluate edge costs in the forward direction of
    /// travel: entering a hex is priced as exiting the neighbour through
    /// the reversed side.
    reverse: bool,
    arena: PathArena,
    frontier: PriorityFrontier<NodeHandle>,
    /// Best discovered path per coordinate. Unlike the open set of plain
    /// A*, entries are kept after a coordinate is finalized so the partner
    /// can combine half-paths with it.
    paths: FxHashMap<HexCoord, NodeHandle>,
}

impl DirectedSearch {
    pub(crate) fn new() -> Self {
        Self {
            origin: HexCoord::ORIGIN,
            target: HexCoord::ORIGIN,
            reverse: false,
            arena: PathArena::new(),
            frontier: PriorityFrontier::new(),
            paths: FxHashMap::default(),
        }
    }

    fn init<B: Board>(&mut self, board: &B, origin: HexCoord, target: HexCoord, reverse: bool) {
        self.origin = origin;
        self.target = target;
        self.reverse = reverse;
        self.arena.clear();
        self.frontier.clear();
        self.paths.clear();
        let root = self.arena.root(origin);
        self.paths.insert(origin, root);
        self.frontier
            .push(search_key(board.heuristic(origin.range(target)), 0), root);
    }

    /// The estimate (`g + h`) of the cheapest open path, if any.
    fn frontier_minimum(&self) -> Option<i32> {
        self.frontier.peek_key().map(key_estimate)
    }
}

/// The best meeting found so far: a forward and a reverse half-path to the
/// same coordinate, and their combined total cost.
#[derive(Clone, Copy)]
struct Meeting {
    cost: i32,
    fwd: NodeHandle,
    rev: NodeHandle,
}

impl Pathfinder {
    /// Compute the shortest path from `start` to `goal` with bidirectional
    /// A*, returning a single merged path.
    ///
    /// Result and cost are equivalent to [`astar_path`](Self::astar_path);
    /// only the explored region (and therefore the tie-broken hex sequence)
    /// may differ.
    pub fn bidir_path<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
    ) -> Result<Option<Path>, PathError> {
        self.bidir_inner(board, start, goal, None)
    }

    /// Like [`bidir_path`](Self::bidir_path), checking `stop` once per
    /// alternation and returning [`PathError::Interrupted`] once raised.
    pub fn bidir_path_with_stop<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
        stop: &AtomicBool,
    ) -> Result<Option<Path>, PathError> {
        self.bidir_inner(board, start, goal, Some(stop))
    }

    fn bidir_inner<B: Board>(
        &mut self,
        board: &B,
        start: HexCoord,
        goal: HexCoord,
        stop: Option<&AtomicBool>,
    ) -> Result<Option<Path>, PathError> {
        check_endpoints(board, start, goal)?;

        if start == goal {
            let mut arena = PathArena::new();
            let root = arena.root(start);
            return Ok(Some(arena.extract(root)));
        }

        self.fwd.init(board, start, goal, false);
        self.rev.init(board, goal, start, true);
        self.shared_closed.clear();

        let mut best: Option<Meeting> = None;

        loop {
            if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                return Err(PathError::Interrupted);
            }
            if proven_optimal(&best, &self.fwd, &self.rev) {
                break;
            }
            if self.fwd.frontier.is_empty() && self.rev.frontier.is_empty() {
                break;
            }
            step_half(&mut self.fwd, &self.rev, &mut self.shared_closed, board, &mut best);
            if proven_optimal(&best, &self.fwd, &self.rev) {
                break;
            }
            step_half(&mut self.rev, &self.fwd, &mut self.shared_closed, board, &mut best);
        }

        match best {
            Some(meeting) => {
                let path = splice(&self.fwd, &self.rev, meeting);
                debug!("bidir: {start} -> {goal} cost {}", path.total_cost());
                Ok(Some(path))
            }
            None => {
                debug!("bidir: {start} -> {goal} unreachable");
                Ok(None)
            }
        }
    }
}

/// Whether `best` can no longer be improved by either frontier.
///
/// Any path not yet recorded must still come off one of the frontiers, and
/// costs at least that frontier's minimum estimate; taking the smaller of
/// the two available minima is therefore always conservative.
fn proven_optimal(
    best: &Option<Meeting>,
    fwd: &DirectedSearch,
    rev: &DirectedSearch,
) -> bool {
    let Some(meeting) = best else {
        return false;
    };
    let lower = match (fwd.frontier_minimum(), rev.frontier_minimum()) {
        (None, None) => return true,
        (Some(f), None) => f,
        (None, Some(r)) => r,
        (Some(f), Some(r)) => f.min(r),
    };
    meeting.cost <= lower
}

/// One dequeue-and-expand turn for `half`.
fn step_half<B: Board>(
    half: &mut DirectedSearch,
    partner: &DirectedSearch,
    closed: &mut FxHashSet<HexCoord>,
    board: &B,
    best: &mut Option<Meeting>,
) {
    let Some((_, handle)) = half.frontier.pop() else {
        return;
    };
    let coord = half.arena.coord(handle);
    // Superseded by a cheaper relaxation, or already finalized by either
    // half.
    if half.paths.get(&coord) != Some(&handle) || !closed.insert(coord) {
        return;
    }

    let g = half.arena.cost(handle);

    // Conservative pruning: the partner's frontier minimum, minus the
    // heuristic toward the partner's own target (this half's origin),
    // bounds from below any completion the partner could still provide
    // through this hex. With a consistent heuristic the bound telescopes
    // along any remaining partner path, so pruning on it never discards
    // the optimal path.
    if let Some(meeting) = best.as_ref() {
        if let Some(partner_min) = partner.frontier_minimum() {
            let completion = partner_min - board.heuristic(coord.range(half.origin));
            if g + completion >= meeting.cost {
                return;
            }
        }
    }

    for n in coord.neighbours() {
        if !board.is_on_board(n.coord) || closed.contains(&n.coord) {
            continue;
        }
        let step = if half.reverse {
            board.step_cost(n.coord, n.exit.reversed())
        } else {
            board.step_cost(coord, n.exit)
        };
        if step <= 0 {
            continue;
        }
        let cost = g + step;
        if let Some(&seen) = half.paths.get(&n.coord) {
            if half.arena.cost(seen) <= cost {
                continue;
            }
        }
        let next = half.arena.extend(handle, n.coord, n.entry(), cost);
        half.paths.insert(n.coord, next);
        let key = search_key(
            cost + board.heuristic(n.coord.range(half.target)),
            preference(half.origin, half.target, n.coord),
        );
        half.frontier.push(key, next);

        // If the partner already has a path to this hex, the two halves
        // form a complete candidate.
        if let Some(&other) = partner.paths.get(&n.coord) {
            let combined = cost + partner.arena.cost(other);
            if best.as_ref().is_none_or(|m| combined < m.cost) {
                let (fwd, rev) = if half.reverse { (other, next) } else { (next, other) };
                *best = Some(Meeting {
                    cost: combined,
                    fwd,
                    rev,
                });
            }
        }
    }
}

/// Splice the two half-paths of `meeting` into one continuous path.
///
/// The forward half is taken as-is; the reverse half is walked from the
/// meeting hex back toward the goal, re-annotating each step with its
/// cumulative forward cost. The meeting hex itself appears exactly once, so
/// its cost is never double-counted.
fn splice(fwd: &DirectedSearch, rev: &DirectedSearch, meeting: Meeting) -> Path {
    let forward = fwd.arena.extract(meeting.fwd);
    let fwd_total = forward.total_cost();
    let mut steps: Vec<PathStep> = forward.steps().to_vec();

    let rev_at_meeting = rev.arena.cost(meeting.rev);
    let mut cur = meeting.rev;
    while let Some(parent) = rev.arena.parent(cur) {
        // The side of `cur` the reverse walk entered through faces the
        // parent, so forward travel exits through it.
        let exit = rev
            .arena
            .entry(cur)
            .expect("non-root reverse node has an entry side");
        let cumulative = fwd_total + (rev_at_meeting - rev.arena.cost(parent));
        steps.push(PathStep {
            coord: rev.arena.coord(parent),
            entered_via: Some(exit.reversed()),
            cost: cumulative,
        });
        cur = parent;
    }

    Path::from_steps(steps, fwd_total + rev_at_meeting)
}
