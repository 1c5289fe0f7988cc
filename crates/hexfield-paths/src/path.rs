//! Persistent search paths: an arena of immutable, prefix-sharing nodes.

use hexfield_core::{HexCoord, Hexside};

/// Handle of a path node inside a [`PathArena`].
pub(crate) type NodeHandle = u32;

/// Sentinel parent handle for a path's origin node.
const NO_PARENT: NodeHandle = NodeHandle::MAX;

/// One immutable node of a search path.
///
/// Extending a path allocates a new node pointing back at its predecessor;
/// existing nodes are never mutated, so many frontier paths share common
/// prefixes inside the same arena.
#[derive(Clone, Copy)]
struct ArenaNode {
    parent: NodeHandle,
    coord: HexCoord,
    /// Side of `coord` the path entered through; `None` at the origin.
    entry: Option<Hexside>,
    /// Total accumulated cost from the path's origin.
    cost: i32,
}

/// Arena allocator for search-path nodes.
///
/// Cleared and reused across queries; handles are only meaningful for the
/// query that created them.
pub(crate) struct PathArena {
    nodes: Vec<ArenaNode>,
}

impl PathArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Start a new path at `coord` with cost zero.
    pub(crate) fn root(&mut self, coord: HexCoord) -> NodeHandle {
        self.push(ArenaNode {
            parent: NO_PARENT,
            coord,
            entry: None,
            cost: 0,
        })
    }

    /// Extend the path at `parent` by one step.
    pub(crate) fn extend(
        &mut self,
        parent: NodeHandle,
        coord: HexCoord,
        entry: Hexside,
        cost: i32,
    ) -> NodeHandle {
        self.push(ArenaNode {
            parent,
            coord,
            entry: Some(entry),
            cost,
        })
    }

    fn push(&mut self, node: ArenaNode) -> NodeHandle {
        let handle = self.nodes.len() as NodeHandle;
        self.nodes.push(node);
        handle
    }

    #[inline]
    pub(crate) fn cost(&self, handle: NodeHandle) -> i32 {
        self.nodes[handle as usize].cost
    }

    #[inline]
    pub(crate) fn coord(&self, handle: NodeHandle) -> HexCoord {
        self.nodes[handle as usize].coord
    }

    #[inline]
    pub(crate) fn entry(&self, handle: NodeHandle) -> Option<Hexside> {
        self.nodes[handle as usize].entry
    }

    #[inline]
    pub(crate) fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let p = self.nodes[handle as usize].parent;
        (p != NO_PARENT).then_some(p)
    }

    /// Materialize the path ending at `handle`, origin first.
    pub(crate) fn extract(&self, handle: NodeHandle) -> Path {
        let mut steps = Vec::new();
        let mut cur = Some(handle);
        while let Some(h) = cur {
            let node = &self.nodes[h as usize];
            steps.push(PathStep {
                coord: node.coord,
                entered_via: node.entry,
                cost: node.cost,
            });
            cur = self.parent(h);
        }
        steps.reverse();
        let total_cost = self.cost(handle);
        Path { steps, total_cost }
    }
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// One step of an extracted [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    /// The hex reached by this step.
    pub coord: HexCoord,
    /// Side of `coord` the path entered through; `None` at the origin.
    pub entered_via: Option<Hexside>,
    /// Accumulated cost from the origin up to and including this step.
    pub cost: i32,
}

/// A finished path from origin to destination, origin first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<PathStep>,
    total_cost: i32,
}

impl Path {
    pub(crate) fn from_steps(steps: Vec<PathStep>, total_cost: i32) -> Self {
        Self { steps, total_cost }
    }

    /// The steps of the path, origin first. Never empty.
    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Total accumulated cost from origin to destination.
    #[inline]
    pub fn total_cost(&self) -> i32 {
        self.total_cost
    }

    /// Number of hexes on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First hex of the path.
    #[inline]
    pub fn start(&self) -> HexCoord {
        self.steps[0].coord
    }

    /// Last hex of the path.
    #[inline]
    pub fn goal(&self) -> HexCoord {
        self.steps[self.steps.len() - 1].coord
    }
}
