//! Per-run search tables, kept in a flat arena keyed by
//! [`Bounds::index`](pathstep_core::Bounds::index).

use pathstep_core::{Bounds, Pos};

/// Sentinel for "+∞" in the score tables.
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Node {
    const FRESH: Node = Node {
        g: UNREACHABLE,
        f: UNREACHABLE,
        parent: NO_PARENT,
        generation: 0,
        open: false,
        closed: false,
    };
}

/// Open list, closed flags and score tables for one run.
///
/// Resetting bumps a generation counter instead of clearing the arena:
/// nodes stamped with an older generation read as fresh.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    pub(crate) bounds: Bounds,
    nodes: Vec<Node>,
    generation: u32,
    /// Frontier in insertion order. Order matters for tie-breaking.
    open: Vec<usize>,
    closed: usize,
}

impl SearchState {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::FRESH; bounds.len()],
            generation: 1,
            open: Vec::new(),
            closed: 0,
        }
    }

    /// Forget the previous run, reallocating only when `bounds` grew.
    pub(crate) fn reset(&mut self, bounds: Bounds) {
        self.open.clear();
        self.closed = 0;
        self.bounds = bounds;
        if bounds.len() > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(bounds.len(), Node::FRESH);
            self.generation = 1;
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale stamps could collide, so clear for real.
            self.nodes.fill(Node::FRESH);
            self.generation = 1;
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> Node {
        let n = self.nodes[idx];
        if n.generation == self.generation {
            n
        } else {
            Node::FRESH
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::FRESH
            };
        }
        n
    }

    /// Append `idx` to the frontier unless it is already there.
    pub(crate) fn push_open(&mut self, idx: usize) {
        let n = self.node_mut(idx);
        if n.open {
            return;
        }
        n.open = true;
        self.open.push(idx);
    }

    /// Remove and return the frontier entry with the smallest `f`.
    ///
    /// Ties go to the earliest inserted entry: a later entry only wins with a
    /// strictly smaller score.
    pub(crate) fn pop_best(&mut self) -> Option<usize> {
        let first = *self.open.first()?;
        let mut best = 0;
        let mut best_f = self.node(first).f;
        for (i, &idx) in self.open.iter().enumerate().skip(1) {
            let f = self.node(idx).f;
            if f < best_f {
                best = i;
                best_f = f;
            }
        }
        let idx = self.open.remove(best);
        self.node_mut(idx).open = false;
        Some(idx)
    }

    /// Move `idx` into the closed set.
    pub(crate) fn close(&mut self, idx: usize) {
        let n = self.node_mut(idx);
        if !n.closed {
            n.closed = true;
            self.closed += 1;
        }
    }

    #[inline]
    pub(crate) fn open_len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub(crate) fn closed_count(&self) -> usize {
        self.closed
    }

    /// Frontier cells in insertion order.
    pub(crate) fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.open.iter().map(|&i| self.bounds.pos(i))
    }
}
