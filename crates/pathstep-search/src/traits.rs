use pathstep_core::{Bounds, Grid, Pos};

use crate::distance::manhattan;

/// What the search engine needs to know about the field it walks.
pub trait Pather {
    /// The rectangle every searched cell lies in.
    fn bounds(&self) -> Bounds;

    /// Whether `p` is inside the bounds and may be entered.
    fn is_passable(&self, p: Pos) -> bool;

    /// Append the enterable neighbours of `p` into `buf`, in the order the
    /// engine should try them. The caller clears `buf` before calling.
    ///
    /// The default yields orthogonal neighbours down, up, right, left.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// Heuristic estimate of the distance from `from` to `to`.
    /// Must never overestimate (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_passable(&self, p: Pos) -> bool {
        self.is_open(p)
    }
}
