//! The [`Canvas`] a model draws into, and [`Frame`] diffs between canvases.

use crate::geom::{Bounds, Pos};
use crate::style::Glyph;

/// A screen-sized buffer of [`Glyph`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    bounds: Bounds,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    /// Create a canvas of default glyphs.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            glyphs: vec![Glyph::default(); bounds.len()],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Read the glyph at `p`. Returns `Glyph::default()` outside the canvas.
    pub fn at(&self, p: Pos) -> Glyph {
        self.bounds
            .index(p)
            .map(|i| self.glyphs[i])
            .unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Pos, glyph: Glyph) {
        if let Some(i) = self.bounds.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill every position with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` starting at `p`, clipped to the canvas. `style` supplies
    /// colours; its character is ignored. Returns the number of characters
    /// written.
    pub fn print(&mut self, p: Pos, text: &str, style: Glyph) -> usize {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let at = p.shift(0, i as i32);
            if !self.bounds.contains(at) {
                break;
            }
            self.set(at, style.with_char(ch));
            n += 1;
        }
        n
    }

    /// Copy the content of `src` into `self` where both overlap.
    pub fn copy_from(&mut self, src: &Canvas) {
        if self.bounds == src.bounds {
            self.glyphs.copy_from_slice(&src.glyphs);
            return;
        }
        for p in src.bounds.iter() {
            if self.bounds.contains(p) {
                self.set(p, src.at(p));
            }
        }
    }

    /// Row-major iterator over `(Pos, Glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Glyph)> + '_ {
        self.bounds.iter().zip(self.glyphs.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A glyph that changed between two canvases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGlyph {
    pub pos: Pos,
    pub glyph: Glyph,
}

/// The set of changes needed to turn one canvas into the next.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
    pub bounds: Bounds,
}

/// Compute the difference between two canvases.
///
/// When the sizes differ every glyph of `curr` is included so the driver
/// repaints the whole screen.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let full = prev.bounds() != curr.bounds();
    let glyphs = curr
        .iter()
        .filter(|&(p, g)| full || prev.at(p) != g)
        .map(|(pos, glyph)| FrameGlyph { pos, glyph })
        .collect();
    Frame {
        glyphs,
        bounds: curr.bounds(),
    }
}
