//! Directional run layout for a single line.
//!
//! [`RunLayoutEngine`] turns a [`CharacterRange`] into a [`LayoutResult`]: an
//! ordered list of [`DrawInstruction`]s and the total advance. Callers paint
//! the result through a [`GlyphRenderer`], one call per instruction.

mod engine;

pub use engine::{LayoutOptions, RunLayoutEngine};

use std::ops::Range;

use tracing::debug;

use crate::text::CharacterRange;

/// One run to draw.
///
/// `offset` is relative to the start of the laid-out range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    pub offset: usize,
    pub len: usize,
    /// Left edge of the run.
    pub x: f32,
    /// Measured advance of the run.
    pub width: f32,
    pub is_rtl: bool,
}

impl DrawInstruction {
    /// Right edge of the run.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Which branch of the layout produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutPath {
    /// Nothing to draw.
    Empty,
    /// No RTL text: drawn as one run in the default direction.
    Unshaped,
    /// The resolver found nothing to reorder.
    TriviallyLtr,
    /// The resolver failed; drawn as one run in the default direction.
    Fallback,
    /// Split into directional runs and positioned.
    Reordered,
}

/// Draw instructions plus the authoritative total advance.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    pub instructions: Vec<DrawInstruction>,
    pub total_width: f32,
    /// Left edge of the laid-out region.
    pub origin_x: f32,
    /// Number of chars in the laid-out range.
    pub len: usize,
    pub path: LayoutPath,
}

impl LayoutResult {
    #[must_use]
    pub const fn empty(origin_x: f32) -> Self {
        Self {
            instructions: Vec::new(),
            total_width: 0.0,
            origin_x,
            len: 0,
            path: LayoutPath::Empty,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Sum of the per-run widths. Ties out to `total_width` up to
    /// measurement rounding.
    #[must_use]
    pub fn runs_width(&self) -> f32 {
        self.instructions.iter().map(|i| i.width).sum()
    }

    /// Paint every instruction in emission order.
    ///
    /// Reordered runs are shaped on their own; every other path shapes the
    /// run against the caller's context `0..context_end`. `range` must have
    /// the length this result was laid out for; otherwise nothing is drawn.
    pub fn paint<G>(&self, range: &CharacterRange<'_>, y: f32, renderer: &mut G)
    where
        G: GlyphRenderer + ?Sized,
    {
        if range.len() != self.len {
            debug!(
                laid_out = self.len,
                painted = range.len(),
                "range does not match layout, skipping paint"
            );
            return;
        }
        let buffer = range.buffer();
        for inst in &self.instructions {
            let offset = range.start() + inst.offset;
            let context = match self.path {
                LayoutPath::Reordered => offset..offset + inst.len,
                _ => 0..range.context_end(),
            };
            renderer.draw_run(buffer, offset, inst.len, context, inst.x, y, inst.is_rtl);
        }
    }
}

/// Shapes and paints one run of glyphs.
///
/// `text[offset..offset + len]` is drawn with its left edge at `x` on
/// baseline `y`; `text[context]` is available to the shaper for joining.
/// RTL runs are reversed and joined by the implementation.
pub trait GlyphRenderer {
    #[allow(clippy::too_many_arguments)]
    fn draw_run(
        &mut self,
        text: &[char],
        offset: usize,
        len: usize,
        context: Range<usize>,
        x: f32,
        y: f32,
        is_rtl: bool,
    );
}
