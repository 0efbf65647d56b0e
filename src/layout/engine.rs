//! Run resolution and visual positioning.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::layout::{DrawInstruction, GlyphRenderer, LayoutPath, LayoutResult};
use crate::text::CharacterRange;
use crate::unicode::bidi::{BidiResolver, BidiRun, Direction, UnicodeBidiResolver};
use crate::unicode::classify::{first_strong_direction, requires_shaping};
use crate::unicode::width::{ColumnMeasurer, Measurer, sanitize_width};

/// Layout configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Paragraph direction handed to the resolver for text without a
    /// strong character.
    pub paragraph_default: Direction,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            paragraph_default: Direction::Ltr,
        }
    }
}

/// Lays out one line of mixed-direction text.
///
/// Stateless: every call depends only on its arguments, the resolver and the
/// measurer, so a shared engine can be used from several threads.
#[derive(Clone, Debug, Default)]
pub struct RunLayoutEngine<R = UnicodeBidiResolver, M = ColumnMeasurer> {
    resolver: R,
    measurer: M,
    options: LayoutOptions,
}

impl RunLayoutEngine {
    /// Engine with the `unicode-bidi` resolver and a one-unit column measurer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: BidiResolver, M: Measurer> RunLayoutEngine<R, M> {
    pub fn with_parts(resolver: R, measurer: M) -> Self {
        Self {
            resolver,
            measurer,
            options: LayoutOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub const fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    pub const fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lay out `buffer[start..start + len]` at x = 0.
    ///
    /// Out-of-bounds indices produce an empty result.
    pub fn layout(
        &self,
        buffer: &[char],
        start: usize,
        len: usize,
        context_end: usize,
        default_direction: Direction,
    ) -> LayoutResult {
        match CharacterRange::with_context_end(buffer, start, len, context_end) {
            Ok(range) => self.layout_range(&range, 0.0, default_direction),
            Err(err) => {
                debug!(error = %err, "rejecting layout range");
                LayoutResult::empty(0.0)
            }
        }
    }

    /// Lay out a range with its left edge at `x`.
    pub fn layout_range(
        &self,
        range: &CharacterRange<'_>,
        x: f32,
        default_direction: Direction,
    ) -> LayoutResult {
        if range.is_empty() {
            return LayoutResult::empty(x);
        }

        if !requires_shaping(range.buffer(), range.start(), range.len()) {
            trace!(len = range.len(), "no rtl text, drawing unshaped");
            return self.single_run(range, x, default_direction, LayoutPath::Unshaped);
        }

        let text = range.to_text();
        let resolved = self
            .resolver
            .resolve(&text, self.options.paragraph_default)
            .and_then(|p| validate_runs(&p.runs, range.len()).map(|()| p));

        let paragraph = match resolved {
            Ok(p) => p,
            Err(err) => {
                debug!(error = %err, len = range.len(), "bidi resolution failed, drawing unshaped");
                return self.single_run(range, x, default_direction, LayoutPath::Fallback);
            }
        };

        if paragraph.is_trivially_ltr || paragraph.runs.is_empty() {
            trace!(len = range.len(), "resolved to plain ltr");
            return self.single_run(range, x, default_direction, LayoutPath::TriviallyLtr);
        }

        let base_is_rtl = paragraph.base_is_rtl;
        let total_width = sanitize_width(self.measurer.measure(&text));

        // Runs are placed in the order the resolver returns them; only the
        // cursor direction follows the base direction.
        let mut current_x = if base_is_rtl { x + total_width } else { x };
        let mut instructions = Vec::with_capacity(paragraph.runs.len());
        for run in paragraph.runs.iter().filter(|run| !run.is_empty()) {
            let run_text = range.substring(run.start, run.len());
            let run_width = sanitize_width(self.measurer.measure(&run_text));

            if base_is_rtl {
                current_x -= run_width;
            }
            instructions.push(DrawInstruction {
                offset: run.start,
                len: run.len(),
                x: current_x,
                width: run_width,
                is_rtl: run.is_rtl(),
            });
            if !base_is_rtl {
                current_x += run_width;
            }
        }

        trace!(
            runs = instructions.len(),
            base_is_rtl,
            total_width,
            "reordered line"
        );

        LayoutResult {
            instructions,
            total_width,
            origin_x: x,
            len: range.len(),
            path: LayoutPath::Reordered,
        }
    }

    /// Advance width of a range.
    ///
    /// Reordering never changes the advance, so this is the measurer over
    /// the whole range. Out-of-bounds indices measure as zero.
    pub fn measure(&self, buffer: &[char], start: usize, len: usize) -> f32 {
        match CharacterRange::new(buffer, start, len) {
            Ok(range) if !range.is_empty() => sanitize_width(self.measurer.measure(&range.to_text())),
            _ => 0.0,
        }
    }

    /// Primary direction of a range.
    ///
    /// RTL only when the resolver puts the whole range right-to-left: an RTL
    /// base with every run at an odd level. Mixed text is LTR. If resolution
    /// fails, the first strong character decides, and text without one takes
    /// the paragraph default.
    pub fn text_direction(&self, range: &CharacterRange<'_>) -> Direction {
        if range.is_empty() {
            return self.options.paragraph_default;
        }
        match self.resolver.resolve(&range.to_text(), self.options.paragraph_default) {
            Ok(p) => Direction::from_rtl(
                p.base_is_rtl && !p.runs.is_empty() && p.runs.iter().all(BidiRun::is_rtl),
            ),
            Err(err) => {
                debug!(error = %err, "bidi resolution failed, using first strong char");
                first_strong_direction(range.chars()).unwrap_or(self.options.paragraph_default)
            }
        }
    }

    /// Lay out a range, paint it at (`x`, `y`) and return its advance.
    pub fn draw<G>(
        &self,
        range: &CharacterRange<'_>,
        x: f32,
        y: f32,
        default_direction: Direction,
        renderer: &mut G,
    ) -> f32
    where
        G: GlyphRenderer + ?Sized,
    {
        let result = self.layout_range(range, x, default_direction);
        result.paint(range, y, renderer);
        result.total_width
    }

    fn single_run(
        &self,
        range: &CharacterRange<'_>,
        x: f32,
        direction: Direction,
        path: LayoutPath,
    ) -> LayoutResult {
        let width = sanitize_width(self.measurer.measure(&range.to_text()));
        LayoutResult {
            instructions: vec![DrawInstruction {
                offset: 0,
                len: range.len(),
                x,
                width,
                is_rtl: direction.is_rtl(),
            }],
            total_width: width,
            origin_x: x,
            len: range.len(),
            path,
        }
    }
}

/// Runs from a resolver must stay inside the text they were asked about.
fn validate_runs(runs: &[BidiRun], len: usize) -> Result<()> {
    match runs.iter().find(|run| run.start > run.limit || run.limit > len) {
        Some(run) => Err(Error::resolution(format!(
            "run {}..{} outside text of {len} chars",
            run.start, run.limit
        ))),
        None => Ok(()),
    }
}
