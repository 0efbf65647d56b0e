//! Bidirectional (BiDi) run resolution.
//!
//! Layout consumes UAX #9 through the [`BidiResolver`] trait so that the
//! paragraph algorithm can be swapped out (or failed on purpose in tests).
//! [`UnicodeBidiResolver`] is the default implementation on top of the
//! `unicode-bidi` crate.

use unicode_bidi::{BidiClass, BidiInfo, Level, bidi_class};

use crate::error::{Error, Result};

/// Paragraph or run direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Direction from an `is_rtl` flag.
    #[must_use]
    pub const fn from_rtl(is_rtl: bool) -> Self {
        if is_rtl { Self::Rtl } else { Self::Ltr }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// A maximal run of chars sharing one embedding level.
///
/// `start` and `limit` are char offsets into the resolved text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BidiRun {
    pub start: usize,
    pub limit: usize,
    pub level: u8,
}

impl BidiRun {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.limit - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.limit == self.start
    }

    /// Odd levels are right-to-left.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.level & 1 != 0
    }
}

/// Output of paragraph-level resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedParagraph {
    /// Base (paragraph) direction is right-to-left.
    pub base_is_rtl: bool,
    /// Runs in logical order, covering the whole text.
    pub runs: Vec<BidiRun>,
    /// Every char resolved to level 0: nothing to reorder.
    pub is_trivially_ltr: bool,
}

/// UAX #9 paragraph resolution.
pub trait BidiResolver {
    /// Resolve `text` into level runs.
    ///
    /// `default_direction` is the paragraph direction used when the text has
    /// no strong character; otherwise the first strong character decides.
    fn resolve(&self, text: &str, default_direction: Direction) -> Result<ResolvedParagraph>;
}

impl<R: BidiResolver + ?Sized> BidiResolver for &R {
    fn resolve(&self, text: &str, default_direction: Direction) -> Result<ResolvedParagraph> {
        (**self).resolve(text, default_direction)
    }
}

/// Resolver backed by the `unicode-bidi` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeBidiResolver;

impl BidiResolver for UnicodeBidiResolver {
    fn resolve(&self, text: &str, default_direction: Direction) -> Result<ResolvedParagraph> {
        if text.is_empty() {
            return Err(Error::resolution("empty text"));
        }

        // P2/P3 are left to `unicode-bidi`; the default only applies when
        // no paragraph has a strong character outside an isolate.
        let default_level = if has_strong_outside_isolates(text) {
            None
        } else if default_direction.is_rtl() {
            Some(Level::rtl())
        } else {
            Some(Level::ltr())
        };

        let info = BidiInfo::new(text, default_level);
        let Some(first) = info.paragraphs.first() else {
            return Err(Error::resolution("no paragraphs resolved"));
        };
        let base_is_rtl = first.level.is_rtl();

        // `levels` are per byte; the line pass (L1) resets trailing
        // whitespace to the paragraph level, matching what gets drawn.
        let mut byte_levels: Vec<Level> = Vec::with_capacity(text.len());
        for para in &info.paragraphs {
            let line = para.range.clone();
            let levels = info.reordered_levels(para, line.clone());
            byte_levels.extend_from_slice(&levels[line]);
        }
        if byte_levels.len() != text.len() {
            return Err(Error::resolution(format!(
                "resolved {} levels for {} bytes",
                byte_levels.len(),
                text.len()
            )));
        }

        let mut runs: Vec<BidiRun> = Vec::new();
        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            let level = byte_levels[byte_idx].number();
            match runs.last_mut() {
                Some(run) if run.level == level => run.limit = char_idx + 1,
                _ => runs.push(BidiRun {
                    start: char_idx,
                    limit: char_idx + 1,
                    level,
                }),
            }
        }

        let is_trivially_ltr = !base_is_rtl && runs.iter().all(|run| run.level == 0);

        Ok(ResolvedParagraph {
            base_is_rtl,
            runs,
            is_trivially_ltr,
        })
    }
}

/// Whether any strong character sits outside isolate initiator/PDI pairs.
fn has_strong_outside_isolates(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match bidi_class(c) {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => depth += 1,
            BidiClass::PDI => depth = depth.saturating_sub(1),
            BidiClass::B => depth = 0,
            BidiClass::L | BidiClass::R | BidiClass::AL if depth == 0 => return true,
            _ => {}
        }
    }
    false
}
