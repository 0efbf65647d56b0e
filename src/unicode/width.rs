//! Advance-width measurement.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Measures the advance width of a piece of text.
///
/// Must be deterministic for the same text and font state, and must match
/// what a subsequent draw of the same text advances by.
pub trait Measurer {
    fn measure(&self, text: &str) -> f32;
}

impl<F> Measurer for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Clamp a measured width to a usable advance.
#[inline]
pub(crate) fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Measures text in terminal cells, scaled by a fixed cell width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnMeasurer {
    pub method: WidthMethod,
    /// Advance of one terminal column.
    pub cell_width: f32,
}

impl Default for ColumnMeasurer {
    fn default() -> Self {
        Self {
            method: WidthMethod::WcWidth,
            cell_width: 1.0,
        }
    }
}

impl ColumnMeasurer {
    #[must_use]
    pub fn new(cell_width: f32) -> Self {
        Self {
            cell_width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Width of `text` in terminal columns.
    ///
    /// Summed per grapheme cluster so that a run boundary never changes the
    /// total.
    #[must_use]
    pub fn columns(&self, text: &str) -> usize {
        if text.is_ascii() {
            return text.bytes().filter(|b| (b' '..=b'~').contains(b)).count();
        }
        text.graphemes(true)
            .map(|g| grapheme_columns(g, self.method))
            .sum()
    }
}

fn grapheme_columns(grapheme: &str, method: WidthMethod) -> usize {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match method {
            WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
            WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
        },
        _ => match method {
            WidthMethod::WcWidth => UnicodeWidthStr::width(grapheme),
            WidthMethod::Unicode => UnicodeWidthStr::width_cjk(grapheme),
        },
    }
}

impl Measurer for ColumnMeasurer {
    fn measure(&self, text: &str) -> f32 {
        sanitize_width(self.columns(text) as f32 * self.cell_width)
    }
}
