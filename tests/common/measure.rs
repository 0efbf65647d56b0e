//! Deterministic measurers for layout tests.

use bidi_line::Measurer;

/// Every char advances by the same amount, so widths are exactly additive.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance(pub f32);

impl Measurer for FixedAdvance {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}
