//! Unicode classification, BiDi resolution and advance measurement.

pub mod bidi;
pub mod classify;
pub mod width;

pub use bidi::{BidiResolver, BidiRun, Direction, ResolvedParagraph, UnicodeBidiResolver};
pub use classify::{
    CharClass, DirectionClass, classify, contains_mixed_directions, direction_class,
    first_strong_direction, is_arabic_char, is_combining_mark, is_rtl_char, needs_text_shaping,
    requires_shaping, scan_contains_rtl,
};
pub use width::{ColumnMeasurer, Measurer, WidthMethod};
