//! `bidi_line` - BiDi run layout for terminal lines
//!
//! Decides whether a line of terminal text needs BiDi work at all, splits
//! mixed Latin/Arabic/Hebrew text into directional runs, and positions each
//! run so that the painted runs tile exactly the measured width of the line.
//! Shaping and painting stay with the caller's [`GlyphRenderer`].

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Column counts to f32 advances
#![allow(clippy::module_name_repetitions)] // Allow layout::LayoutResult etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Exact comparisons on exact test widths

pub mod error;
pub mod layout;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use layout::{
    DrawInstruction, GlyphRenderer, LayoutOptions, LayoutPath, LayoutResult, RunLayoutEngine,
};
pub use text::CharacterRange;
pub use unicode::{
    BidiResolver, BidiRun, ColumnMeasurer, Direction, Measurer, ResolvedParagraph,
    UnicodeBidiResolver, WidthMethod,
};
