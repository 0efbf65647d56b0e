//! Borrowed views over caller-owned text.

mod range;

pub use range::CharacterRange;
