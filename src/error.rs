//! Error types for BiDi line layout.

use std::fmt;

/// Result type alias for layout building blocks.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for BiDi line layout.
///
/// The public layout entry points never surface these; they degrade to an
/// unshaped or empty result instead. The variants are returned by the lower
/// level pieces (range construction, resolvers) so that callers composing
/// them directly can tell what went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The bidirectional resolver could not resolve the text.
    Resolution { reason: String },
    /// A character range does not fit inside its buffer.
    InvalidRange {
        start: usize,
        len: usize,
        context_end: usize,
        buffer_len: usize,
    },
}

impl Error {
    /// Build a resolution error from anything printable.
    pub fn resolution(reason: impl Into<String>) -> Self {
        Self::Resolution {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution { reason } => write!(f, "bidi resolution failed: {reason}"),
            Self::InvalidRange {
                start,
                len,
                context_end,
                buffer_len,
            } => {
                write!(
                    f,
                    "range {start}+{len} (context end {context_end}) out of bounds for buffer of {buffer_len} chars"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
