use thiserror::Error;

/// Errors surfaced by the allocator and the distinct-color selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Internal invariant violation while rearranging a palette buffer.
    /// The operation that produced it is aborted before any state changes.
    #[error("palette index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),
}
