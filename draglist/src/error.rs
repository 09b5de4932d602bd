use thiserror::Error;

/// Errors raised by [`crate::Order`] construction and checked reordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderError {
    #[error("row index {index} is out of bounds for an order of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The item at `position` already appears earlier in the sequence.
    #[error("item at position {position} appears more than once")]
    DuplicateItem { position: usize },
}

/// Reasons a pointer event was rejected by the tracker.
///
/// Rejections leave the drag state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragError {
    #[error("a drag session is already active")]
    SessionActive,
    #[error("the pressed item is not part of the order")]
    UnknownItem,
    #[error("pointer coordinate is not a finite number")]
    NonFiniteCoordinate,
}
