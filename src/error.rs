//! Error types for list operations.

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur when operating on a [`LinkedList`](crate::LinkedList).
///
/// Every variant is a violated precondition. The list is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("Node is not a member of this list")]
    NotFound,

    #[error("Position {position} is out of range for list of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Invalid position range: {p} > {q}")]
    InvalidRange { p: usize, q: usize },
}
