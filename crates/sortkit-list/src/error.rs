#![forbid(unsafe_code)]

//! Configuration errors raised by the drag engine.
//!
//! Every variant indicates a programming error in the integrating
//! application. Disallowed drops and self-hovers are not errors; they are
//! reported through outcome values instead.

use std::fmt;

use crate::item::ListId;

/// Fatal misconfiguration detected while driving a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// `copy` returned true but the `SortableSpec` has no clone capability.
    MissingClone,
    /// The clone shares the original's track-by key.
    CloneKeyCollision,
    /// A slot's geometry provider could not measure it.
    DetachedSlot { list_id: ListId, index: usize },
    /// An operation referenced a list the store does not hold.
    UnknownList(ListId),
    /// `begin_drag` was called while another drag is active.
    DragInProgress,
    /// `drop` was called with no active drag.
    NoActiveDrag,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClone => write!(f, "copy requested but no clone function was provided"),
            Self::CloneKeyCollision => write!(
                f,
                "clone must return a new item with a different track-by key"
            ),
            Self::DetachedSlot { list_id, index } => write!(
                f,
                "slot {index} of {list_id} is not attached to a measurable element"
            ),
            Self::UnknownList(list_id) => write!(f, "{list_id} is not registered in the list store"),
            Self::DragInProgress => write!(f, "a drag is already in progress"),
            Self::NoActiveDrag => write!(f, "no drag is in progress"),
        }
    }
}

impl std::error::Error for SortError {}

/// Result type for sortkit list operations.
pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SortError::MissingClone.to_string(),
            "copy requested but no clone function was provided"
        );
        assert_eq!(
            SortError::DetachedSlot {
                list_id: ListId(4),
                index: 2
            }
            .to_string(),
            "slot 2 of list#4 is not attached to a measurable element"
        );
        assert_eq!(
            SortError::UnknownList(ListId(9)).to_string(),
            "list#9 is not registered in the list store"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SortError::NoActiveDrag);
        assert!(err.source().is_none());
    }
}
