#![forbid(unsafe_code)]

//! Identity and payload types shared by every stage of a drag.

use std::fmt;

use serde::{Deserialize, Serialize};
use sortkit_core::geometry::Size;

/// Identity of an ordered list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ListId(pub u64);

impl From<u64> for ListId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

/// Suggested destination of the dragged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoverTarget {
    /// Insertion index in the destination list, computed against that list
    /// with the dragged item already removed (for non-copy moves within it).
    pub index: usize,
    pub list_id: ListId,
}

impl HoverTarget {
    #[must_use]
    pub const fn new(index: usize, list_id: ListId) -> Self {
        Self { index, list_id }
    }
}

/// Descriptor of the item being dragged.
///
/// Created by [`DragSession::begin_drag`](crate::session::DragSession::begin_drag).
/// Only `hover` changes while the drag is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraggedItem<T> {
    /// The payload. For copies this is the clone, not the original.
    pub data: T,
    /// Index in the origin list when the drag began.
    pub index: usize,
    /// Whether dropping inserts a copy instead of moving the original.
    pub is_copy: bool,
    /// Measured size of the origin slot.
    pub size: Size,
    /// Type tag; hovers only resolve against slots with the same tag.
    pub item_type: String,
    /// Origin list.
    pub list_id: ListId,
    /// Current suggested destination.
    pub hover: HoverTarget,
    /// True for items that originate from a sortable list rather than an
    /// external drag source.
    pub is_internal: bool,
}

impl<T> DraggedItem<T> {
    /// Whether the current hover targets the origin list.
    #[must_use]
    pub fn hovering_origin_list(&self) -> bool {
        self.hover.list_id == self.list_id
    }

    /// Origin as a [`HoverTarget`].
    #[must_use]
    pub fn origin(&self) -> HoverTarget {
        HoverTarget::new(self.index, self.list_id)
    }
}
