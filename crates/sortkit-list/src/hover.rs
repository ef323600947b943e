#![forbid(unsafe_code)]

//! Hover resolution: which index should the dragged item move to?
//!
//! ```text
//!     ~ list ~
//!   [ index 0 ]
//!   [ index 1 ]  <-- picked up
//!   [ index 2 ]
//!
//!   ,----------------------,
//!   | slot 0 top half      | => 0, emits
//!   |----------------------|
//!   | slot 0 bottom half   | => 1, unchanged
//!   '----------------------'
//!   ,----------------------,
//!   | slot 1 (self)        | => ignored
//!   '----------------------'
//!   ,----------------------,
//!   | slot 2 top half      | => 1, unchanged
//!   |----------------------|
//!   | slot 2 bottom half   | => 2, emits
//!   '----------------------'
//! ```
//!
//! Within the hovered list, slots after the current hover index are offset
//! by one because the dragged item occupies `hover.index` in the rendered
//! preview; removing it shifts every later slot down.

use sortkit_core::geometry::Point;

use crate::error::Result;
use crate::item::{DraggedItem, HoverTarget, ListId};
use crate::slot::Slot;
use crate::spec::SortableSpec;

/// Why a hover produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverIgnore {
    /// No drag is in progress.
    Idle,
    /// The backend reported no pointer position.
    NoClientOffset,
    /// The slot renders the dragged item itself.
    SelfHover,
    /// The slot accepts a different item type.
    TypeMismatch,
}

/// Result of resolving one pointer movement.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverOutcome<T> {
    Ignored(HoverIgnore),
    /// The suggested target equals the current hover.
    Unchanged,
    /// The hover was rewritten but `can_drop` forbids the new position, so
    /// no notification is emitted.
    Suppressed(HoverTarget),
    /// The hover moved; carries a copy of the updated item.
    Moved(DraggedItem<T>),
}

impl<T> HoverOutcome<T> {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    /// The updated item, if the hover moved.
    #[must_use]
    pub fn moved(&self) -> Option<&DraggedItem<T>> {
        match self {
            Self::Moved(item) => Some(item),
            _ => None,
        }
    }

    /// Target the session's hover now points at, if this outcome changed it.
    #[must_use]
    pub fn new_target(&self) -> Option<HoverTarget> {
        match self {
            Self::Moved(item) => Some(item.hover),
            Self::Suppressed(target) => Some(*target),
            _ => None,
        }
    }
}

/// Suggested insertion index for a pointer over `slot_index` of `slot_list`.
///
/// `leading_half` is true when the pointer is before the slot's midpoint.
/// The index never goes below zero; a clamped suggestion lands on the
/// current hover, which the resolver reports as `Unchanged`.
#[must_use]
pub fn suggest_index(
    slot_index: usize,
    slot_list: ListId,
    hover: HoverTarget,
    leading_half: bool,
) -> usize {
    if slot_list == hover.list_id && slot_index >= hover.index {
        if leading_half {
            // Only clamps at slot 0 with the hover already at 0.
            slot_index.saturating_sub(1)
        } else {
            slot_index
        }
    } else if leading_half {
        slot_index
    } else {
        slot_index + 1
    }
}

/// Stateless hover resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverResolver {
    match_types: bool,
}

impl Default for HoverResolver {
    fn default() -> Self {
        Self { match_types: true }
    }
}

impl HoverResolver {
    #[must_use]
    pub fn new(match_types: bool) -> Self {
        Self { match_types }
    }

    /// Resolve a pointer at `offset` over `slot`.
    ///
    /// On a changed target, `item.hover` is rewritten *before* `can_drop`
    /// is consulted, so later hovers compute relative to the proposed
    /// position even when this one is suppressed.
    ///
    /// # Errors
    ///
    /// [`SortError::DetachedSlot`](crate::error::SortError::DetachedSlot)
    /// if the slot's geometry cannot be measured.
    pub fn resolve<T, S>(
        &self,
        spec: &S,
        item: &mut DraggedItem<T>,
        slot: &Slot<'_, T>,
        offset: Point,
    ) -> Result<HoverOutcome<T>>
    where
        T: Clone,
        S: SortableSpec<T> + ?Sized,
    {
        if self.match_types && slot.item_type != item.item_type {
            return Ok(HoverOutcome::Ignored(HoverIgnore::TypeMismatch));
        }
        if spec.same_key(slot.item, &item.data) {
            return Ok(HoverOutcome::Ignored(HoverIgnore::SelfHover));
        }

        let rect = slot.rect()?;
        let leading = rect.in_leading_half(offset, slot.orientation);
        let suggested = suggest_index(slot.index, slot.list_id, item.hover, leading);
        let target = HoverTarget::new(suggested, slot.list_id);

        sortkit_core::trace!(
            slot = slot.index,
            list = slot.list_id.0,
            leading,
            suggested,
            current = item.hover.index,
            "hover resolved"
        );

        if target == item.hover {
            return Ok(HoverOutcome::Unchanged);
        }

        item.hover = target;
        if !spec.can_drop(item) {
            sortkit_core::debug!(
                index = target.index,
                list = target.list_id.0,
                "hover suppressed by can_drop"
            );
            return Ok(HoverOutcome::Suppressed(target));
        }
        Ok(HoverOutcome::Moved(item.clone()))
    }
}
