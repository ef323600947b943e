#![forbid(unsafe_code)]

//! Rendered positions and the backend-facing interfaces.

use sortkit_core::geometry::{Bounds, Orientation, Point, Rect};

use crate::error::{Result, SortError};
use crate::item::{DraggedItem, ListId};

/// Measures a rendered element.
///
/// Returning `None` means the slot is not attached to anything measurable,
/// which the engine treats as a fatal configuration error.
pub trait GeometryProvider {
    fn bounds(&self) -> Option<Rect>;
}

impl GeometryProvider for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl GeometryProvider for Bounds {
    fn bounds(&self) -> Option<Rect> {
        Some(self.to_rect())
    }
}

impl GeometryProvider for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

/// Geometry measured on demand by a closure.
pub struct Measure<F>(pub F);

impl<F: Fn() -> Option<Rect>> GeometryProvider for Measure<F> {
    fn bounds(&self) -> Option<Rect> {
        (self.0)()
    }
}

/// A rendered position in a list, recomputed on every layout pass.
pub struct Slot<'a, T> {
    pub list_id: ListId,
    pub index: usize,
    /// The item rendered in this slot (from the preview while one is shown).
    pub item: &'a T,
    pub item_type: &'a str,
    pub orientation: Orientation,
    pub geometry: &'a dyn GeometryProvider,
}

impl<'a, T> Slot<'a, T> {
    /// Create a vertical slot.
    pub fn new(
        list_id: ListId,
        index: usize,
        item: &'a T,
        item_type: &'a str,
        geometry: &'a dyn GeometryProvider,
    ) -> Self {
        Self {
            list_id,
            index,
            item,
            item_type,
            orientation: Orientation::Vertical,
            geometry,
        }
    }

    #[must_use]
    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Measure the slot, failing if it is detached.
    pub fn rect(&self) -> Result<Rect> {
        self.geometry.bounds().ok_or(SortError::DetachedSlot {
            list_id: self.list_id,
            index: self.index,
        })
    }
}

impl<T> std::fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("list_id", &self.list_id)
            .field("index", &self.index)
            .field("item_type", &self.item_type)
            .field("orientation", &self.orientation)
            .field("bounds", &self.geometry.bounds())
            .finish()
    }
}

/// What the pointer backend exposes during a hover.
pub trait DragMonitor<T> {
    /// The item the backend believes is being dragged.
    fn item(&self) -> Option<&DraggedItem<T>>;

    /// Pointer position, if known.
    fn client_offset(&self) -> Option<Point>;
}

/// A monitor snapshot, for backends that push plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorState<T> {
    pub item: Option<DraggedItem<T>>,
    pub client_offset: Option<Point>,
}

impl<T> DragMonitor<T> for MonitorState<T> {
    fn item(&self) -> Option<&DraggedItem<T>> {
        self.item.as_ref()
    }

    fn client_offset(&self) -> Option<Point> {
        self.client_offset
    }
}
