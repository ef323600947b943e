#![forbid(unsafe_code)]

//! Geometric primitives in client coordinates.
//!
//! Pointer offsets and slot bounds share one coordinate space: floating
//! point, origin at the top-left of the viewport, `y` growing downward.

use serde::{Deserialize, Serialize};

/// A pointer position (client offset).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis.
    #[inline]
    pub const fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

/// Width and height of a measured element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along the given axis.
    #[inline]
    pub const fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Axis along which a list lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Items stacked top to bottom.
    #[default]
    Vertical,
    /// Items laid out left to right.
    Horizontal,
}

/// A bounding box: top-left origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Leading edge along the axis: `left` when horizontal, `top` when vertical.
    #[inline]
    pub const fn start(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Extent along the axis: `width` when horizontal, `height` when vertical.
    #[inline]
    pub const fn extent(&self, orientation: Orientation) -> f32 {
        self.size().along(orientation)
    }

    /// Midpoint along the axis.
    #[inline]
    pub fn centre(&self, orientation: Orientation) -> f32 {
        self.start(orientation) + self.extent(orientation) / 2.0
    }

    /// Whether `point` falls before the midpoint along the axis.
    ///
    /// A point exactly on the midpoint belongs to the trailing half.
    #[inline]
    pub fn in_leading_half(&self, point: Point, orientation: Orientation) -> bool {
        point.along(orientation) < self.centre(orientation)
    }
}

/// Raw element measurement as reported by a layout engine.
///
/// Some engines report only edges and leave `width`/`height` at zero; the
/// extent then falls back to `right - left` and `bottom - top`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Resolve to a [`Rect`], filling a zero width/height from the edges.
    pub fn to_rect(&self) -> Rect {
        let width = if self.width != 0.0 {
            self.width
        } else {
            self.right - self.left
        };
        let height = if self.height != 0.0 {
            self.height
        } else {
            self.bottom - self.top
        };
        Rect::new(self.left, self.top, width, height)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
            width: rect.width,
            height: rect.height,
        }
    }
}
