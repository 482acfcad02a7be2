use alloc::string::String;
use core::ops::Sub;

/// Stable identity of a list item.
pub type ItemId = i64;

/// A list entry as the host describes it.
///
/// Items are immutable once created; two items are the same item when their `id`s match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub color: String,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A pointer position in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Self) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// A translation applied to a view node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A screen-space box as reported by a view node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict containment: a point on any edge is outside.
    pub fn contains(&self, p: Point) -> bool {
        self.top < p.y && p.y < self.bottom && self.left < p.x && p.x < self.right
    }

    /// The same box moved by `offset`.
    pub fn translated(&self, offset: Offset) -> Self {
        Self {
            left: self.left + offset.dx,
            top: self.top + offset.dy,
            right: self.right + offset.dx,
            bottom: self.bottom + offset.dy,
        }
    }

    /// The translation that makes a node laid out at `self` appear at `before`.
    ///
    /// This is the FLIP "invert" offset.
    pub fn displacement_from(&self, before: &BoundingBox) -> Offset {
        Offset {
            dx: before.left - self.left,
            dy: before.top - self.top,
        }
    }
}
