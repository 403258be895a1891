//! Geometry primitives shared by controls, renderers and fonts
//!
//! Positions and sizes are floating point; rectangles are integral.
//! Every float-to-rectangle conversion goes through [`Rect::from_position_size`],
//! which floors the top-left corner and truncates the extent toward zero.

mod align;

pub use align::*;
pub use glam::Vec2;

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Floating point width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size2 {
    pub width: f32,
    pub height: f32,
}

impl Size2 {
    pub const EMPTY: Size2 = Size2 { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size is empty only when both axes are zero
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<Vec2> for Size2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f32, f32)> for Size2 {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// Component-wise product, used for `size * origin`
impl Mul<Vec2> for Size2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.to_vec2() * rhs
    }
}

/// Integral screen-space rectangle
///
/// Width and height may be negative for degenerate rectangles (for example a
/// clipping rectangle produced by oversized padding); such rectangles are
/// [`empty`](Rect::is_empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Floors the corner and truncates the extent toward zero
    pub fn from_position_size(top_left: Vec2, size: Size2) -> Self {
        Self {
            x: top_left.x.floor() as i32,
            y: top_left.y.floor() as i32,
            width: size.width as i32,
            height: size.height as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn size(&self) -> Size2 {
        Size2::new(self.width as f32, self.height as f32)
    }

    /// True for zero-area and negative-extent rectangles
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrink by `thickness` on every side. The result may be degenerate;
    /// arithmetic saturates at the `i32` bounds.
    pub fn inset(&self, thickness: Thickness) -> Rect {
        Rect {
            x: self.x.saturating_add(thickness.left),
            y: self.y.saturating_add(thickness.top),
            width: self.width.saturating_sub(thickness.horizontal()),
            height: self.height.saturating_sub(thickness.vertical()),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        !self.is_empty()
            && point.x >= self.x as f32
            && point.x < self.right() as f32
            && point.y >= self.y as f32
            && point.y < self.bottom() as f32
    }
}

/// Edge insets in absolute units, used for margin and padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn all(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Left plus right
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<i32> for Thickness {
    fn from(v: i32) -> Self {
        Self::all(v)
    }
}

impl From<(i32, i32)> for Thickness {
    fn from((h, v): (i32, i32)) -> Self {
        Self::symmetric(h, v)
    }
}

impl From<(i32, i32, i32, i32)> for Thickness {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, right, bottom)
    }
}
