//! Render primitives

use crate::core::context::Color;
use crate::geometry::{Rect, Size2, Vec2};
use crate::render::{Font, GuiRenderer, TextureId, TextureRegion};
use tracing::trace;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Region {
        texture: TextureId,
        source: Rect,
        destination: Rect,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        size: Size2,
        color: Color,
        clip: Option<Rect>,
    },
}

/// Render command list.
///
/// Records draw calls in submission order for a backend to replay; absent
/// regions, zero-area destinations and fully clipped text are dropped here.
#[derive(Debug, Default)]
pub struct RenderList {
    pub primitives: Vec<Primitive>,
}

impl RenderList {
    pub fn new() -> Self {
        Self { primitives: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn regions(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Region { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Text { .. }))
    }
}

impl GuiRenderer for RenderList {
    fn draw_region(&mut self, region: Option<&TextureRegion>, destination: Rect, color: Color) {
        let Some(region) = region else {
            return;
        };
        if destination.is_empty() {
            trace!(region = region.name(), ?destination, "skipping region with empty destination");
            return;
        }
        self.primitives.push(Primitive::Region {
            texture: region.texture(),
            source: region.bounds(),
            destination,
            color,
        });
    }

    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        position: Vec2,
        color: Color,
        clipping_rectangle: Option<Rect>,
    ) {
        if let Some(clip) = clipping_rectangle {
            if clip.is_empty() {
                trace!(?clip, "skipping fully clipped text");
                return;
            }
        }
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            position,
            size: font.measure_string(text),
            color,
            clip: clipping_rectangle,
        });
    }
}
