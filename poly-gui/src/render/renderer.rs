//! Renderer contract consumed by the draw pipeline

use crate::core::context::Color;
use crate::geometry::{Rect, Vec2};
use crate::render::{Font, TextureRegion};

/// Backend that rasterises regions and text.
///
/// Implementations must accept an absent region as a no-op and must treat an
/// empty (including negative-extent) clipping rectangle as "draw nothing".
pub trait GuiRenderer {
    fn draw_region(&mut self, region: Option<&TextureRegion>, destination: Rect, color: Color);

    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        position: Vec2,
        color: Color,
        clipping_rectangle: Option<Rect>,
    );
}
