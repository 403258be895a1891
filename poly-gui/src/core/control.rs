//! The base control: geometry, measurement state, styles and text layout
//!
//! A [`Control`] never stores its bounding rectangle. Every rectangle is
//! derived on demand from `position`, `size` and `origin`, plus the direct
//! parent's `position`, `size` and `origin` when the control is attached.
//!
//! ```text
//! root:   top_left = position - size * origin
//! child:  top_left = (parent.position - parent.size * parent.origin)
//!                    + position - size * origin
//! ```
//!
//! A child's position is therefore relative to its parent's anchored
//! top-left corner, not to the parent's own anchor point.

use crate::core::context::{Color, GuiContext};
use crate::core::widget::{next_control_id, ControlId, TextInfo};
use crate::geometry::{
    destination_rectangle, HorizontalAlignment, Rect, Size2, Thickness, Vec2, VerticalAlignment,
};
use crate::render::{Font, TextureRegion};
use crate::style::ControlStyle;
use std::fmt;
use std::rc::Rc;

/// Base state shared by every widget
pub struct Control {
    id: ControlId,
    pub(crate) parent: Option<ControlId>,
    pub(crate) children: Vec<ControlId>,

    pub name: String,
    /// Anchor point; parent-relative when attached
    pub position: Vec2,
    /// Normalised anchor within `size`; (0.5, 0.5) is the centre
    pub origin: Vec2,
    pub size: Size2,
    desired_size: Size2,
    actual_size: Size2,
    pub margin: Thickness,
    pub padding: Thickness,

    pub background_region: Option<Rc<TextureRegion>>,
    /// Background tint
    pub color: Color,
    /// Falls back to the context's default font when unset
    pub font: Option<Rc<dyn Font>>,
    pub text: String,
    pub text_color: Color,
    /// Pixel nudge applied to the aligned text position
    pub text_offset: Vec2,

    is_enabled: bool,
    pub is_visible: bool,
    pub is_focused: bool,

    pub hover_style: Option<Rc<ControlStyle>>,
    disabled_style: Option<Rc<ControlStyle>>,
}

impl Control {
    pub fn new() -> Self {
        Self {
            id: next_control_id(),
            parent: None,
            children: Vec::new(),
            name: String::new(),
            position: Vec2::ZERO,
            origin: Vec2::splat(0.5),
            size: Size2::EMPTY,
            desired_size: Size2::EMPTY,
            actual_size: Size2::EMPTY,
            margin: Thickness::zero(),
            padding: Thickness::zero(),
            background_region: None,
            color: Color::WHITE,
            font: None,
            text: String::new(),
            text_color: Color::WHITE,
            text_offset: Vec2::ZERO,
            is_enabled: true,
            is_visible: true,
            is_focused: false,
            hover_style: None,
            disabled_style: None,
        }
    }

    pub fn with_background(region: Rc<TextureRegion>) -> Self {
        let mut control = Self::new();
        control.background_region = Some(region);
        control
    }

    // Builder methods
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size2::new(width, height);
        self
    }

    pub fn with_padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font(mut self, font: Rc<dyn Font>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_hover_style(mut self, style: Rc<ControlStyle>) -> Self {
        self.hover_style = Some(style);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Set by the owning [`ControlTree`](crate::core::ControlTree) only
    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    // ============================================
    // Geometry
    // ============================================

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.size = Size2::new(width, self.size.height);
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.size = Size2::new(self.size.width, height);
    }

    /// `position - size * origin`, before any parent offset
    pub fn anchored_top_left(&self) -> Vec2 {
        self.position - self.size * self.origin
    }

    /// Screen-space rectangle; `parent` must be this control's parent, if any
    pub fn bounding_rectangle(&self, parent: Option<&Control>) -> Rect {
        let position = match parent {
            Some(parent) => parent.anchored_top_left() + self.position,
            None => self.position,
        };
        Rect::from_position_size(position - self.size * self.origin, self.size)
    }

    /// Bounding rectangle inset by padding; may be degenerate
    pub fn clipping_rectangle(&self, parent: Option<&Control>) -> Rect {
        self.bounding_rectangle(parent).inset(self.padding)
    }

    // ============================================
    // Measurement
    // ============================================

    /// Valid after the last `measure`
    pub fn desired_size(&self) -> Size2 {
        self.desired_size
    }

    pub(crate) fn set_desired_size(&mut self, size: Size2) {
        self.desired_size = size;
    }

    /// Size assigned by the last arrangement pass
    pub fn actual_size(&self) -> Size2 {
        self.actual_size
    }

    pub(crate) fn set_actual_size(&mut self, size: Size2) {
        self.actual_size = size;
    }

    /// Explicit size if set, else the background region's size, else empty
    pub fn default_desired_size(&self) -> Size2 {
        if !self.size.is_empty() {
            return self.size;
        }
        self.background_region
            .as_ref()
            .map(|region| region.size())
            .unwrap_or(Size2::EMPTY)
    }

    // ============================================
    // State & styles
    // ============================================

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Store `enabled`, then apply the disabled style if now disabled or
    /// revert it if now enabled. Called with the current value, the style
    /// is asked again and stays as it was.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
        if let Some(style) = self.disabled_style.clone() {
            style.apply_if(self, !enabled);
        }
    }

    pub fn disabled_style(&self) -> Option<&Rc<ControlStyle>> {
        self.disabled_style.as_ref()
    }

    /// Replace the disabled style and immediately reconcile it with the
    /// current enabled state. A previously assigned style is not reverted.
    pub fn set_disabled_style(&mut self, style: Option<Rc<ControlStyle>>) {
        self.disabled_style = style;
        if let Some(style) = self.disabled_style.clone() {
            style.apply_if(self, !self.is_enabled);
        }
    }

    /// Hover entry; ignored while disabled
    pub fn apply_hover_style(&mut self) {
        if !self.is_enabled {
            return;
        }
        if let Some(style) = self.hover_style.clone() {
            style.apply(self);
        }
    }

    /// Hover exit; ignored while disabled
    pub fn revert_hover_style(&mut self) {
        if !self.is_enabled {
            return;
        }
        if let Some(style) = self.hover_style.clone() {
            style.revert(self);
        }
    }

    // ============================================
    // Text layout
    // ============================================

    /// Lay out `text` inside `target` with the given alignment.
    ///
    /// Uses this control's font, or the context's default font when unset.
    /// The returned position excludes `text_offset`, which is added at draw time.
    pub fn text_info<'a>(
        &'a self,
        context: &'a dyn GuiContext,
        text: &'a str,
        target: Rect,
        clipping_rectangle: Rect,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> TextInfo<'a> {
        let font: &'a dyn Font = match self.font.as_deref() {
            Some(font) => font,
            None => context.default_font(),
        };
        let text_rectangle = font.string_rectangle(text, Vec2::ZERO);
        let destination = destination_rectangle(horizontal, vertical, text_rectangle, target);

        TextInfo {
            text,
            font,
            position: destination.position(),
            size: text_rectangle.size(),
            color: self.text_color,
            clipping_rectangle: Some(clipping_rectangle),
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the snapshots this control's own hover and disabled styles hold
/// for it. Styles applied by hand and not referenced here must be
/// [`forget`](ControlStyle::forget)-ed by the caller.
impl Drop for Control {
    fn drop(&mut self) {
        for style in [&self.hover_style, &self.disabled_style].into_iter().flatten() {
            style.forget(self.id);
        }
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("position", &self.position)
            .field("origin", &self.origin)
            .field("size", &self.size)
            .field("text", &self.text)
            .field("is_enabled", &self.is_enabled)
            .field("is_visible", &self.is_visible)
            .finish_non_exhaustive()
    }
}
