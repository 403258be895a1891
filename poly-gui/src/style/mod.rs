//! Reversible property overrides applied to controls on state changes
//!
//! A [`ControlStyle`] is a named batch of [`StyleSetter`]s. Applying it to a
//! control snapshots the properties it touches and writes the new values;
//! reverting restores the snapshot. Both directions are idempotent per
//! control, so callers may reapply on every state write without drift.

use crate::core::context::Color;
use crate::core::{Control, ControlId};
use crate::geometry::{Size2, Thickness, Vec2};
use crate::render::TextureRegion;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, trace};

/// One property override
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSetter {
    Color(Color),
    TextColor(Color),
    Text(String),
    TextOffset(Vec2),
    BackgroundRegion(Option<Rc<TextureRegion>>),
    Padding(Thickness),
    Margin(Thickness),
    Size(Size2),
    Origin(Vec2),
    IsVisible(bool),
}

impl StyleSetter {
    /// Same property, holding the control's current value
    fn capture(&self, control: &Control) -> StyleSetter {
        match self {
            Self::Color(_) => Self::Color(control.color),
            Self::TextColor(_) => Self::TextColor(control.text_color),
            Self::Text(_) => Self::Text(control.text.clone()),
            Self::TextOffset(_) => Self::TextOffset(control.text_offset),
            Self::BackgroundRegion(_) => Self::BackgroundRegion(control.background_region.clone()),
            Self::Padding(_) => Self::Padding(control.padding),
            Self::Margin(_) => Self::Margin(control.margin),
            Self::Size(_) => Self::Size(control.size),
            Self::Origin(_) => Self::Origin(control.origin),
            Self::IsVisible(_) => Self::IsVisible(control.is_visible),
        }
    }

    fn assign(&self, control: &mut Control) {
        match self {
            Self::Color(c) => control.color = *c,
            Self::TextColor(c) => control.text_color = *c,
            Self::Text(t) => control.text.clone_from(t),
            Self::TextOffset(o) => control.text_offset = *o,
            Self::BackgroundRegion(r) => control.background_region.clone_from(r),
            Self::Padding(p) => control.padding = *p,
            Self::Margin(m) => control.margin = *m,
            Self::Size(s) => control.size = *s,
            Self::Origin(o) => control.origin = *o,
            Self::IsVisible(v) => control.is_visible = *v,
        }
    }
}

/// Named, reversible batch of property overrides.
///
/// One style may be shared by many controls; the snapshot of each control's
/// pre-style values is kept per [`ControlId`].
#[derive(Debug, Default)]
pub struct ControlStyle {
    name: String,
    setters: Vec<StyleSetter>,
    applied: RefCell<HashMap<ControlId, Vec<StyleSetter>>>,
}

impl ControlStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            setters: Vec::new(),
            applied: RefCell::new(HashMap::new()),
        }
    }

    // Builder methods
    pub fn with(mut self, setter: StyleSetter) -> Self {
        self.setters.push(setter);
        self
    }

    pub fn color(self, color: Color) -> Self {
        self.with(StyleSetter::Color(color))
    }

    pub fn text_color(self, color: Color) -> Self {
        self.with(StyleSetter::TextColor(color))
    }

    pub fn background_region(self, region: Option<Rc<TextureRegion>>) -> Self {
        self.with(StyleSetter::BackgroundRegion(region))
    }

    pub fn text_offset(self, offset: Vec2) -> Self {
        self.with(StyleSetter::TextOffset(offset))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn setters(&self) -> &[StyleSetter] {
        &self.setters
    }

    pub fn is_applied_to(&self, id: ControlId) -> bool {
        self.applied.borrow().contains_key(&id)
    }

    /// Write this style's values onto `control`. No-op if already applied.
    pub fn apply(&self, control: &mut Control) {
        let id = control.id();
        let mut applied = self.applied.borrow_mut();
        if applied.contains_key(&id) {
            trace!(style = %self.name, control = %id, "style already applied");
            return;
        }

        let previous = self.setters.iter().map(|s| s.capture(control)).collect();
        for setter in &self.setters {
            setter.assign(control);
        }
        applied.insert(id, previous);
        debug!(style = %self.name, control = %id, "applied style");
    }

    /// Restore the values captured by [`apply`](Self::apply). No-op if not applied.
    pub fn revert(&self, control: &mut Control) {
        let id = control.id();
        let Some(previous) = self.applied.borrow_mut().remove(&id) else {
            trace!(style = %self.name, control = %id, "style not applied, nothing to revert");
            return;
        };

        // Reverse order so duplicate setters unwind to the oldest value
        for setter in previous.iter().rev() {
            setter.assign(control);
        }
        debug!(style = %self.name, control = %id, "reverted style");
    }

    /// Values captured from `id` when this style was applied, in setter order
    pub fn snapshot(&self, id: ControlId) -> Option<Vec<StyleSetter>> {
        self.applied.borrow().get(&id).cloned()
    }

    /// Discard the snapshot held for `id` without restoring anything.
    /// Returns whether the style was applied to it.
    pub fn forget(&self, id: ControlId) -> bool {
        let forgotten = self.applied.borrow_mut().remove(&id).is_some();
        if forgotten {
            trace!(style = %self.name, control = %id, "forgot style snapshot");
        }
        forgotten
    }

    /// Apply when `condition` holds, revert otherwise
    pub fn apply_if(&self, control: &mut Control, condition: bool) {
        if condition {
            self.apply(control);
        } else {
            self.revert(control);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgb(255, 0, 0)
    }

    #[test]
    fn test_apply_then_revert_restores() {
        let style = ControlStyle::new("hot").color(red()).text_color(Color::BLACK);
        let mut control = Control::new();

        style.apply(&mut control);
        assert_eq!(control.color, red());
        assert_eq!(control.text_color, Color::BLACK);
        assert!(style.is_applied_to(control.id()));

        style.revert(&mut control);
        assert_eq!(control.color, Color::WHITE);
        assert_eq!(control.text_color, Color::WHITE);
        assert!(!style.is_applied_to(control.id()));
    }

    #[test]
    fn test_double_apply_keeps_original_snapshot() {
        let style = ControlStyle::new("hot").color(red());
        let mut control = Control::new();

        style.apply(&mut control);
        style.apply(&mut control);
        style.revert(&mut control);

        assert_eq!(control.color, Color::WHITE);
    }

    #[test]
    fn test_revert_without_apply_is_noop() {
        let style = ControlStyle::new("hot").color(red());
        let mut control = Control::new();
        control.color = Color::BLACK;

        style.revert(&mut control);
        assert_eq!(control.color, Color::BLACK);
    }

    #[test]
    fn test_forget_discards_snapshot() {
        let style = ControlStyle::new("hot").color(red());
        let mut control = Control::new();

        style.apply(&mut control);
        assert!(style.forget(control.id()));
        assert!(!style.is_applied_to(control.id()));
        assert!(!style.forget(control.id()));

        style.revert(&mut control);
        assert_eq!(control.color, red());
    }

    #[test]
    fn test_apply_if() {
        let style = ControlStyle::new("dim").color(Color::BLACK);
        let mut control = Control::new();

        style.apply_if(&mut control, true);
        assert_eq!(control.color, Color::BLACK);
        style.apply_if(&mut control, false);
        assert_eq!(control.color, Color::WHITE);
    }

    #[test]
    fn test_shared_style_tracks_controls_separately() {
        let style = ControlStyle::new("hot").color(red());
        let mut a = Control::new();
        let mut b = Control::new();
        b.color = Color::BLACK;

        style.apply(&mut a);
        style.apply(&mut b);
        style.revert(&mut a);

        assert_eq!(a.color, Color::WHITE);
        assert_eq!(b.color, red());
        assert!(style.is_applied_to(b.id()));

        style.revert(&mut b);
        assert_eq!(b.color, Color::BLACK);
    }

    #[test]
    fn test_duplicate_setters_unwind_to_oldest_value() {
        let style = ControlStyle::new("twice")
            .color(red())
            .color(Color::BLACK);
        let mut control = Control::new();

        style.apply(&mut control);
        assert_eq!(control.color, Color::BLACK);
        style.revert(&mut control);
        assert_eq!(control.color, Color::WHITE);
    }

    #[test]
    fn test_setters_cover_text_and_geometry() {
        let style = ControlStyle::new("pressed")
            .with(StyleSetter::Text("down".into()))
            .with(StyleSetter::Padding(Thickness::all(4)))
            .with(StyleSetter::Size(Size2::new(10.0, 10.0)))
            .with(StyleSetter::IsVisible(false));
        let mut control = Control::new().with_text("up");

        style.apply(&mut control);
        assert_eq!(control.text, "down");
        assert_eq!(control.padding, Thickness::all(4));
        assert!(!control.is_visible);

        style.revert(&mut control);
        assert_eq!(control.text, "up");
        assert_eq!(control.padding, Thickness::zero());
        assert_eq!(control.size, Size2::EMPTY);
        assert!(control.is_visible);
    }
}
