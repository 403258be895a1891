//! Widget trait and core widget types

use crate::core::context::{Color, GuiContext};
use crate::core::{Control, KeyboardEventArgs, PointerEventArgs};
use crate::geometry::{HorizontalAlignment, Rect, Size2, Vec2, VerticalAlignment};
use crate::render::{Font, GuiRenderer};
use std::fmt;

/// Unique identifier for controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Helper to generate unique control IDs
pub fn next_control_id() -> ControlId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    ControlId(COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Laid-out text ready for the foreground pass
#[derive(Clone, Copy)]
pub struct TextInfo<'a> {
    pub text: &'a str,
    pub font: &'a dyn Font,
    /// Aligned top-left, before `text_offset`
    pub position: Vec2,
    pub size: Size2,
    pub color: Color,
    pub clipping_rectangle: Option<Rect>,
}

impl fmt::Debug for TextInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInfo")
            .field("text", &self.text)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("color", &self.color)
            .field("clipping_rectangle", &self.clipping_rectangle)
            .finish_non_exhaustive()
    }
}

/// Core trait that all UI components implement.
///
/// Concrete widgets embed a [`Control`] and override the hooks they need;
/// `measure` and `draw` are the fixed entry points that call them.
pub trait Widget {
    fn control(&self) -> &Control;

    fn control_mut(&mut self) -> &mut Control;

    /// Preferred size. `available_size` bounds what the widget may ask for.
    fn calculate_desired_size(&self, available_size: Size2) -> Size2 {
        let _ = available_size;
        self.control().default_desired_size()
    }

    /// Store the result of [`calculate_desired_size`](Self::calculate_desired_size)
    fn measure(&mut self, available_size: Size2) {
        let desired = self.calculate_desired_size(available_size);
        self.control_mut().set_desired_size(desired);
    }

    /// Where the text sits inside the bounding rectangle
    fn text_alignment(&self) -> (HorizontalAlignment, VerticalAlignment) {
        (HorizontalAlignment::Centre, VerticalAlignment::Centre)
    }

    /// Draw background then foreground. `parent` is this control's parent.
    fn draw(
        &self,
        parent: Option<&Control>,
        context: &dyn GuiContext,
        renderer: &mut dyn GuiRenderer,
        delta_seconds: f32,
    ) {
        let control = self.control();
        let bounds = control.bounding_rectangle(parent);
        let clip = bounds.inset(control.padding);
        let (horizontal, vertical) = self.text_alignment();

        self.draw_background(context, renderer, bounds, delta_seconds);
        let text_info = control.text_info(context, &control.text, bounds, clip, horizontal, vertical);
        self.draw_foreground(context, renderer, delta_seconds, &text_info);
    }

    fn draw_background(
        &self,
        context: &dyn GuiContext,
        renderer: &mut dyn GuiRenderer,
        bounds: Rect,
        delta_seconds: f32,
    ) {
        let _ = (context, delta_seconds);
        let control = self.control();
        renderer.draw_region(control.background_region.as_deref(), bounds, control.color);
    }

    /// Draw laid-out text; blank text issues no draw call
    fn draw_foreground(
        &self,
        context: &dyn GuiContext,
        renderer: &mut dyn GuiRenderer,
        delta_seconds: f32,
        text_info: &TextInfo<'_>,
    ) {
        let _ = (context, delta_seconds);
        if text_info.text.trim().is_empty() {
            return;
        }
        renderer.draw_text(
            text_info.font,
            text_info.text,
            text_info.position + self.control().text_offset,
            text_info.color,
            text_info.clipping_rectangle,
        );
    }

    // Input hooks

    fn on_scrolled(&mut self, context: &dyn GuiContext, delta: i32) {
        let _ = (context, delta);
    }

    fn on_key_typed(&mut self, context: &dyn GuiContext, args: &KeyboardEventArgs) {
        let _ = (context, args);
    }

    fn on_key_pressed(&mut self, context: &dyn GuiContext, args: &KeyboardEventArgs) {
        let _ = (context, args);
    }

    fn on_pointer_down(&mut self, context: &dyn GuiContext, args: &PointerEventArgs) {
        let _ = (context, args);
    }

    fn on_pointer_up(&mut self, context: &dyn GuiContext, args: &PointerEventArgs) {
        let _ = (context, args);
    }

    /// Applies the hover style when enabled
    fn on_pointer_enter(&mut self, context: &dyn GuiContext, args: &PointerEventArgs) {
        let _ = (context, args);
        self.control_mut().apply_hover_style();
    }

    /// Reverts the hover style when enabled
    fn on_pointer_leave(&mut self, context: &dyn GuiContext, args: &PointerEventArgs) {
        let _ = (context, args);
        self.control_mut().revert_hover_style();
    }
}

impl Widget for Control {
    fn control(&self) -> &Control {
        self
    }

    fn control_mut(&mut self) -> &mut Control {
        self
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;
    use crate::geometry::Thickness;
    use crate::render::{MonoFont, Primitive, RenderList, TextureId, TextureRegion};
    use crate::style::ControlStyle;
    use std::rc::Rc;

    fn context() -> Context {
        Context::new(Rc::new(MonoFont::new(8.0, 12.0)))
    }

    fn button() -> Control {
        Control::new()
            .with_position(100.0, 50.0)
            .with_size(20.0, 10.0)
    }

    /// Left/top-anchored text that measures itself from its string
    struct Label {
        control: Control,
        font: MonoFont,
    }

    impl Widget for Label {
        fn control(&self) -> &Control {
            &self.control
        }

        fn control_mut(&mut self) -> &mut Control {
            &mut self.control
        }

        fn calculate_desired_size(&self, available_size: Size2) -> Size2 {
            let text = self.font.measure_string(&self.control.text);
            Size2::new(
                text.width.min(available_size.width),
                text.height.min(available_size.height),
            )
        }

        fn text_alignment(&self) -> (HorizontalAlignment, VerticalAlignment) {
            (HorizontalAlignment::Left, VerticalAlignment::Top)
        }
    }

    /// Counts typed keys and scroll ticks
    #[derive(Default)]
    struct Counter {
        control: Control,
        keys: usize,
        scrolled: i32,
    }

    impl Widget for Counter {
        fn control(&self) -> &Control {
            &self.control
        }

        fn control_mut(&mut self) -> &mut Control {
            &mut self.control
        }

        fn on_key_typed(&mut self, _context: &dyn GuiContext, _args: &KeyboardEventArgs) {
            self.keys += 1;
        }

        fn on_scrolled(&mut self, _context: &dyn GuiContext, delta: i32) {
            self.scrolled += delta;
        }
    }

    #[test]
    fn test_measure_explicit_size_wins() {
        let region = Rc::new(TextureRegion::new("bg", TextureId(1), Rect::new(0, 0, 64, 64)));
        let mut control = Control::with_background(region).with_size(20.0, 10.0);
        control.measure(Size2::new(5.0, 5.0));
        assert_eq!(control.control().desired_size(), Size2::new(20.0, 10.0));
    }

    #[test]
    fn test_measure_falls_back_to_region() {
        let region = Rc::new(TextureRegion::new("bg", TextureId(1), Rect::new(0, 0, 64, 32)));
        let mut control = Control::with_background(region);
        control.measure(Size2::new(1000.0, 1000.0));
        assert_eq!(control.desired_size(), Size2::new(64.0, 32.0));
    }

    #[test]
    fn test_measure_empty() {
        let mut control = Control::new();
        control.measure(Size2::new(100.0, 100.0));
        assert_eq!(control.desired_size(), Size2::EMPTY);
    }

    #[test]
    fn test_override_desired_size() {
        let mut label = Label {
            control: Control::new().with_text("Hello"),
            font: MonoFont::new(8.0, 12.0),
        };
        label.measure(Size2::new(30.0, 100.0));
        assert_eq!(label.control().desired_size(), Size2::new(30.0, 12.0));
    }

    #[test]
    fn test_draw_emits_background_then_text() {
        let region = Rc::new(TextureRegion::new("bg", TextureId(2), Rect::new(0, 0, 8, 8)));
        let mut control = button().with_text("Hi");
        control.background_region = Some(region);
        control.color = Color::rgb(10, 20, 30);
        control.text_color = Color::BLACK;

        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);

        assert_eq!(
            list.primitives,
            vec![
                Primitive::Region {
                    texture: TextureId(2),
                    source: Rect::new(0, 0, 8, 8),
                    destination: Rect::new(90, 45, 20, 10),
                    color: Color::rgb(10, 20, 30),
                },
                Primitive::Text {
                    text: "Hi".into(),
                    position: Vec2::new(92.0, 44.0),
                    size: Size2::new(16.0, 12.0),
                    color: Color::BLACK,
                    clip: Some(Rect::new(90, 45, 20, 10)),
                },
            ]
        );
    }

    #[test]
    fn test_empty_text_skips_foreground() {
        let control = button();
        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_whitespace_text_skips_foreground() {
        let control = button().with_text("  \t\n");
        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);
        assert!(list.is_empty());
    }

    #[test]
    fn test_text_offset_and_clip() {
        let mut control = button().with_text("Hi").with_padding(2);
        control.text_offset = Vec2::new(1.0, -1.0);

        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);

        match list.texts().next() {
            Some(Primitive::Text { position, clip, .. }) => {
                assert_eq!(*position, Vec2::new(93.0, 43.0));
                assert_eq!(*clip, Some(Rect::new(92, 47, 16, 6)));
            }
            other => panic!("expected text, got {other:?}"),
        };
    }

    #[test]
    fn test_overridden_alignment() {
        let label = Label {
            control: button().with_text("Hi"),
            font: MonoFont::new(8.0, 12.0),
        };
        let mut list = RenderList::new();
        label.draw(None, &context(), &mut list, 0.016);

        match list.texts().next() {
            Some(Primitive::Text { position, .. }) => assert_eq!(*position, Vec2::new(90.0, 45.0)),
            other => panic!("expected text, got {other:?}"),
        };
    }

    #[test]
    fn test_draw_uses_parent_corner() {
        let parent = Control::new().with_position(100.0, 100.0).with_size(40.0, 20.0);
        let region = Rc::new(TextureRegion::new("bg", TextureId(1), Rect::new(0, 0, 4, 2)));
        let child = Control::with_background(region)
            .with_position(10.0, 5.0)
            .with_size(4.0, 2.0);

        let mut list = RenderList::new();
        child.draw(Some(&parent), &context(), &mut list, 0.016);

        match list.regions().next() {
            Some(Primitive::Region { destination, .. }) => {
                assert_eq!(*destination, Rect::new(88, 94, 4, 2))
            }
            other => panic!("expected region, got {other:?}"),
        };
    }

    #[test]
    fn test_degenerate_padding_draws_no_text() {
        let control = button().with_text("Hi").with_padding(50);
        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_extreme_padding_draws_background_only() {
        let region = Rc::new(TextureRegion::new("bg", TextureId(1), Rect::new(0, 0, 8, 8)));
        let mut control = button()
            .with_text("Hi")
            .with_padding(Thickness::new(i32::MAX, 0, i32::MAX, 0));
        control.background_region = Some(region);

        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);
        assert_eq!(list.regions().count(), 1);
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_far_position_draws_without_overflow() {
        let control = Control::new()
            .with_position(3.0e9, 0.0)
            .with_size(20.0, 10.0)
            .with_padding(1)
            .with_text("Hi");

        let mut list = RenderList::new();
        control.draw(None, &context(), &mut list, 0.016);

        match list.texts().next() {
            Some(Primitive::Text { clip, .. }) => {
                assert_eq!(*clip, Some(Rect::new(i32::MAX, -4, 18, 8)))
            }
            other => panic!("expected text, got {other:?}"),
        };
    }

    #[test]
    fn test_pointer_enter_leave_toggles_hover() {
        let hover = Rc::new(ControlStyle::new("hover").color(Color::BLACK));
        let mut control = button().with_hover_style(Rc::clone(&hover));
        let ctx = context();
        let args = PointerEventArgs::new(Vec2::new(100.0, 50.0));

        control.on_pointer_enter(&ctx, &args);
        assert_eq!(control.color, Color::BLACK);
        control.on_pointer_leave(&ctx, &args);
        assert_eq!(control.color, Color::WHITE);
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let mut control = button().with_text("Hi");
        let ctx = context();
        let pointer = PointerEventArgs::new(Vec2::ZERO).with_button(crate::core::MouseButton::Left);
        let key = KeyboardEventArgs::new(crate::core::Key::A).with_character('a');

        control.on_pointer_down(&ctx, &pointer);
        control.on_pointer_up(&ctx, &pointer);
        control.on_key_pressed(&ctx, &key);
        control.on_key_typed(&ctx, &key);
        control.on_scrolled(&ctx, 3);

        assert_eq!(control.text, "Hi");
        assert_eq!(control.color, Color::WHITE);
    }

    #[test]
    fn test_overridden_input_hooks() {
        let mut counter = Counter::default();
        let ctx = context();
        let key = KeyboardEventArgs::new(crate::core::Key::B);

        counter.on_key_typed(&ctx, &key);
        counter.on_key_typed(&ctx, &key);
        counter.on_scrolled(&ctx, -2);
        counter.on_scrolled(&ctx, 5);

        assert_eq!(counter.keys, 2);
        assert_eq!(counter.scrolled, 3);
    }
}
