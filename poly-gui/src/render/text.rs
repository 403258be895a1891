//! Font metrics used by text layout

use crate::geometry::{Rect, Size2, Vec2};

/// Measures strings for layout and alignment
pub trait Font {
    /// Pixel extent of `text` when drawn unconstrained
    fn measure_string(&self, text: &str) -> Size2;

    /// Distance between successive baselines
    fn line_height(&self) -> f32;

    /// Rectangle `text` occupies when drawn at `position`
    fn string_rectangle(&self, text: &str, position: Vec2) -> Rect {
        Rect::from_position_size(position, self.measure_string(text))
    }
}

/// Fixed-cell font: every glyph advances by the same width.
///
/// Suits bitmap fonts packed on a grid, and makes text layout exact in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoFont {
    pub glyph_width: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl MonoFont {
    pub fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
            letter_spacing: 0.0,
        }
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    fn line_width(&self, line: &str) -> f32 {
        let glyphs = line.chars().count();
        if glyphs == 0 {
            return 0.0;
        }
        glyphs as f32 * self.glyph_width + (glyphs - 1) as f32 * self.letter_spacing
    }
}

impl Font for MonoFont {
    fn measure_string(&self, text: &str) -> Size2 {
        if text.is_empty() {
            return Size2::EMPTY;
        }

        let (width, lines) = text
            .split('\n')
            .fold((0.0f32, 0usize), |(w, n), line| (w.max(self.line_width(line)), n + 1));

        Size2::new(width, lines as f32 * self.line_height)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(feature = "system-fonts")]
pub use cosmic::CosmicFont;

#[cfg(feature = "system-fonts")]
mod cosmic {
    use super::Font;
    use crate::geometry::Size2;
    use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
    use std::cell::RefCell;

    /// Font measured by shaping text with cosmic-text
    pub struct CosmicFont {
        font_system: RefCell<FontSystem>,
        metrics: Metrics,
        family: Option<String>,
    }

    impl CosmicFont {
        /// Sans-serif at `font_size`, loading the system font database
        pub fn new(font_size: f32) -> Self {
            Self::with_font_system(FontSystem::new(), font_size)
        }

        pub fn with_font_system(font_system: FontSystem, font_size: f32) -> Self {
            Self {
                font_system: RefCell::new(font_system),
                metrics: Metrics::new(font_size, font_size * 1.2),
                family: None,
            }
        }

        pub fn family(mut self, family: impl Into<String>) -> Self {
            self.family = Some(family.into());
            self
        }

        pub fn font_size(&self) -> f32 {
            self.metrics.font_size
        }
    }

    impl Font for CosmicFont {
        fn measure_string(&self, text: &str) -> Size2 {
            if text.is_empty() {
                return Size2::EMPTY;
            }

            let mut font_system = self.font_system.borrow_mut();
            let font_system = &mut *font_system;

            let mut buffer = Buffer::new(font_system, self.metrics);
            buffer.set_size(font_system, None, None);

            let family = match &self.family {
                Some(name) => Family::Name(name),
                None => Family::SansSerif,
            };
            buffer.set_text(font_system, text, Attrs::new().family(family), Shaping::Advanced);
            buffer.shape_until_scroll(font_system, false);

            let (width, lines) = buffer
                .layout_runs()
                .fold((0.0f32, 0usize), |(w, n), run| (w.max(run.line_w), n + 1));

            Size2::new(width, lines as f32 * self.metrics.line_height)
        }

        fn line_height(&self) -> f32 {
            self.metrics.line_height
        }
    }
}
