//! Shared services handed to controls while drawing and handling input

use crate::render::Font;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Services a control can rely on from its host
pub trait GuiContext {
    /// Font used by controls whose own font is unset
    fn default_font(&self) -> &dyn Font;
}

/// Stock context holding the default font
#[derive(Clone)]
pub struct Context {
    default_font: Rc<dyn Font>,
}

impl Context {
    pub fn new(default_font: Rc<dyn Font>) -> Self {
        Self { default_font }
    }

    pub fn set_default_font(&mut self, font: Rc<dyn Font>) {
        self.default_font = font;
    }
}

impl GuiContext for Context {
    fn default_font(&self) -> &dyn Font {
        self.default_font.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Opaque white, the neutral tint
impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
