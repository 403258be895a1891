//! Declarative property set of a control, as produced by a markup loader
//!
//! Fonts and styles are runtime objects and are not part of the set; the
//! background region is referenced by its name in a [`TextureAtlas`].

use crate::core::context::Color;
use crate::core::Control;
use crate::error::{Error, Result};
use crate::geometry::{Size2, Thickness, Vec2};
use crate::render::TextureAtlas;
use crate::style::StyleSetter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlProperties {
    pub name: String,
    pub position: Vec2,
    pub origin: Vec2,
    pub size: Size2,
    pub margin: Thickness,
    pub padding: Thickness,
    pub color: Color,
    pub text: String,
    pub text_color: Color,
    pub text_offset: Vec2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_region: Option<String>,
    pub is_enabled: bool,
    pub is_visible: bool,
    pub is_focused: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ControlProperties>,
}

impl Default for ControlProperties {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Vec2::ZERO,
            origin: Vec2::splat(0.5),
            size: Size2::EMPTY,
            margin: Thickness::zero(),
            padding: Thickness::zero(),
            color: Color::WHITE,
            text: String::new(),
            text_color: Color::WHITE,
            text_offset: Vec2::ZERO,
            background_region: None,
            is_enabled: true,
            is_visible: true,
            is_focused: false,
            children: Vec::new(),
        }
    }
}

impl ControlProperties {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a detached control (children are not included).
    ///
    /// `is_enabled` goes through [`Control::set_enabled`], so a style assigned
    /// later still sees the right state.
    pub fn to_control(&self, atlas: Option<&TextureAtlas>) -> Result<Control> {
        let background_region = match (&self.background_region, atlas) {
            (Some(name), Some(atlas)) => Some(atlas.region(name)?),
            (Some(name), None) => return Err(Error::MissingAtlas(name.clone())),
            (None, _) => None,
        };

        let mut control = Control::new();
        control.name.clone_from(&self.name);
        control.position = self.position;
        control.origin = self.origin;
        control.size = self.size;
        control.margin = self.margin;
        control.padding = self.padding;
        control.color = self.color;
        control.text.clone_from(&self.text);
        control.text_color = self.text_color;
        control.text_offset = self.text_offset;
        control.background_region = background_region;
        control.is_visible = self.is_visible;
        control.is_focused = self.is_focused;
        control.set_enabled(self.is_enabled);
        Ok(control)
    }
}

impl StyleSetter {
    fn write_to(&self, properties: &mut ControlProperties) {
        match self {
            Self::Color(c) => properties.color = *c,
            Self::TextColor(c) => properties.text_color = *c,
            Self::Text(t) => properties.text.clone_from(t),
            Self::TextOffset(o) => properties.text_offset = *o,
            Self::BackgroundRegion(r) => {
                properties.background_region = r.as_ref().map(|r| r.name().to_string())
            }
            Self::Padding(p) => properties.padding = *p,
            Self::Margin(m) => properties.margin = *m,
            Self::Size(s) => properties.size = *s,
            Self::Origin(o) => properties.origin = *o,
            Self::IsVisible(v) => properties.is_visible = *v,
        }
    }
}

impl Control {
    /// Base property set, without children.
    ///
    /// Values written by the control's own disabled and hover styles are
    /// replaced with the values those styles captured, so a styled control
    /// saves its unstyled look.
    pub fn properties(&self) -> ControlProperties {
        let mut properties = self.current_properties();
        // Hover can only be applied before disabling, so unwind disabled first
        let styles = [self.disabled_style(), self.hover_style.as_ref()];
        for style in styles.into_iter().flatten() {
            if let Some(previous) = style.snapshot(self.id()) {
                for setter in previous.iter().rev() {
                    setter.write_to(&mut properties);
                }
            }
        }
        properties
    }

    fn current_properties(&self) -> ControlProperties {
        ControlProperties {
            name: self.name.clone(),
            position: self.position,
            origin: self.origin,
            size: self.size,
            margin: self.margin,
            padding: self.padding,
            color: self.color,
            text: self.text.clone(),
            text_color: self.text_color,
            text_offset: self.text_offset,
            background_region: self.background_region.as_ref().map(|r| r.name().to_string()),
            is_enabled: self.is_enabled(),
            is_visible: self.is_visible,
            is_focused: self.is_focused,
            children: Vec::new(),
        }
    }
}
