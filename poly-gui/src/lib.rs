//! Poly GUI - Retained-mode control core
//!
//! The base [`Control`] computes its geometry from an origin-anchored
//! position and size, negotiates its desired size, reconciles hover and
//! disabled styles, and draws a background region plus aligned, clipped
//! text through a [`GuiRenderer`]. Concrete widgets implement [`Widget`].

pub mod core;
pub mod error;
pub mod geometry;
pub mod render;
pub mod style;

pub use crate::core::{Control, ControlId, ControlTree, Widget};
pub use error::{Error, Result};
pub use render::GuiRenderer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        Color, Context, Control, ControlId, ControlProperties, ControlTree, GuiContext,
        KeyboardEventArgs, PointerEventArgs, TextInfo, Widget,
    };
    pub use crate::geometry::*;
    pub use crate::render::{Font, GuiRenderer, MonoFont, RenderList, TextureAtlas, TextureRegion};
    pub use crate::style::{ControlStyle, StyleSetter};
}
