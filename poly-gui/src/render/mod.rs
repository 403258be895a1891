//! Rendering contract, fonts, textures and the recording renderer

mod renderer;
mod primitives;
mod text;
mod texture;

pub use renderer::*;
pub use primitives::*;
pub use text::*;
pub use texture::*;
