//! Core types and traits for Poly GUI

mod widget;
mod control;
pub mod context;
mod events;
mod properties;
mod tree;

pub use widget::*;
pub use control::*;
pub use context::*;
pub use events::*;
pub use properties::*;
pub use tree::*;
