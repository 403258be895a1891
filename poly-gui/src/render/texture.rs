//! Texture atlases and the sub-image regions controls draw from

use crate::error::{Error, Result};
use crate::geometry::{Rect, Size2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

/// Opaque handle to a texture owned by the renderer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// A named sub-image of a texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRegion {
    name: String,
    texture: TextureId,
    bounds: Rect,
}

impl TextureRegion {
    pub fn new(name: impl Into<String>, texture: TextureId, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            texture,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Source rectangle within the texture, in texels
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn size(&self) -> Size2 {
        self.bounds.size()
    }
}

/// Named regions packed into one texture.
///
/// Regions are handed out as shared references; a control holding one never
/// owns the atlas.
#[derive(Debug)]
pub struct TextureAtlas {
    name: String,
    texture: TextureId,
    regions: Vec<Rc<TextureRegion>>,
    by_name: HashMap<String, usize>,
}

impl TextureAtlas {
    pub fn new(name: impl Into<String>, texture: TextureId) -> Self {
        Self {
            name: name.into(),
            texture,
            regions: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Add a region. A region with the same name replaces the earlier lookup.
    pub fn create_region(&mut self, name: impl Into<String>, bounds: Rect) -> Rc<TextureRegion> {
        let region = Rc::new(TextureRegion::new(name, self.texture, bounds));
        self.by_name.insert(region.name.clone(), self.regions.len());
        self.regions.push(Rc::clone(&region));
        region
    }

    pub fn region(&self, name: &str) -> Result<Rc<TextureRegion>> {
        self.by_name
            .get(name)
            .map(|&idx| Rc::clone(&self.regions[idx]))
            .ok_or_else(|| Error::RegionNotFound(name.to_string()))
    }

    pub fn regions(&self) -> impl Iterator<Item = &Rc<TextureRegion>> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        let mut atlas = TextureAtlas::new("ui", TextureId(7));
        atlas.create_region("button", Rect::new(0, 0, 64, 24));
        atlas.create_region("panel", Rect::new(64, 0, 128, 128));

        let panel = atlas.region("panel").unwrap();
        assert_eq!(panel.texture(), TextureId(7));
        assert_eq!(panel.size(), Size2::new(128.0, 128.0));
        assert_eq!(atlas.len(), 2);
    }

    #[test]
    fn test_missing_region() {
        let atlas = TextureAtlas::new("ui", TextureId(1));
        assert!(matches!(atlas.region("nope"), Err(Error::RegionNotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_regions_are_shared() {
        let mut atlas = TextureAtlas::new("ui", TextureId(1));
        let created = atlas.create_region("knob", Rect::new(0, 0, 8, 8));
        let looked_up = atlas.region("knob").unwrap();
        assert!(Rc::ptr_eq(&created, &looked_up));
    }
}
