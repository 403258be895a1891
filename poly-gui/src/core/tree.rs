//! Control tree - owns widgets and maintains parent/child links
//!
//! Widgets live in a flat table keyed by [`ControlId`]. Ownership flows one
//! way: the tree owns every widget, a control's `children` list orders its
//! subtree, and `parent` is a plain id used for lookups only.

use crate::core::context::GuiContext;
use crate::core::properties::ControlProperties;
use crate::core::{BoxedWidget, Control, ControlId, Widget};
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size2, Vec2};
use crate::render::{GuiRenderer, TextureAtlas};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Default)]
pub struct ControlTree {
    widgets: HashMap<ControlId, BoxedWidget>,
    roots: Vec<ControlId>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn roots(&self) -> &[ControlId] {
        &self.roots
    }

    /// Add a top-level widget
    pub fn insert_root(&mut self, widget: impl Widget + 'static) -> ControlId {
        self.insert_boxed(None, Box::new(widget))
    }

    /// Add `widget` as the last child of `parent`
    pub fn insert_child(&mut self, parent: ControlId, widget: impl Widget + 'static) -> Result<ControlId> {
        if !self.widgets.contains_key(&parent) {
            return Err(Error::ControlNotFound(parent));
        }
        Ok(self.insert_boxed(Some(parent), Box::new(widget)))
    }

    fn insert_boxed(&mut self, parent: Option<ControlId>, mut widget: BoxedWidget) -> ControlId {
        let control = widget.control_mut();
        let id = control.id();
        control.parent = parent;

        match parent.and_then(|pid| self.widgets.get_mut(&pid)) {
            Some(parent) => parent.control_mut().children.push(id),
            None => self.roots.push(id),
        }
        self.widgets.insert(id, widget);
        debug!(control = %id, parent = ?parent, "inserted control");
        id
    }

    /// Detach and return a widget. Its descendants are dropped.
    ///
    /// Styles still applied to the removed control stay applied; nothing
    /// delivers a pointer-leave on its behalf. Dropped descendants release
    /// their style snapshots.
    pub fn remove(&mut self, id: ControlId) -> Option<BoxedWidget> {
        let mut widget = self.widgets.remove(&id)?;

        match widget.control().parent {
            Some(pid) => {
                if let Some(parent) = self.widgets.get_mut(&pid) {
                    parent.control_mut().children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }

        let mut pending = std::mem::take(&mut widget.control_mut().children);
        let mut dropped = 0usize;
        while let Some(child) = pending.pop() {
            if let Some(mut descendant) = self.widgets.remove(&child) {
                pending.append(&mut descendant.control_mut().children);
                dropped += 1;
            }
        }

        widget.control_mut().parent = None;
        debug!(control = %id, descendants = dropped, "removed control");
        Some(widget)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.widgets.contains_key(&id)
    }

    pub fn get(&self, id: ControlId) -> Option<&dyn Widget> {
        self.widgets.get(&id).map(|w| w.as_ref())
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut (dyn Widget + 'static)> {
        self.widgets.get_mut(&id).map(|w| w.as_mut())
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.widgets.get(&id).map(|w| w.control())
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.widgets.get_mut(&id).map(|w| w.control_mut())
    }

    pub fn parent_of(&self, id: ControlId) -> Option<ControlId> {
        self.control(id)?.parent
    }

    pub fn children_of(&self, id: ControlId) -> &[ControlId] {
        self.control(id).map(|c| c.children()).unwrap_or(&[])
    }

    /// First control with `name`, depth-first from the roots
    pub fn find_by_name(&self, name: &str) -> Option<ControlId> {
        let mut stack: Vec<ControlId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let control = self.control(id)?;
            if control.name == name {
                return Some(id);
            }
            stack.extend(control.children.iter().rev().copied());
        }
        None
    }

    fn parent_control(&self, control: &Control) -> Option<&Control> {
        let pid = control.parent?;
        let parent = self.control(pid);
        if parent.is_none() {
            warn!(control = %control.id(), parent = %pid, "parent missing from tree");
        }
        parent
    }

    pub fn bounding_rectangle(&self, id: ControlId) -> Result<Rect> {
        let control = self.control(id).ok_or(Error::ControlNotFound(id))?;
        Ok(control.bounding_rectangle(self.parent_control(control)))
    }

    pub fn clipping_rectangle(&self, id: ControlId) -> Result<Rect> {
        let control = self.control(id).ok_or(Error::ControlNotFound(id))?;
        Ok(control.clipping_rectangle(self.parent_control(control)))
    }

    /// Measure `id` and its subtree, parents before children, all against
    /// the same `available_size`.
    pub fn measure(&mut self, id: ControlId, available_size: Size2) -> Result<()> {
        if !self.widgets.contains_key(&id) {
            return Err(Error::ControlNotFound(id));
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(widget) = self.widgets.get_mut(&current) {
                widget.measure(available_size);
                stack.extend(widget.control().children.iter().rev().copied());
            }
        }
        Ok(())
    }

    /// Record the outcome of a layout pass for one control
    pub fn arrange(&mut self, id: ControlId, position: Vec2, size: Size2) -> Result<()> {
        let control = self.control_mut(id).ok_or(Error::ControlNotFound(id))?;
        control.position = position;
        control.size = size;
        control.set_actual_size(size);
        Ok(())
    }

    /// Draw every visible control, depth-first from the roots.
    /// A hidden control hides its whole subtree.
    pub fn draw(&self, context: &dyn GuiContext, renderer: &mut dyn GuiRenderer, delta_seconds: f32) {
        for &root in &self.roots {
            self.draw_subtree(root, context, renderer, delta_seconds);
        }
    }

    fn draw_subtree(
        &self,
        id: ControlId,
        context: &dyn GuiContext,
        renderer: &mut dyn GuiRenderer,
        delta_seconds: f32,
    ) {
        let Some(widget) = self.widgets.get(&id) else {
            return;
        };
        let control = widget.control();
        if !control.is_visible {
            return;
        }

        widget.draw(self.parent_control(control), context, renderer, delta_seconds);
        for &child in &control.children {
            self.draw_subtree(child, context, renderer, delta_seconds);
        }
    }

    /// Build controls from a property set, attached under `parent` or as a root.
    ///
    /// On error nothing from `properties` is left in the tree.
    pub fn load(
        &mut self,
        parent: Option<ControlId>,
        properties: &ControlProperties,
        atlas: Option<&TextureAtlas>,
    ) -> Result<ControlId> {
        let control = properties.to_control(atlas)?;
        let id = match parent {
            Some(pid) => self.insert_child(pid, control)?,
            None => self.insert_root(control),
        };
        for child in &properties.children {
            if let Err(err) = self.load(Some(id), child, atlas) {
                self.remove(id);
                return Err(err);
            }
        }
        Ok(id)
    }
}
