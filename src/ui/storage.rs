// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Widget ownership.
//!
//! [`WidgetStorage`] is a generational arena of boxed widgets. Callers keep a
//! [`WidgetId`] handle instead of a reference; once the widget is removed, or
//! the storage cleared, the slot's generation moves on and every old handle
//! resolves to nothing.
//!
//! Insertion order is tracked apart from slot reuse. It is hit-test order
//! (first match wins) and render order (later widgets draw on top).

use crate::geometry::{ScreenPoint, Vector};
use crate::render::RenderSink;
use crate::ui::{UIError, UIResult, Widget};
use std::fmt;

/// Stable handle to a widget inside one [`WidgetStorage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    index: u32,
    generation: u32,
}

impl WidgetId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Route from a top-level widget down through composites to the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WidgetPath(Vec<WidgetId>);

impl WidgetPath {
    pub fn new(ids: Vec<WidgetId>) -> Self {
        Self(ids)
    }

    /// Path of this id, then `self` below it.
    pub fn prepend(mut self, id: WidgetId) -> Self {
        self.0.insert(0, id);
        self
    }

    pub fn push(&mut self, id: WidgetId) {
        self.0.push(id);
    }

    pub fn ids(&self) -> &[WidgetId] {
        &self.0
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.0.first().copied()
    }

    pub fn target(&self) -> Option<WidgetId> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `self` goes through `id` at any depth.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.0.contains(&id)
    }
}

impl From<WidgetId> for WidgetPath {
    fn from(id: WidgetId) -> Self {
        Self(vec![id])
    }
}

impl fmt::Display for WidgetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

struct Slot {
    generation: u32,
    widget: Option<Box<dyn Widget>>,
}

#[derive(Default)]
pub struct WidgetStorage {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<WidgetId>,
}

impl WidgetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `widget` and returns its handle.
    pub fn add<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.add_boxed(Box::new(widget))
    }

    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.widget = Some(widget);
                WidgetId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    widget: Some(widget),
                });
                WidgetId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        };
        self.order.push(id);
        id
    }

    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.widget.as_deref())
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.generation == id.generation => slot.widget.as_deref_mut(),
            _ => None,
        }
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    /// Typed access; stale ids and wrong types both fail.
    pub fn widget<T: Widget>(&self, id: WidgetId) -> UIResult<&T> {
        self.get(id)
            .and_then(|w| w.as_any().downcast_ref::<T>())
            .ok_or_else(|| not_found(id, std::any::type_name::<T>()))
    }

    pub fn widget_mut<T: Widget>(&mut self, id: WidgetId) -> UIResult<&mut T> {
        self.get_mut(id)
            .and_then(|w| w.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| not_found(id, std::any::type_name::<T>()))
    }

    /// Follows `path` through nested composites.
    pub fn resolve(&self, path: &WidgetPath) -> Option<&dyn Widget> {
        self.resolve_ids(path.ids())
    }

    pub fn resolve_mut(&mut self, path: &WidgetPath) -> Option<&mut (dyn Widget + 'static)> {
        self.resolve_ids_mut(path.ids())
    }

    fn resolve_ids(&self, ids: &[WidgetId]) -> Option<&dyn Widget> {
        let (first, rest) = ids.split_first()?;
        let widget = self.get(*first)?;
        if rest.is_empty() {
            Some(widget)
        } else {
            widget.children()?.resolve_ids(rest)
        }
    }

    fn resolve_ids_mut(&mut self, ids: &[WidgetId]) -> Option<&mut (dyn Widget + 'static)> {
        let (first, rest) = ids.split_first()?;
        let widget = self.get_mut(*first)?;
        if rest.is_empty() {
            Some(widget)
        } else {
            widget.children_mut()?.resolve_ids_mut(rest)
        }
    }

    /// Drops the widget and retires its handle.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let widget = slot.widget.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.order.retain(|other| *other != id);
        Some(widget)
    }

    /// Drops every widget; all handles issued so far go stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.widget.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        // reuse low slots first
        self.free.reverse();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[WidgetId] {
        &self.order
    }

    /// Widgets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &dyn Widget)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.get(*id).map(|w| (*id, w)))
    }

    /// First widget, in insertion order, that accepts the point.
    pub fn locate(&self, point: ScreenPoint) -> Option<WidgetPath> {
        self.iter()
            .find_map(|(id, widget)| widget.locate(point).map(|path| path.prepend(id)))
    }

    pub fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
        for (_, widget) in self.iter() {
            widget.render(sink, offset)?;
        }
        Ok(())
    }

    pub fn update(&mut self, delta: f32) {
        for i in 0..self.order.len() {
            let id = self.order[i];
            if let Some(widget) = self.get_mut(id) {
                widget.update(delta);
            }
        }
    }
}

fn not_found(id: WidgetId, type_name: &str) -> UIError {
    UIError::WidgetNotFound(format!("{} as {}", id, type_name))
}
