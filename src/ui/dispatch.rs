// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Event dispatch.
//!
//! [`UI`] owns the top-level widgets and routes one event at a time to at
//! most one of them. It remembers two widgets by path, never by reference:
//!
//! - `hovered`: the widget under the pointer at the last pointer event
//! - `pressed`: the widget that accepted the last primary press, until release
//!
//! While a widget is pressed it holds the capture: another widget entered by
//! the pointer is tracked as hovered but is not visually hovered until the
//! release. Only a release over the pressed widget runs its action.

use crate::event::Event;
use crate::geometry::{ScreenPoint, Vector};
use crate::render::RenderSink;
use crate::ui::{Transition, UIError, UIResult, Widget, WidgetId, WidgetPath, WidgetStorage};
use log::debug;

#[derive(Default)]
pub struct UI {
    widgets: WidgetStorage,
    hovered: Option<WidgetPath>,
    pressed: Option<WidgetPath>,
}

impl UI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.widgets.add(widget)
    }

    /// Handles one event. Returns true when the event was consumed and must
    /// not be interpreted as world (camera) input.
    pub fn process_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::PointerDown { button, x, y } if button.is_primary() => {
                self.track_pointer(ScreenPoint::new(x, y));
                match self.hovered.clone() {
                    Some(path) => {
                        debug!("press {}", path);
                        self.apply(&path, Transition::Press);
                        self.pressed = Some(path);
                        true
                    }
                    None => false,
                }
            }
            Event::PointerUp { button, x, y } if button.is_primary() => {
                self.track_pointer(ScreenPoint::new(x, y));
                let Some(pressed) = self.pressed.take() else {
                    return false;
                };
                self.apply(&pressed, Transition::Release);
                match self.hovered.clone() {
                    Some(hovered) if hovered == pressed => {
                        debug!("act {}", pressed);
                        if let Some(widget) = self.widgets.resolve_mut(&pressed) {
                            widget.act();
                        }
                    }
                    Some(hovered) => self.apply(&hovered, Transition::Hover),
                    None => {}
                }
                true
            }
            Event::PointerMove { x, y, .. } => {
                self.track_pointer(ScreenPoint::new(x, y));
                false
            }
            _ => false,
        }
    }

    /// Re-runs the hit test and moves hover tracking to the widget under
    /// `point`, honouring the capture of a pressed widget.
    fn track_pointer(&mut self, point: ScreenPoint) {
        let under = self.widgets.locate(point);

        if self.hovered.is_some() && self.hovered != under {
            if let Some(old) = self.hovered.take() {
                self.apply(&old, Transition::Unhover);
            }
        }

        if self.hovered.is_none() {
            self.hovered = under;
            if let Some(path) = self.hovered.clone() {
                let captured = self.pressed.as_ref().is_some_and(|p| *p != path);
                if !captured {
                    self.apply(&path, Transition::Hover);
                }
            }
        }
    }

    fn apply(&mut self, path: &WidgetPath, transition: Transition) {
        if let Some(widget) = self.widgets.resolve_mut(path) {
            widget.apply(transition);
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.widgets.update(delta);
    }

    pub fn render(&self, sink: &mut dyn RenderSink) -> UIResult<()> {
        self.widgets.render(sink, Vector::ZERO)
    }

    /// Removes a top-level widget. Hover and press tracking that goes through
    /// it is dropped first.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if self.hovered.as_ref().is_some_and(|p| p.contains(id)) {
            self.hovered = None;
        }
        if self.pressed.as_ref().is_some_and(|p| p.contains(id)) {
            self.pressed = None;
        }
        self.widgets.remove(id)
    }

    /// Drops every widget, after forgetting hover and press tracking.
    pub fn clear(&mut self) {
        self.hovered = None;
        self.pressed = None;
        self.widgets.clear();
    }

    pub fn hovered(&self) -> Option<&WidgetPath> {
        self.hovered.as_ref()
    }

    pub fn pressed(&self) -> Option<&WidgetPath> {
        self.pressed.as_ref()
    }

    pub fn widgets(&self) -> &WidgetStorage {
        &self.widgets
    }

    /// Mutable access for configuration. Clear or remove through [`UI`] so
    /// that tracking stays consistent.
    pub fn widgets_mut(&mut self) -> &mut WidgetStorage {
        &mut self.widgets
    }

    pub fn widget<T: Widget>(&self, id: WidgetId) -> UIResult<&T> {
        self.widgets.widget(id)
    }

    pub fn widget_mut<T: Widget>(&mut self, id: WidgetId) -> UIResult<&mut T> {
        self.widgets.widget_mut(id)
    }

    /// Typed access to a widget nested in composites.
    pub fn path_mut<T: Widget>(&mut self, path: &WidgetPath) -> UIResult<&mut T> {
        self.widgets
            .resolve_mut(path)
            .and_then(|w| w.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| {
                UIError::WidgetNotFound(format!("{} as {}", path, std::any::type_name::<T>()))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
