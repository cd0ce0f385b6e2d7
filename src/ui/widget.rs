// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Core widget system defining the base trait and behaviors for all UI components.

use crate::geometry::{Rect, ScreenPoint, Vector};
use crate::render::RenderSink;
use crate::ui::{State, Transition, UIResult, WidgetPath, WidgetStorage};
use std::any::Any;

/// Data every widget carries: where it is and how it is being interacted with.
///
/// `position` is screen space, relative to the offset of whatever owns the
/// widget (the screen for top-level widgets, the panel corner for children).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetBase {
    pub position: Rect,
    pub state: State,
}

impl WidgetBase {
    pub fn new(position: Rect) -> Self {
        Self {
            position,
            state: State::Idle,
        }
    }
}

/// Core trait that all UI widgets must implement
pub trait Widget: Any {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Get widget as Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget as Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Draw the widget, `offset` is the accumulated corner of its owners.
    fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()>;

    fn bounds(&self) -> Rect {
        self.base().position
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.base_mut().position = bounds;
    }

    fn state(&self) -> State {
        self.base().state
    }

    /// Hit test in the owner's coordinates.
    ///
    /// Returns the path below this widget that should receive the pointer:
    /// an empty path means the widget itself.
    fn locate(&self, point: ScreenPoint) -> Option<WidgetPath> {
        if self.bounds().contains(point) {
            Some(WidgetPath::default())
        } else {
            None
        }
    }

    /// Update widget logic (called every frame)
    fn update(&mut self, _delta: f32) {}

    /// Run the widget's action. Only the dispatcher calls this, on a release
    /// over the widget that was pressed.
    fn act(&mut self) {}

    fn on_hover(&mut self) {}

    fn on_unhover(&mut self) {}

    fn on_press(&mut self) {}

    fn on_release(&mut self) {}

    /// Child storage, for composites.
    fn children(&self) -> Option<&WidgetStorage> {
        None
    }

    fn children_mut(&mut self) -> Option<&mut WidgetStorage> {
        None
    }

    /// Moves the state machine, then runs the matching hook once.
    fn apply(&mut self, transition: Transition) {
        let next = self.state().next(transition);
        self.base_mut().state = next;
        match transition {
            Transition::Hover => self.on_hover(),
            Transition::Unhover => self.on_unhover(),
            Transition::Press => self.on_press(),
            Transition::Release => self.on_release(),
        }
    }

    fn hover(&mut self) {
        self.apply(Transition::Hover);
    }

    fn unhover(&mut self) {
        self.apply(Transition::Unhover);
    }

    fn press(&mut self) {
        self.apply(Transition::Press);
    }

    fn release(&mut self) {
        self.apply(Transition::Release);
    }
}

/// Helper macro for widget boilerplate
#[macro_export]
macro_rules! impl_widget_base {
    ($base_field:ident) => {
        fn base(&self) -> &$crate::ui::WidgetBase {
            &self.$base_field
        }

        fn base_mut(&mut self) -> &mut $crate::ui::WidgetBase {
            &mut self.$base_field
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::render::{Color, RecordingSink};
    use std::sync::{Arc, Mutex};

    /// Widget that records every hook together with the state it observed,
    /// and every update delta.
    pub(crate) struct Probe {
        base: WidgetBase,
        pub log: Arc<Mutex<Vec<(&'static str, State)>>>,
        pub updates: Vec<f32>,
    }

    impl Probe {
        pub(crate) fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
            Self {
                base: WidgetBase::new(Rect::new(x, y, w, h)),
                log: Arc::new(Mutex::new(Vec::new())),
                updates: Vec::new(),
            }
        }

        pub(crate) fn shared_log(mut self, log: &Arc<Mutex<Vec<(&'static str, State)>>>) -> Self {
            self.log = log.clone();
            self
        }

        fn record(&mut self, what: &'static str) {
            let state = self.state();
            self.log.lock().unwrap().push((what, state));
        }
    }

    impl Widget for Probe {
        crate::impl_widget_base!(base);

        fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
            sink.fill_rect(self.bounds() + offset, Color::WHITE)
        }

        fn update(&mut self, delta: f32) {
            self.updates.push(delta);
        }

        fn act(&mut self) {
            self.record("act");
        }

        fn on_hover(&mut self) {
            self.record("hover");
        }

        fn on_unhover(&mut self) {
            self.record("unhover");
        }

        fn on_press(&mut self) {
            self.record("press");
        }

        fn on_release(&mut self) {
            self.record("release");
        }
    }

    #[test]
    fn test_each_transition_runs_one_hook_after_state_update() {
        for from in State::ALL {
            for t in Transition::ALL {
                let mut p = Probe::new(0.0, 0.0, 10.0, 10.0);
                p.base_mut().state = from;
                p.apply(t);
                let log = p.log.lock().unwrap().clone();
                assert_eq!(log.len(), 1, "{:?} {:?}", from, t);
                let expected_hook = match t {
                    Transition::Hover => "hover",
                    Transition::Unhover => "unhover",
                    Transition::Press => "press",
                    Transition::Release => "release",
                };
                assert_eq!(log[0], (expected_hook, from.next(t)));
                assert_eq!(p.state(), from.next(t));
            }
        }
    }

    #[test]
    fn test_default_locate_is_inclusive() {
        let p = Probe::new(10.0, 10.0, 100.0, 30.0);
        assert_eq!(p.locate(ScreenPoint::new(10.0, 40.0)), Some(WidgetPath::default()));
        assert_eq!(p.locate(ScreenPoint::new(111.0, 40.0)), None);
    }

    #[test]
    fn test_downcast_and_render_offset() {
        let p: Box<dyn Widget> = Box::new(Probe::new(1.0, 2.0, 3.0, 4.0));
        assert!(p.as_any().downcast_ref::<Probe>().is_some());
        assert!(p.children().is_none());

        let mut sink = RecordingSink::new();
        p.render(&mut sink, Vector::new(10.0, 10.0)).unwrap();
        assert_eq!(
            sink.fill_rects(),
            vec![(Rect::new(11.0, 12.0, 3.0, 4.0), Color::WHITE)]
        );
    }
}
