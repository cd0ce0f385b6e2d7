// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Panel component - a container widget for grouping other widgets.
//!
//! Children are positioned relative to the panel corner and are owned by the
//! panel's own [`WidgetStorage`]. The dispatcher reaches them through a
//! [`crate::ui::WidgetPath`] that starts at the panel.

use crate::geometry::{Rect, ScreenPoint, Vector};
use crate::render::{Color, RenderSink};
use crate::ui::{UIResult, Widget, WidgetBase, WidgetId, WidgetPath, WidgetStorage};
use crate::impl_widget_base;

const FRAME_COLOR: Color = Color::BLACK;
const FILL_COLOR: Color = Color::rgb(150, 170, 150);

pub struct Panel {
    base: WidgetBase,
    border: f32,
    children: WidgetStorage,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            border: 2.0,
            children: WidgetStorage::new(),
        }
    }

    pub fn position(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.base.position = Rect::new(x, y, w, h);
        self
    }

    pub fn border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Adds a child, positioned relative to the panel corner.
    pub fn add<W: Widget>(&mut self, child: W) -> WidgetId {
        self.children.add(child)
    }

    /// Builder form of [`Panel::add`] for children that need no handle.
    pub fn child<W: Widget>(mut self, child: W) -> Self {
        self.children.add(child);
        self
    }

    fn local(&self, point: ScreenPoint) -> ScreenPoint {
        point - self.bounds().corner().vector()
    }
}

impl Widget for Panel {
    impl_widget_base!(base);

    /// Children first, then the panel background. Nothing outside the panel
    /// bounds is ever matched, even a child that sticks out.
    fn locate(&self, point: ScreenPoint) -> Option<WidgetPath> {
        if !self.bounds().contains(point) {
            return None;
        }
        self.children
            .locate(self.local(point))
            .or_else(|| Some(WidgetPath::default()))
    }

    fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
        let outer = self.bounds() + offset;
        sink.fill_rect(outer, FRAME_COLOR)?;
        sink.fill_rect(outer.shrinked(self.border), FILL_COLOR)?;
        self.children
            .render(sink, offset + self.bounds().corner().vector())
    }

    fn update(&mut self, delta: f32) {
        self.children.update(delta);
    }

    fn children(&self) -> Option<&WidgetStorage> {
        Some(&self.children)
    }

    fn children_mut(&mut self) -> Option<&mut WidgetStorage> {
        Some(&mut self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSink};
    use crate::ui::widget::tests::Probe;

    #[test]
    fn test_locate_children_first() {
        let mut panel = Panel::new().position(100.0, 100.0, 50.0, 50.0);
        let child = panel.add(Probe::new(5.0, 5.0, 10.0, 10.0));
        let sticking_out = panel.add(Probe::new(40.0, 40.0, 30.0, 30.0));

        assert_eq!(
            panel.locate(ScreenPoint::new(108.0, 108.0)),
            Some(WidgetPath::from(child))
        );
        assert_eq!(
            panel.locate(ScreenPoint::new(145.0, 145.0)),
            Some(WidgetPath::from(sticking_out))
        );
        // the part of a child outside the panel is not hit
        assert_eq!(panel.locate(ScreenPoint::new(160.0, 160.0)), None);
        assert_eq!(
            panel.locate(ScreenPoint::new(130.0, 101.0)),
            Some(WidgetPath::default())
        );
    }

    #[test]
    fn test_nested_panels() {
        let mut inner = Panel::new().position(10.0, 10.0, 30.0, 30.0);
        let leaf = inner.add(Probe::new(0.0, 0.0, 5.0, 5.0));
        let mut outer = Panel::new().position(100.0, 0.0, 100.0, 100.0);
        let inner_id = outer.add(inner);

        assert_eq!(
            outer.locate(ScreenPoint::new(112.0, 12.0)),
            Some(WidgetPath::from(leaf).prepend(inner_id))
        );
    }

    #[test]
    fn test_render_children_relative() {
        let panel = Panel::new()
            .position(100.0, 50.0, 40.0, 40.0)
            .child(Probe::new(5.0, 5.0, 10.0, 10.0));
        let mut sink = RecordingSink::new();
        panel.render(&mut sink, Vector::new(1.0, 1.0)).unwrap();
        assert_eq!(
            sink.commands,
            vec![
                DrawCommand::FillRect(Rect::new(101.0, 51.0, 40.0, 40.0), Color::BLACK),
                DrawCommand::FillRect(Rect::new(103.0, 53.0, 36.0, 36.0), FILL_COLOR),
                DrawCommand::FillRect(Rect::new(106.0, 56.0, 10.0, 10.0), Color::WHITE),
            ]
        );
    }
}
