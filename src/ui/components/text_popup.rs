// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Label with a hover popup.
//!
//! While hovered or pressed the label switches to its highlight color and a
//! [`TextBox`] is drawn just below it.

use crate::geometry::{Rect, ScreenPoint, Vector};
use crate::render::{Color, RenderSink};
use crate::ui::{
    Font, State, TextBox, TextProvider, TextRequest, TextTexture, UIResult, Widget, WidgetBase,
};
use crate::impl_widget_base;

pub const LABEL_FONT: (Font, u32) = (Font::Orbitron, 14);

const NORMAL_COLOR: Color = Color::BLACK;
const HIGHLIGHT_COLOR: Color = Color::rgb(180, 0, 0);

/// Vertical gap between the label and its popup.
const POPUP_GAP: f32 = 2.0;

pub struct TextWithPopup {
    base: WidgetBase,
    normal: Option<TextTexture>,
    highlight: Option<TextTexture>,
    popup: TextBox,
}

impl Default for TextWithPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWithPopup {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            normal: None,
            highlight: None,
            popup: TextBox::new(),
        }
    }

    /// Only the corner is used; the size follows the label text.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.base.position = Rect::from_corner(ScreenPoint::new(x, y), self.base.position.size());
        self
    }

    pub fn text(mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<Self> {
        let (font, size) = LABEL_FONT;
        let request = TextRequest::new(font, size, text);
        let normal = provider.render_text(&request.clone().color(NORMAL_COLOR))?;
        let highlight = provider.render_text(&request.color(HIGHLIGHT_COLOR))?;
        self.base.position = self
            .base
            .position
            .with_size(Vector::new(normal.width as f32, normal.height as f32));
        self.normal = Some(normal);
        self.highlight = Some(highlight);
        Ok(self)
    }

    pub fn popup(mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<Self> {
        self.popup.set_text(provider, text)?;
        Ok(self)
    }

    /// Replaces the popup box, e.g. to change its spacing or limits.
    pub fn popup_box(mut self, popup: TextBox) -> Self {
        self.popup = popup;
        self
    }

    pub fn is_popup_shown(&self) -> bool {
        matches!(self.state(), State::Hovered | State::Pressed)
    }
}

impl Widget for TextWithPopup {
    impl_widget_base!(base);

    fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
        let rect = self.bounds() + offset;
        if self.is_popup_shown() {
            if let Some(highlight) = &self.highlight {
                sink.draw_texture(highlight.id, rect)?;
            }
            let below = Vector::new(0.0, self.bounds().height() + POPUP_GAP);
            self.popup
                .render(sink, offset + self.bounds().corner().vector() + below)?;
        } else if let Some(normal) = &self.normal {
            sink.draw_texture(normal.id, rect)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::render::{DrawCommand, RecordingSink};
    use crate::ui::text::tests::FakeText;
    use crate::ui::UI;

    #[test]
    fn test_popup_follows_hover() {
        let mut text = FakeText::default();
        let label = TextWithPopup::new()
            .position(20.0, 40.0)
            .text(&mut text, "Factions")
            .unwrap()
            .popup(&mut text, "hover text")
            .unwrap();
        assert_eq!(label.bounds(), Rect::new(20.0, 40.0, 56.0, 14.0));

        let mut ui = UI::new();
        let id = ui.add(label);

        let mut sink = RecordingSink::new();
        ui.render(&mut sink).unwrap();
        assert_eq!(sink.take().len(), 1);

        ui.process_event(&Event::PointerMove {
            x: 30.0,
            y: 45.0,
            dx: 0.0,
            dy: 0.0,
        });
        assert!(ui.widget::<TextWithPopup>(id).unwrap().is_popup_shown());

        ui.render(&mut sink).unwrap();
        let commands = sink.take();
        // highlight label, popup frame, popup fill, popup text
        assert_eq!(commands.len(), 4);
        match commands[1] {
            DrawCommand::FillRect(frame, _) => {
                assert_eq!(frame.corner(), ScreenPoint::new(20.0, 56.0));
            }
            other => panic!("unexpected {:?}", other),
        }
        // the two label textures differ
        match (commands[0], ui.widget::<TextWithPopup>(id).unwrap().normal) {
            (DrawCommand::Texture(shown, _), Some(normal)) => assert_ne!(shown, normal.id),
            other => panic!("unexpected {:?}", other),
        }
    }
}
