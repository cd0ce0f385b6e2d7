// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Self-sizing text box.
//!
//! The box wraps its text to `max_width`, then grows around it by border and
//! padding. With a `max_height` it stops growing, clips the text and shows a
//! scroll bar on the right whose length is the visible fraction of the text.
//! Text boxes are decoration: they are never hit by the pointer.

use crate::geometry::{Rect, ScreenPoint, Vector};
use crate::render::{Color, RenderSink};
use crate::ui::{Font, TextProvider, TextRequest, TextTexture, UIResult, Widget, WidgetBase, WidgetPath};
use crate::impl_widget_base;

pub const TEXTBOX_FONT: (Font, u32) = (Font::Orbitron, 12);

const FRAME_COLOR: Color = Color::BLACK;
const FILL_COLOR: Color = Color::rgb(170, 150, 150);
const SCROLL_BAR_COLOR: Color = Color::rgb(90, 70, 70);

pub struct TextBox {
    base: WidgetBase,
    border: f32,
    padding: f32,
    scroll_bar_width: f32,
    max_width: u32,
    max_height: Option<f32>,
    text: Option<TextTexture>,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            border: 2.0,
            padding: 5.0,
            scroll_bar_width: 3.0,
            max_width: 500,
            max_height: None,
            text: None,
        }
    }

    /// Only the corner is used; the size always follows the text.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.base.position = Rect::from_corner(ScreenPoint::new(x, y), self.base.position.size());
        self
    }

    /// Wrap width of the text. Takes effect on the next `text` call.
    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = width;
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self.relayout();
        self
    }

    /// Border and padding, for backends with coarse units.
    pub fn spacing(mut self, border: f32, padding: f32, scroll_bar_width: f32) -> Self {
        self.border = border;
        self.padding = padding;
        self.scroll_bar_width = scroll_bar_width;
        self.relayout();
        self
    }

    pub fn text(mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<Self> {
        self.set_text(provider, text)?;
        Ok(self)
    }

    pub fn set_text(&mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<()> {
        let (font, size) = TEXTBOX_FONT;
        let request = TextRequest::new(font, size, text).wrap(self.max_width);
        self.text = Some(provider.render_text(&request)?);
        self.relayout();
        Ok(())
    }

    /// True when `max_height` hides part of the text.
    pub fn is_clipped(&self) -> bool {
        self.text
            .is_some_and(|t| t.height as f32 > self.visible_text_height())
    }

    fn chrome(&self) -> f32 {
        2.0 * (self.border + self.padding)
    }

    fn visible_text_height(&self) -> f32 {
        let full = self.text.map_or(0.0, |t| t.height as f32);
        match self.max_height {
            Some(max) => full.min((max - self.chrome()).max(0.0)),
            None => full,
        }
    }

    fn relayout(&mut self) {
        let (text_w, text_h) = self
            .text
            .map_or((0.0, 0.0), |t| (t.width as f32, t.height as f32));
        let mut width = text_w + self.chrome();
        let mut height = text_h + self.chrome();
        if let Some(max) = self.max_height {
            if height > max {
                height = max;
                width += self.scroll_bar_width;
            }
        }
        self.base.position = self.base.position.with_size(Vector::new(width, height));
    }
}

impl Widget for TextBox {
    impl_widget_base!(base);

    fn locate(&self, _point: ScreenPoint) -> Option<WidgetPath> {
        None
    }

    fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
        let outer = self.bounds() + offset;
        let inner = outer.shrinked(self.border);
        sink.fill_rect(outer, FRAME_COLOR)?;
        sink.fill_rect(inner, FILL_COLOR)?;

        let Some(text) = self.text else {
            return Ok(());
        };
        let corner = inner.corner() + Vector::new(self.padding, self.padding);
        let visible = self.visible_text_height();
        sink.draw_texture(
            text.id,
            Rect::from_corner(corner, Vector::new(text.width as f32, visible)),
        )?;

        if self.is_clipped() && text.height > 0 {
            let track = inner.height();
            let length = track * visible / text.height as f32;
            let bar = Rect::new(
                inner.max_x() - self.scroll_bar_width,
                inner.min_y(),
                self.scroll_bar_width,
                length,
            );
            sink.fill_rect(bar, SCROLL_BAR_COLOR)?;
        }
        Ok(())
    }
}
