// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Button component for user interaction.

use crate::geometry::{Rect, ScreenPoint, Vector};
use crate::render::{Color, RenderSink};
use crate::ui::{Font, TextProvider, TextRequest, TextTexture, UIResult, Widget, WidgetBase};
use crate::impl_widget_base;

pub const BUTTON_FONT: (Font, u32) = (Font::Furore, 14);

/// Frame color per state, indexed by `State as usize`.
const OUTER_COLORS: [Color; 4] = [
    Color::rgb(100, 50, 50),
    Color::rgb(120, 70, 70),
    Color::rgb(70, 120, 70),
    Color::rgb(50, 100, 50),
];

const INNER_COLORS: [Color; 4] = [
    Color::rgb(100, 100, 100),
    Color::rgb(120, 120, 120),
    Color::rgb(120, 150, 120),
    Color::rgb(80, 100, 80),
];

/// Rectangular button with a centered label.
///
/// Press and release over the button runs its action once:
///
/// ```ignore
/// let id = ui.add(
///     Button::new()
///         .position(10.0, 10.0, 100.0, 30.0)
///         .text(&mut text, "Contracts")?
///         .action(|| info!("contracts")),
/// );
/// ```
pub struct Button {
    base: WidgetBase,
    border: f32,
    label: Option<TextTexture>,
    action: Option<Box<dyn FnMut() + Send>>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            border: 2.0,
            label: None,
            action: None,
        }
    }

    pub fn position(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.base.position = Rect::new(x, y, w, h);
        self
    }

    /// Keeps the size, moves the center.
    pub fn center(mut self, x: f32, y: f32) -> Self {
        self.base.position = self.base.position.with_center(ScreenPoint::new(x, y));
        self
    }

    /// Keeps the corner, changes the size.
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.base.position = self.base.position.with_size(Vector::new(w, h));
        self
    }

    pub fn border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Renders the label through `provider`; a missing font fails here.
    pub fn text(mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<Self> {
        self.set_text(provider, text)?;
        Ok(self)
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn set_text(&mut self, provider: &mut dyn TextProvider, text: &str) -> UIResult<()> {
        let (font, size) = BUTTON_FONT;
        self.label = Some(provider.render_text(&TextRequest::new(font, size, text))?);
        Ok(())
    }

    pub fn set_border(&mut self, border: f32) {
        self.border = border;
    }

    pub fn label(&self) -> Option<&TextTexture> {
        self.label.as_ref()
    }

    pub fn outer_color(&self) -> Color {
        OUTER_COLORS[self.state() as usize]
    }

    pub fn inner_color(&self) -> Color {
        INNER_COLORS[self.state() as usize]
    }
}

impl Widget for Button {
    impl_widget_base!(base);

    fn render(&self, sink: &mut dyn RenderSink, offset: Vector) -> UIResult<()> {
        let outer = self.bounds() + offset;
        let inner = outer.shrinked(self.border);

        sink.fill_rect(outer, self.outer_color())?;
        sink.fill_rect(inner, self.inner_color())?;

        if let Some(label) = &self.label {
            let size = Vector::new(label.width as f32, label.height as f32);
            sink.draw_texture(label.id, Rect::from_center(outer.center(), size))?;
        }
        Ok(())
    }

    fn act(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }
}
