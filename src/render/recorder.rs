// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

use crate::geometry::Rect;
use crate::render::{Color, RenderSink, TextureId};
use crate::ui::UIResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Texture(TextureId, Rect),
}

/// Sink that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(r, color) => Some((*r, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn textures(&self) -> Vec<(TextureId, Rect)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Texture(t, r) => Some((*t, *r)),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) -> UIResult<()> {
        self.commands.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> UIResult<()> {
        self.commands.push(DrawCommand::FillRect(rect, color));
        Ok(())
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect) -> UIResult<()> {
        self.commands.push(DrawCommand::Texture(texture, rect));
        Ok(())
    }
}
