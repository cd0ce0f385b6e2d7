// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Text provider for cell grids.
//!
//! A terminal cannot load font files, so a [`Font`] is "available" once it has
//! been registered with the attributes that stand in for it. Sizes are
//! ignored: every glyph is one cell tall.

use crate::render::{Color, Modifier, TextureId};
use crate::ui::text_util::{block_size, wrap_text};
use crate::ui::{Font, TextProvider, TextRequest, TextTexture, UIError, UIResult};
use log::info;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub fg: Color,
    pub modifier: Modifier,
}

#[derive(Debug, Default)]
pub struct CellText {
    fonts: HashMap<Font, Modifier>,
    blocks: Vec<TextBlock>,
}

impl CellText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, font: Font, modifier: Modifier) {
        info!("font {:?} registered as {:?}", font, modifier);
        self.fonts.insert(font, modifier);
    }

    pub fn is_registered(&self, font: Font) -> bool {
        self.fonts.contains_key(&font)
    }

    pub fn block(&self, id: TextureId) -> Option<&TextBlock> {
        self.blocks.get(id.0 as usize)
    }
}

impl TextProvider for CellText {
    fn render_text(&mut self, request: &TextRequest) -> UIResult<TextTexture> {
        let modifier = *self
            .fonts
            .get(&request.font)
            .ok_or_else(|| UIError::Resource(format!("font {:?} is not registered", request.font)))?;

        let lines = match request.wrap_width {
            Some(width) => wrap_text(&request.text, width as usize),
            None => request.text.split('\n').map(str::to_string).collect(),
        };
        let (width, height) = block_size(&lines);

        let id = TextureId(self.blocks.len() as u64);
        self.blocks.push(TextBlock {
            lines,
            fg: request.color,
            modifier,
        });
        Ok(TextTexture {
            id,
            width: width as u32,
            height: height as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_font_fails() {
        let mut text = CellText::new();
        let err = text.render_text(&TextRequest::new(Font::Furore, 14, "Contracts"));
        assert!(matches!(err, Err(UIError::Resource(_))));
    }

    #[test]
    fn test_block_metrics() {
        let mut text = CellText::new();
        text.register(Font::Furore, Modifier::BOLD);
        assert!(text.is_registered(Font::Furore));
        assert!(!text.is_registered(Font::Orbitron));

        let req = TextRequest::new(Font::Furore, 14, "Factions\nand more").color(Color::rgb(180, 0, 0));
        let tex = text.render_text(&req).unwrap();
        assert_eq!((tex.width, tex.height), (8, 2));

        let block = text.block(tex.id).unwrap();
        assert_eq!(block.lines, vec!["Factions", "and more"]);
        assert_eq!(block.fg, Color::rgb(180, 0, 0));
        assert_eq!(block.modifier, Modifier::BOLD);
    }
}
