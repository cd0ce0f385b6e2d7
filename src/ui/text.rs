// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Text rasterization interface.
//!
//! Widgets never rasterize text themselves. They describe what they need in a
//! [`TextRequest`] and get back an opaque [`TextTexture`] handle with its size,
//! which the render sink later knows how to draw.
//!
//! [`TextCache`] memoizes any provider. It is an ordinary owned value: create
//! it next to the render surface and drop or [`TextCache::clear`] it with that
//! surface.

use crate::render::{Color, TextureId};
use crate::ui::UIResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Furore,
    Orbitron,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextRequest {
    pub font: Font,
    pub size: u32,
    pub text: String,
    pub color: Color,
    /// Wrap to this width in screen units, `None` keeps one line per `\n`.
    pub wrap_width: Option<u32>,
}

impl TextRequest {
    pub fn new(font: Font, size: u32, text: &str) -> Self {
        Self {
            font,
            size,
            text: text.to_string(),
            color: Color::BLACK,
            wrap_width: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn wrap(mut self, width: u32) -> Self {
        self.wrap_width = Some(width);
        self
    }
}

/// Rendered text, sized in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextTexture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

pub trait TextProvider {
    /// Fails with [`crate::ui::UIError::Resource`] when the font is unavailable.
    fn render_text(&mut self, request: &TextRequest) -> UIResult<TextTexture>;
}

impl<P: TextProvider + ?Sized> TextProvider for &mut P {
    fn render_text(&mut self, request: &TextRequest) -> UIResult<TextTexture> {
        (**self).render_text(request)
    }
}

/// Memoizing wrapper: identical requests share one texture.
pub struct TextCache<P> {
    provider: P,
    textures: HashMap<TextRequest, TextTexture>,
}

impl<P: TextProvider> TextCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            textures: HashMap::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Forgets every cached texture. Handles given out before stay valid only
    /// as long as the provider keeps them.
    pub fn clear(&mut self) {
        debug!("text cache cleared ({} textures)", self.textures.len());
        self.textures.clear();
    }
}

impl<P: TextProvider> TextProvider for TextCache<P> {
    fn render_text(&mut self, request: &TextRequest) -> UIResult<TextTexture> {
        if let Some(texture) = self.textures.get(request) {
            return Ok(*texture);
        }
        let texture = self.provider.render_text(request)?;
        self.textures.insert(request.clone(), texture);
        Ok(texture)
    }
}
