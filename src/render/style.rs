// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Colors and text attributes.

use bitflags::bitflags;
#[cfg(feature = "crossterm")]
use crossterm::{
    queue,
    style::{Attribute as CAttribute, Color as CColor, SetAttribute},
};
use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Source-over composition of `self` onto an opaque `below`.
    pub fn over(self, below: Color) -> Color {
        let a = self.a as u32;
        let mix = |top: u8, bottom: u8| ((top as u32 * a + bottom as u32 * (255 - a)) / 255) as u8;
        Color::rgb(
            mix(self.r, below.r),
            mix(self.g, below.g),
            mix(self.b, below.b),
        )
    }
}

#[cfg(feature = "crossterm")]
impl From<Color> for CColor {
    fn from(color: Color) -> Self {
        CColor::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifier: u16 {
        const BOLD              = 0b0000_0001;
        const DIM               = 0b0000_0010;
        const ITALIC            = 0b0000_0100;
        const UNDERLINED        = 0b0000_1000;
        const REVERSED          = 0b0100_0000;
    }
}

/// Attribute changes needed to go from one modifier set to another.
#[derive(Debug)]
#[cfg(feature = "crossterm")]
pub struct ModifierDiff {
    pub from: Modifier,
    pub to: Modifier,
}

#[cfg(feature = "crossterm")]
impl ModifierDiff {
    pub fn queue<W>(&self, mut w: W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        let removed = self.from - self.to;
        if removed.contains(Modifier::REVERSED) {
            queue!(w, SetAttribute(CAttribute::NoReverse))?;
        }
        if removed.intersects(Modifier::BOLD | Modifier::DIM) {
            queue!(w, SetAttribute(CAttribute::NormalIntensity))?;
        }
        if removed.contains(Modifier::ITALIC) {
            queue!(w, SetAttribute(CAttribute::NoItalic))?;
        }
        if removed.contains(Modifier::UNDERLINED) {
            queue!(w, SetAttribute(CAttribute::NoUnderline))?;
        }

        // NormalIntensity drops both, so re-add whichever survives
        let mut added = self.to - self.from;
        if removed.intersects(Modifier::BOLD | Modifier::DIM) {
            added |= self.to & (Modifier::BOLD | Modifier::DIM);
        }
        if added.contains(Modifier::REVERSED) {
            queue!(w, SetAttribute(CAttribute::Reverse))?;
        }
        if added.contains(Modifier::BOLD) {
            queue!(w, SetAttribute(CAttribute::Bold))?;
        }
        if added.contains(Modifier::DIM) {
            queue!(w, SetAttribute(CAttribute::Dim))?;
        }
        if added.contains(Modifier::ITALIC) {
            queue!(w, SetAttribute(CAttribute::Italic))?;
        }
        if added.contains(Modifier::UNDERLINED) {
            queue!(w, SetAttribute(CAttribute::Underlined))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over() {
        let below = Color::rgb(100, 100, 100);
        assert_eq!(Color::rgb(10, 20, 30).over(below), Color::rgb(10, 20, 30));
        assert_eq!(Color::TRANSPARENT.over(below), below);
        assert_eq!(Color::rgba(200, 0, 100, 128).over(below).r, 150);
    }

    #[test]
    fn test_color_serde_defaults_alpha() {
        let c: Color = toml::from_str("r = 170\ng = 150\nb = 150").unwrap();
        assert_eq!(c, Color::rgb(170, 150, 150));
    }

    #[test]
    fn test_modifier_serde() {
        #[derive(Deserialize)]
        struct Wrap {
            m: Modifier,
        }
        let w: Wrap = toml::from_str("m = \"BOLD | ITALIC\"").unwrap();
        assert_eq!(w.m, Modifier::BOLD | Modifier::ITALIC);
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn test_modifier_diff_writes_only_changes() {
        let mut out = Vec::new();
        ModifierDiff {
            from: Modifier::BOLD,
            to: Modifier::BOLD,
        }
        .queue(&mut out)
        .unwrap();
        assert!(out.is_empty());

        ModifierDiff {
            from: Modifier::empty(),
            to: Modifier::ITALIC,
        }
        .queue(&mut out)
        .unwrap();
        assert!(!out.is_empty());
    }
}
