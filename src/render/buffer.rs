// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Cell grid rendering.
//!
//! In text mode one screen unit is one terminal cell. [`Buffer`] holds the
//! cells of a frame; [`CellCanvas`] is the [`RenderSink`] that paints widgets
//! into it, using a [`CellText`] provider for text textures. The backend only
//! has to flush the difference between two buffers.

use crate::geometry::Rect;
use crate::render::{CellText, Color, Modifier, RenderSink, TextureId};
use crate::ui::text_util::truncate_to_width;
use crate::ui::{TextCache, UIError, UIResult};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: Color::WHITE,
            bg: Color::BLACK,
            modifier: Modifier::empty(),
        }
    }
}

impl Cell {
    pub fn set_symbol(&mut self, symbol: &str) -> &mut Cell {
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self
    }

    fn reset(&mut self, bg: Color) {
        self.set_symbol(" ");
        self.fg = Color::WHITE;
        self.bg = bg;
        self.modifier = Modifier::empty();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    width: u16,
    height: u16,
    content: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            content: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn content(&self) -> &[Cell] {
        &self.content
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.content
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Blanks every cell onto `bg`.
    pub fn reset(&mut self, bg: Color) {
        for cell in self.content.iter_mut() {
            cell.reset(bg);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.content[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index_of(x, y).map(move |i| &mut self.content[i])
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pos_of(&self, i: usize) -> (u16, u16) {
        let width = self.width.max(1) as usize;
        ((i % width) as u16, (i / width) as u16)
    }

    /// Cells covered by `rect`: edges are rounded, then clipped to the grid.
    pub fn cell_span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let clamp_x = |v: f32| (v.round() as i32).clamp(0, self.width as i32);
        let clamp_y = |v: f32| (v.round() as i32).clamp(0, self.height as i32);
        (
            clamp_x(rect.min_x()),
            clamp_y(rect.min_y()),
            clamp_x(rect.max_x()),
            clamp_y(rect.max_y()),
        )
    }

    /// Writes `text` starting at cell (x, y), keeping each cell's background.
    /// Wide characters occupy their following cell, anything off-grid is cut.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, fg: Color, modifier: Modifier) {
        let mut cx = x;
        for (i, ch) in text.char_indices() {
            let symbol = &text[i..i + ch.len_utf8()];
            let width = symbol.width() as i32;
            if width == 0 {
                continue;
            }
            if cx + width > self.width as i32 {
                break;
            }
            if let Some(cell) = self.get_mut(cx, y) {
                cell.set_symbol(symbol);
                cell.fg = fg;
                cell.modifier = modifier;
            }
            for skip in 1..width {
                if let Some(cell) = self.get_mut(cx + skip, y) {
                    cell.set_symbol("");
                }
            }
            cx += width;
        }
    }

    /// Cells of `other` that differ from `self`, with their positions.
    pub fn diff<'a>(&self, other: &'a Buffer) -> Vec<(u16, u16, &'a Cell)> {
        let mut updates = vec![];
        if self.width != other.width || self.height != other.height {
            for (i, cell) in other.content.iter().enumerate() {
                let (x, y) = other.pos_of(i);
                updates.push((x, y, cell));
            }
            return updates;
        }

        // cells hidden behind a wide character in `other` are never emitted,
        // cells uncovered by one that went away always are
        let mut invalidated: usize = 0;
        let mut to_skip: usize = 0;
        for (i, (next, prev)) in other.content.iter().zip(self.content.iter()).enumerate() {
            if (next != prev || invalidated > 0) && to_skip == 0 {
                let (x, y) = other.pos_of(i);
                updates.push((x, y, next));
            }
            to_skip = next.symbol.width().saturating_sub(1).max(to_skip.saturating_sub(1));
            let affected = next.symbol.width().max(prev.symbol.width());
            invalidated = affected.max(invalidated).saturating_sub(1);
        }
        updates
    }
}

/// [`RenderSink`] painting into a [`Buffer`].
pub struct CellCanvas {
    pub buffer: Buffer,
    pub text: TextCache<CellText>,
}

impl CellCanvas {
    pub fn new(width: u16, height: u16, text: CellText) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            text: TextCache::new(text),
        }
    }
}

impl RenderSink for CellCanvas {
    fn clear(&mut self, color: Color) -> UIResult<()> {
        self.buffer.reset(color);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> UIResult<()> {
        if rect.is_empty() || color.a == 0 {
            return Ok(());
        }
        let (x0, y0, x1, y1) = self.buffer.cell_span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = self.buffer.get_mut(x, y) {
                    cell.bg = color.over(cell.bg);
                    cell.set_symbol(" ");
                }
            }
        }
        Ok(())
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect) -> UIResult<()> {
        let block = self
            .text
            .provider()
            .block(texture)
            .ok_or_else(|| UIError::Render(format!("unknown texture {:?}", texture)))?;
        let x0 = rect.min_x().round() as i32;
        let y0 = rect.min_y().round() as i32;
        let x1 = rect.max_x().round() as i32;
        let y1 = rect.max_y().round() as i32;
        let max_width = (x1 - x0).max(0) as usize;
        for (row, line) in block.lines.iter().enumerate() {
            let y = y0 + row as i32;
            if y >= y1 {
                break;
            }
            let visible = truncate_to_width(line, max_width);
            self.buffer
                .set_string(x0, y, visible, block.fg, block.modifier);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Font, TextProvider, TextRequest};

    fn row(buffer: &Buffer, y: i32) -> String {
        (0..buffer.width() as i32)
            .map(|x| buffer.get(x, y).unwrap().symbol.clone())
            .collect()
    }

    #[test]
    fn test_set_string_clips() {
        let mut b = Buffer::new(6, 2);
        b.set_string(3, 0, "hello", Color::WHITE, Modifier::empty());
        assert_eq!(row(&b, 0), "   hel");
        b.set_string(-2, 1, "hello", Color::WHITE, Modifier::empty());
        assert_eq!(row(&b, 1), "llo   ");
    }

    #[test]
    fn test_fill_rect_rounds_and_blends() {
        let mut canvas = CellCanvas::new(10, 5, CellText::new());
        canvas.clear(Color::rgb(0, 0, 0)).unwrap();
        canvas
            .fill_rect(Rect::new(0.6, 0.4, 2.0, 1.2), Color::rgb(100, 50, 50))
            .unwrap();
        assert_eq!(canvas.buffer.get(0, 0).unwrap().bg, Color::BLACK);
        assert_eq!(canvas.buffer.get(1, 0).unwrap().bg, Color::rgb(100, 50, 50));
        assert_eq!(canvas.buffer.get(2, 1).unwrap().bg, Color::rgb(100, 50, 50));
        assert_eq!(canvas.buffer.get(3, 0).unwrap().bg, Color::BLACK);
        // out of grid is ignored
        canvas
            .fill_rect(Rect::new(-5.0, -5.0, 100.0, 100.0), Color::WHITE)
            .unwrap();
        assert_eq!(canvas.buffer.get(9, 4).unwrap().bg, Color::WHITE);
    }

    #[test]
    fn test_draw_texture_clipped_to_rect() {
        let mut text = CellText::new();
        text.register(Font::Orbitron, Modifier::BOLD);
        let mut canvas = CellCanvas::new(12, 4, text);
        let tex = canvas
            .text
            .render_text(&TextRequest::new(Font::Orbitron, 12, "alpha beta gamma").wrap(10))
            .unwrap();
        assert_eq!((tex.width, tex.height), (10, 2));

        canvas
            .draw_texture(tex.id, Rect::new(1.0, 1.0, 6.0, 1.0))
            .unwrap();
        assert_eq!(row(&canvas.buffer, 1), " alpha      ");
        assert_eq!(row(&canvas.buffer, 2), " ".repeat(12));
        assert_eq!(canvas.buffer.get(1, 1).unwrap().modifier, Modifier::BOLD);

        assert!(matches!(
            canvas.draw_texture(TextureId(99), Rect::new(0.0, 0.0, 1.0, 1.0)),
            Err(UIError::Render(_))
        ));
    }

    #[test]
    fn test_diff() {
        let a = Buffer::new(4, 2);
        let mut b = a.clone();
        assert!(a.diff(&b).is_empty());
        b.set_string(1, 1, "x", Color::WHITE, Modifier::empty());
        let d = a.diff(&b);
        assert_eq!(d.len(), 1);
        assert_eq!((d[0].0, d[0].1), (1, 1));

        // a wide char skips the cell it covers
        let mut c = a.clone();
        c.set_string(0, 0, "你", Color::WHITE, Modifier::empty());
        let d = a.diff(&c);
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].2.symbol, "你");

        // size change redraws everything
        assert_eq!(Buffer::new(1, 1).diff(&a).len(), 8);
    }
}
