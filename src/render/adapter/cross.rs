// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

use crate::{
    event::{Event, InputSource, MouseButton},
    geometry::Rect,
    render::{
        buffer::{Buffer, CellCanvas},
        style::{Color, Modifier, ModifierDiff},
        Cell, CellText, RenderSink, TextureId,
    },
    ui::{TextCache, UIResult},
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    event::{
        Event as CEvent, KeyCode as CKeyCode, KeyEventKind, KeyModifiers,
        MouseButton as CMouseButton, MouseEventKind,
    },
    execute, queue,
    style::{
        Attribute as CAttribute, Color as CColor, Print, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use log::{debug, info};
use std::io::{self, Write};
use std::time::Duration;

/// Terminal backend: paints into a cell canvas and flushes the changed cells.
pub struct TermAdapter {
    pub writer: Box<dyn Write>,
    canvas: CellCanvas,
    previous: Buffer,
    full_redraw: bool,
    last_pointer: Option<(u16, u16)>,
}

impl TermAdapter {
    pub fn new(text: CellText) -> Self {
        Self {
            writer: Box::new(io::stdout()),
            canvas: CellCanvas::new(0, 0, text),
            previous: Buffer::default(),
            full_redraw: true,
            last_pointer: None,
        }
    }

    /// Enters raw mode and the alternate screen. Returns the terminal size.
    pub fn init(&mut self) -> UIResult<(u16, u16)> {
        let (width, height) = terminal::size()?;
        enable_raw_mode()?;
        execute!(self.writer, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        self.resize(width, height);
        info!("terminal {} x {}", width, height);
        Ok((width, height))
    }

    /// Restores the terminal. Safe to call after a failed `init`.
    pub fn reset(&mut self) -> UIResult<()> {
        disable_raw_mode()?;
        execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        Ok(())
    }

    pub fn size(&self) -> (u16, u16) {
        (self.canvas.buffer.width(), self.canvas.buffer.height())
    }

    /// Text provider whose textures this adapter can draw.
    pub fn text(&mut self) -> &mut TextCache<CellText> {
        &mut self.canvas.text
    }

    pub fn buffer(&self) -> &Buffer {
        &self.canvas.buffer
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.canvas.buffer.resize(width, height);
        self.full_redraw = true;
    }

    /// Writes the cells changed since the last present.
    pub fn present(&mut self) -> UIResult<()> {
        let current = &self.canvas.buffer;
        let updates: Vec<(u16, u16, &Cell)> = if self.full_redraw {
            current
                .content()
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let (x, y) = current.pos_of(i);
                    (x, y, cell)
                })
                .collect()
        } else {
            self.previous.diff(current)
        };
        debug!("present {} cells", updates.len());

        let mut fg: Option<Color> = None;
        let mut bg: Option<Color> = None;
        let mut modifier = Modifier::empty();
        let mut last_pos: Option<(u16, u16)> = None;
        for (x, y, cell) in updates {
            // Move the cursor if the previous location was not (x - 1, y)
            if !matches!(last_pos, Some(p) if x == p.0 + 1 && y == p.1) {
                queue!(self.writer, MoveTo(x, y))?;
            }
            last_pos = Some((x, y));
            if cell.modifier != modifier {
                ModifierDiff {
                    from: modifier,
                    to: cell.modifier,
                }
                .queue(&mut self.writer)?;
                modifier = cell.modifier;
            }
            if fg != Some(cell.fg) {
                queue!(self.writer, SetForegroundColor(CColor::from(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.writer, SetBackgroundColor(CColor::from(cell.bg)))?;
                bg = Some(cell.bg);
            }
            queue!(self.writer, Print(&cell.symbol))?;
        }
        queue!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset),
            SetAttribute(CAttribute::Reset)
        )?;
        self.writer.flush()?;

        self.previous.clone_from(&self.canvas.buffer);
        self.full_redraw = false;
        Ok(())
    }
}

impl RenderSink for TermAdapter {
    fn clear(&mut self, color: Color) -> UIResult<()> {
        self.canvas.clear(color)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> UIResult<()> {
        self.canvas.fill_rect(rect, color)
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect) -> UIResult<()> {
        self.canvas.draw_texture(texture, rect)
    }
}

impl InputSource for TermAdapter {
    fn poll_event(&mut self, timeout: Duration) -> UIResult<Option<Event>> {
        let mut timeout = timeout;
        while crossterm::event::poll(timeout)? {
            let e = crossterm::event::read()?;
            if let CEvent::Resize(width, height) = e {
                self.resize(width, height);
            }
            if let Some(event) = input_event_from_cross(&e, &mut self.last_pointer) {
                return Ok(Some(event));
            }
            // drain what is already queued, but wait only once
            timeout = Duration::ZERO;
        }
        Ok(None)
    }
}

/// Convert a crossterm event into an [`Event`].
///
/// `last_pointer` is the previous pointer cell; motion deltas are measured
/// from it and it is updated by every mouse event.
pub fn input_event_from_cross(e: &CEvent, last_pointer: &mut Option<(u16, u16)>) -> Option<Event> {
    match e {
        CEvent::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                CKeyCode::Char('q') | CKeyCode::Esc => Some(Event::Quit),
                CKeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Event::Quit)
                }
                _ => None,
            }
        }
        CEvent::Mouse(mouse) => {
            let (column, row) = (mouse.column, mouse.row);
            let (x, y) = (column as f32, row as f32);
            let event = match mouse.kind {
                MouseEventKind::Down(b) => Some(Event::PointerDown {
                    button: button_from_cross(b),
                    x,
                    y,
                }),
                MouseEventKind::Up(b) => Some(Event::PointerUp {
                    button: button_from_cross(b),
                    x,
                    y,
                }),
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    let (lx, ly) = last_pointer.unwrap_or((column, row));
                    Some(Event::PointerMove {
                        x,
                        y,
                        dx: x - lx as f32,
                        dy: y - ly as f32,
                    })
                }
                MouseEventKind::ScrollUp => Some(Event::Wheel { dy: 1 }),
                MouseEventKind::ScrollDown => Some(Event::Wheel { dy: -1 }),
                _ => None,
            };
            *last_pointer = Some((column, row));
            event
        }
        CEvent::Resize(width, height) => Some(Event::WindowResized {
            width: *width as u32,
            height: *height as u32,
        }),
        _ => None,
    }
}

fn button_from_cross(b: CMouseButton) -> MouseButton {
    match b {
        CMouseButton::Left => MouseButton::Left,
        CMouseButton::Right => MouseButton::Right,
        CMouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CEvent {
        CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_conversion_tracks_deltas() {
        let mut last = None;
        assert_eq!(
            input_event_from_cross(&mouse(MouseEventKind::Moved, 10, 5), &mut last),
            Some(Event::PointerMove {
                x: 10.0,
                y: 5.0,
                dx: 0.0,
                dy: 0.0
            })
        );
        assert_eq!(
            input_event_from_cross(&mouse(MouseEventKind::Down(CMouseButton::Left), 10, 5), &mut last),
            Some(Event::PointerDown {
                button: MouseButton::Left,
                x: 10.0,
                y: 5.0
            })
        );
        assert_eq!(
            input_event_from_cross(&mouse(MouseEventKind::Drag(CMouseButton::Left), 13, 3), &mut last),
            Some(Event::PointerMove {
                x: 13.0,
                y: 3.0,
                dx: 3.0,
                dy: -2.0
            })
        );
        assert_eq!(last, Some((13, 3)));
    }

    #[test]
    fn test_wheel_resize_and_quit() {
        let mut last = None;
        assert_eq!(
            input_event_from_cross(&mouse(MouseEventKind::ScrollUp, 0, 0), &mut last),
            Some(Event::Wheel { dy: 1 })
        );
        assert_eq!(
            input_event_from_cross(&mouse(MouseEventKind::ScrollDown, 0, 0), &mut last),
            Some(Event::Wheel { dy: -1 })
        );
        assert_eq!(
            input_event_from_cross(&CEvent::Resize(80, 24), &mut last),
            Some(Event::WindowResized {
                width: 80,
                height: 24
            })
        );
        let q = CEvent::Key(KeyEvent::new(CKeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(input_event_from_cross(&q, &mut last), Some(Event::Quit));
        let ctrl_c = CEvent::Key(KeyEvent::new(CKeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input_event_from_cross(&ctrl_c, &mut last), Some(Event::Quit));
        let a = CEvent::Key(KeyEvent::new(CKeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(input_event_from_cross(&a, &mut last), None);
    }
}
