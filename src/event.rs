// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Unified input events.
//!
//! Backends (terminal, SDL, web...) convert their native input into [`Event`]
//! and hand it out through [`InputSource`]. The core only reacts to the
//! primary button, pointer motion, the wheel and window resizes; anything a
//! backend cannot express is simply never produced.

use std::{collections::VecDeque, time::Duration};

use crate::ui::UIResult;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MouseButton {
    /// Left mouse button, the primary button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// One discrete input event, coordinates in screen space.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
    PointerDown { button: MouseButton, x: f32, y: f32 },
    PointerUp { button: MouseButton, x: f32, y: f32 },
    /// `dx`/`dy` is the motion since the previous pointer event.
    PointerMove { x: f32, y: f32, dx: f32, dy: f32 },
    /// Positive is "scroll up".
    Wheel { dy: i32 },
    WindowResized { width: u32, height: u32 },
    Quit,
}

/// Anything that can be polled for input events.
pub trait InputSource {
    /// Waits at most `timeout` for the next event.
    /// `Ok(None)` means nothing arrived in time.
    fn poll_event(&mut self, timeout: Duration) -> UIResult<Option<Event>>;
}

/// Scripted input: events are replayed in order, then the source runs dry.
impl InputSource for VecDeque<Event> {
    fn poll_event(&mut self, _timeout: Duration) -> UIResult<Option<Event>> {
        Ok(self.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source: VecDeque<Event> = VecDeque::from(vec![
            Event::Wheel { dy: 1 },
            Event::Quit,
        ]);
        assert_eq!(
            source.poll_event(Duration::ZERO).unwrap(),
            Some(Event::Wheel { dy: 1 })
        );
        assert_eq!(source.poll_event(Duration::ZERO).unwrap(), Some(Event::Quit));
        assert_eq!(source.poll_event(Duration::ZERO).unwrap(), None);
    }

    #[test]
    fn test_primary_button() {
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
        assert!(!MouseButton::Middle.is_primary());
    }
}
