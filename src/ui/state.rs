// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Widget interaction state machine.
//!
//! Pure: no geometry, no dispatch. Four states, four transitions and a fixed
//! table between them. `Lost` means "pressed, but the pointer left before the
//! release"; releasing from `Lost` goes back to `Idle` and must not trigger
//! the widget's action.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Hover,
    Unhover,
    Press,
    Release,
}

impl State {
    pub const ALL: [State; 4] = [State::Idle, State::Hovered, State::Pressed, State::Lost];

    pub fn next(self, transition: Transition) -> State {
        TRANSITIONS[self as usize][transition as usize]
    }
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::Hover,
        Transition::Unhover,
        Transition::Press,
        Transition::Release,
    ];
}

use State::*;

#[rustfmt::skip]
const TRANSITIONS: [[State; 4]; 4] = [
    //  hover    unhover  press    release
    [Hovered, Idle, Pressed, Idle],    // from idle
    [Hovered, Idle, Pressed, Hovered], // from hovered
    [Pressed, Lost, Pressed, Hovered], // from pressed
    [Pressed, Lost, Lost,    Idle],    // from lost
];
