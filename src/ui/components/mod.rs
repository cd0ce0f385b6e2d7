// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Concrete widgets: buttons, text boxes, popup labels and panels.

pub mod button;
pub mod panel;
pub mod text_popup;
pub mod textbox;

// Re-exports
pub use button::*;
pub use panel::*;
pub use text_popup::*;
pub use textbox::*;
