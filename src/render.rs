// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! # Rendering
//!
//! Widgets draw through the [`RenderSink`] trait and never talk to a backend
//! directly.
//!
//! ## Submodules
//! - `style`: colors and text attributes
//! - `recorder`: headless sink that records draw commands in issue order
//! - `buffer`: cell grid with diffing, the canvas of the terminal backend
//! - `cell_text`: text provider producing cell blocks
//! - `adapter`: crossterm terminal backend (feature `crossterm`)

pub mod buffer;
pub mod cell_text;
pub mod recorder;
pub mod style;

#[cfg(feature = "crossterm")]
pub mod adapter;

#[cfg(feature = "crossterm")]
pub use adapter::TermAdapter;
pub use buffer::{Buffer, Cell, CellCanvas};
pub use cell_text::CellText;
pub use recorder::{DrawCommand, RecordingSink};
pub use style::{Color, Modifier};

use crate::geometry::Rect;
use crate::ui::UIResult;

/// Opaque handle of a texture owned by a text provider / backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

/// Drawing primitives, in screen space.
///
/// Calls arrive in widget insertion order; later calls paint over earlier ones.
pub trait RenderSink {
    fn clear(&mut self, color: Color) -> UIResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> UIResult<()>;

    /// Draws the texture unscaled at the corner of `rect`, clipped to `rect`.
    fn draw_texture(&mut self, texture: TextureId, rect: Rect) -> UIResult<()>;
}
