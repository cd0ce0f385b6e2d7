// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! Backends sit behind two small traits from the core: [`crate::render::RenderSink`]
//! for drawing and [`crate::event::InputSource`] for input. A backend is any
//! type implementing both.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │                 View                      │
//! │   UI (widgets)          Camera (markers)  │
//! └───────────┬───────────────────▲───────────┘
//!      draw   │                   │  Event
//!             ▼                   │
//! ┌───────────────────────────────────────────┐
//! │  TermAdapter: CellCanvas ──diff──► tty    │
//! │               crossterm events ──► Event  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! Only the crossterm terminal backend ships with the crate.

pub mod cross;

pub use cross::*;
