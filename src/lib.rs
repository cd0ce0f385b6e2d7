// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! PixelWidget is a small retained-mode UI core for 2D map-style clients.
//!
//! It is made of three cooperating parts:
//!
//! - a per-widget interaction state machine (idle, hovered, pressed, lost)
//!   driven by hover/unhover/press/release transitions,
//! - a single-pass dispatcher that routes pointer events to at most one
//!   widget, with input capture between press and release,
//! - a camera that maps world coordinates to screen pixels with discrete,
//!   exponential zoom levels.
//!
//! Windowing, drawing and text rasterization are external collaborators,
//! reached only through the [`render::RenderSink`], [`event::InputSource`]
//! and [`ui::TextProvider`] traits. A crossterm based terminal host is
//! provided behind the `term` feature.
//!
//! A frame looks like this:
//!
//! ```ignore
//! while view.process_input(&mut adapter)? {
//!     let frames = timer.tick();
//!     if frames > 0 {
//!         view.update(frames as f32 * timer.delta());
//!         view.present(&mut adapter, &markers)?;
//!         adapter.present()?;
//!     }
//!     timer.relax();
//! }
//! ```

/// default framerate per second
pub const GAME_FRAME: u32 = 60;

/// point, vector and rect, tagged with the coordinate space they live in
pub mod geometry;

/// unified input events and the input source interface
pub mod event;

/// fixed-timestep frame pacing
pub mod timer;

/// world <-> screen transform with zoom levels
pub mod camera;

/// widget state machine, storage, dispatcher and concrete widgets
pub mod ui;

/// render sink interface, colors, recording sink and backend adapters
pub mod render;

/// camera + ui glue: event routing, drag-to-pan and the render pass
pub mod view;

/// view configuration loaded from toml
pub mod config;

/// log
#[cfg(feature = "log4rs")]
pub mod log;
