// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! # Widget Framework
//!
//! A small retained-mode UI: widgets are explicitly positioned, owned by a
//! [`WidgetStorage`] and driven by the [`UI`] dispatcher.
//!
//! ## Core Concepts
//!
//! - **State**: the idle/hovered/pressed/lost machine every widget carries
//! - **Widget**: trait with hit-testing, rendering, update and action hooks
//! - **WidgetStorage**: generational arena, insertion order is both
//!   hit-test order and render order
//! - **UI**: routes pointer events to at most one widget, with capture
//!   between press and release
//! - **Text**: the text provider interface and an explicit texture cache
//!
//! ## Example Usage
//!
//! ```ignore
//! use pixel_widget::ui::*;
//!
//! let mut ui = UI::new();
//! let contracts = ui.add(
//!     Button::new()
//!         .position(10.0, 10.0, 100.0, 30.0)
//!         .text(&mut text, "Contracts")?
//!         .action(|| log::info!("contracts pressed")),
//! );
//! ui.widget_mut::<Button>(contracts)?.set_border(1.0);
//! ```

pub mod state;
pub mod widget;
pub mod storage;
pub mod dispatch;
pub mod text;
pub mod text_util;
pub mod components;

// Re-exports for convenience
pub use state::*;
pub use widget::*;
pub use storage::*;
pub use dispatch::*;
pub use text::*;
pub use components::*;

/// UI Framework result type
pub type UIResult<T> = Result<T, UIError>;

/// UI Framework error types
#[derive(Debug)]
pub enum UIError {
    /// Handle is stale, or the widget behind it has another type
    WidgetNotFound(String),
    /// Rect arithmetic that would produce a negative size
    Geometry(String),
    /// Text or texture could not be produced (missing font...)
    Resource(String),
    /// Backend failed to draw or present
    Render(String),
    /// Configuration could not be read or parsed
    Config(String),
    /// I/O error from a backend or config file
    Io(std::io::Error),
}

impl std::fmt::Display for UIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UIError::WidgetNotFound(msg) => write!(f, "Widget not found: {}", msg),
            UIError::Geometry(msg) => write!(f, "Geometry error: {}", msg),
            UIError::Resource(msg) => write!(f, "Resource error: {}", msg),
            UIError::Render(msg) => write!(f, "Render error: {}", msg),
            UIError::Config(msg) => write!(f, "Config error: {}", msg),
            UIError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for UIError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UIError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UIError {
    fn from(e: std::io::Error) -> Self {
        UIError::Io(e)
    }
}
