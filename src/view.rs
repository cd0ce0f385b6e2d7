// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Camera and UI glue.
//!
//! [`View`] is the single owner of the camera and the widget tree. Each input
//! event is offered to the [`UI`] first; only events the UI leaves alone are
//! read as world gestures:
//!
//! - primary press / release arms and disarms dragging
//! - motion while dragging pans the camera
//! - the wheel zooms
//! - a resize updates the camera's screen size
//!
//! `Quit` ends the frame loop.

use crate::camera::Camera;
use crate::config::ViewConfig;
use crate::event::{Event, InputSource};
use crate::geometry::{Rect, Vector, WorldPoint};
use crate::render::{Color, RenderSink};
use crate::ui::{UIResult, UI};
use log::{debug, info};
use std::time::Duration;

/// A world-space point drawn as a small square under the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub point: WorldPoint,
    pub color: Color,
}

impl Marker {
    pub fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            point: WorldPoint::new(x, y),
            color,
        }
    }
}

pub struct View {
    camera: Camera,
    ui: UI,
    drag: bool,
    marker_size: f32,
    background: Color,
}

impl View {
    pub fn new(config: &ViewConfig) -> Self {
        let mut camera = Camera::new(config.width, config.height, config.zoom_level);
        camera.focus(WorldPoint::new(0.0, 0.0));
        Self {
            camera,
            ui: UI::new(),
            drag: false,
            marker_size: config.marker_size,
            background: config.background,
        }
    }

    /// Routes one event. Returns false once the loop should stop.
    pub fn process_event(&mut self, event: &Event) -> bool {
        if let Event::Quit = event {
            info!("quit requested");
            return false;
        }

        if self.ui.process_event(event) {
            return true;
        }

        match *event {
            Event::PointerDown { button, .. } if button.is_primary() => {
                self.drag = true;
            }
            Event::PointerUp { button, .. } if button.is_primary() => {
                self.drag = false;
            }
            Event::PointerMove { dx, dy, .. } if self.drag => {
                self.camera.move_by(dx, dy);
                debug!("pan to {}", self.camera.world_center());
            }
            Event::Wheel { dy } => {
                self.camera.zoom_in(dy);
            }
            Event::WindowResized { width, height } => {
                self.camera.update_screen_size(width, height);
            }
            _ => {}
        }
        true
    }

    /// Drains every pending event from `source`.
    pub fn process_input(&mut self, source: &mut dyn InputSource) -> UIResult<bool> {
        while let Some(event) = source.poll_event(Duration::ZERO)? {
            if !self.process_event(&event) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn update(&mut self, delta: f32) {
        self.ui.update(delta);
    }

    /// Clears, draws the visible markers, then the UI on top.
    pub fn present(&self, sink: &mut dyn RenderSink, markers: &[Marker]) -> UIResult<()> {
        sink.clear(self.background)?;

        let (w, h) = self.camera.screen_size();
        let screen = Rect::new(0.0, 0.0, w as f32, h as f32);
        let size = Vector::new(self.marker_size, self.marker_size);
        for marker in markers {
            let rect = Rect::from_center(self.camera.world_to_screen(marker.point), size);
            if rect.intersects(&screen) {
                sink.fill_rect(rect, marker.color)?;
            }
        }

        self.ui.render(sink)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn ui(&self) -> &UI {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UI {
        &mut self.ui
    }

    pub fn set_marker_size(&mut self, size: f32) {
        self.marker_size = size;
    }
}
