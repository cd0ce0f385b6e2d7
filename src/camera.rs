// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! World <-> screen transform.
//!
//! The camera keeps an integer zoom level, the screen size and the world
//! point shown at the screen center. One screen unit covers
//! `1.2 ^ zoom_level` world units, so a larger level shows more of the world.
//! The vertical axis is flipped: world y grows upward, screen y downward.
//!
//! For a fixed camera state `world_to_screen` and `screen_to_world` are
//! inverses of each other.

use crate::geometry::{ScreenPoint, WorldPoint};
use log::info;

/// Base of the exponential zoom mapping.
pub const ZOOM_BASE: f32 = 1.2;

/// Zoom levels are kept in `-MAX_ZOOM_LEVEL..=MAX_ZOOM_LEVEL`, where both
/// ratios stay finite and the transforms still round-trip.
pub const MAX_ZOOM_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    zoom_level: i32,
    screen_width: u32,
    screen_height: u32,
    world_center: WorldPoint,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom_level: 1,
            screen_width: 0,
            screen_height: 0,
            world_center: WorldPoint::new(0.0, 0.0),
        }
    }
}

impl Camera {
    pub fn new(screen_width: u32, screen_height: u32, zoom_level: i32) -> Self {
        Self {
            zoom_level: zoom_level.clamp(-MAX_ZOOM_LEVEL, MAX_ZOOM_LEVEL),
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        let up_left = self.world_up_left();
        let ratio = self.screen_to_world_ratio();
        ScreenPoint::new(
            (world.x - up_left.x) * ratio,
            (up_left.y - world.y) * ratio,
        )
    }

    pub fn screen_to_world(&self, screen: ScreenPoint) -> WorldPoint {
        let up_left = self.world_up_left();
        let ratio = self.world_to_screen_ratio();
        WorldPoint::new(up_left.x + screen.x * ratio, up_left.y - screen.y * ratio)
    }

    pub fn update_screen_size(&mut self, width: u32, height: u32) {
        if (width, height) != (self.screen_width, self.screen_height) {
            info!("screen size changed: {} x {}", width, height);
        }
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Puts `world` at the screen center.
    pub fn focus(&mut self, world: WorldPoint) {
        self.world_center = world;
    }

    /// Positive `amount` zooms toward the world (scroll up to zoom in).
    pub fn zoom_in(&mut self, amount: i32) {
        self.set_zoom_level(self.zoom_level.saturating_sub(amount));
        info!("zoom level = {}", self.zoom_level);
    }

    pub fn set_zoom_level(&mut self, zoom_level: i32) {
        self.zoom_level = zoom_level.clamp(-MAX_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
    }

    /// Pans by a screen-space delta, so the world follows the pointer.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let ratio = self.world_to_screen_ratio();
        self.world_center.x -= dx * ratio;
        self.world_center.y += dy * ratio;
    }

    /// World coordinate under the top-left screen corner.
    pub fn world_up_left(&self) -> WorldPoint {
        let ratio = self.world_to_screen_ratio();
        WorldPoint::new(
            self.world_center.x - (self.screen_width as f32 * 0.5) * ratio,
            self.world_center.y + (self.screen_height as f32 * 0.5) * ratio,
        )
    }

    /// World units per screen unit.
    pub fn world_to_screen_ratio(&self) -> f32 {
        ZOOM_BASE.powi(self.zoom_level)
    }

    /// Screen units per world unit.
    pub fn screen_to_world_ratio(&self) -> f32 {
        1.0 / self.world_to_screen_ratio()
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }

    pub fn world_center(&self) -> WorldPoint {
        self.world_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_origin_maps_to_screen_center() {
        let mut c = Camera::new(1024, 768, 1);
        c.focus(WorldPoint::new(0.0, 0.0));
        let s = c.world_to_screen(WorldPoint::new(0.0, 0.0));
        assert!(close(s.x, 512.0, 1e-3), "{}", s);
        assert!(close(s.y, 384.0, 1e-3), "{}", s);
    }

    #[test]
    fn test_round_trip() {
        for zoom in [-6, -1, 0, 1, 3, 8] {
            let mut c = Camera::new(1024, 768, zoom);
            c.focus(WorldPoint::new(-37.5, 120.25));
            let mut y = 0.0;
            while y <= 768.0 {
                let mut x = 0.0;
                while x <= 1024.0 {
                    let s = ScreenPoint::new(x, y);
                    let back = c.world_to_screen(c.screen_to_world(s));
                    assert!(close(back.x, s.x, 1e-3), "zoom {} {} -> {}", zoom, s, back);
                    assert!(close(back.y, s.y, 1e-3), "zoom {} {} -> {}", zoom, s, back);
                    x += 64.0;
                }
                y += 48.0;
            }
        }
    }

    #[test]
    fn test_zoom_is_clamped_and_stays_finite() {
        let mut c = Camera::new(1024, 768, 1);
        for _ in 0..500 {
            c.zoom_in(-1);
        }
        assert_eq!(c.zoom_level(), MAX_ZOOM_LEVEL);
        c.zoom_in(i32::MIN);
        assert_eq!(c.zoom_level(), MAX_ZOOM_LEVEL);
        c.set_zoom_level(-1000);
        assert_eq!(c.zoom_level(), -MAX_ZOOM_LEVEL);
        assert_eq!(Camera::new(10, 10, 9999).zoom_level(), MAX_ZOOM_LEVEL);

        for zoom in [-MAX_ZOOM_LEVEL, MAX_ZOOM_LEVEL] {
            c.set_zoom_level(zoom);
            assert!(c.world_to_screen_ratio().is_finite());
            assert!(c.screen_to_world_ratio().is_finite());
            for s in [
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(300.0, 500.0),
                ScreenPoint::new(1024.0, 768.0),
            ] {
                let back = c.world_to_screen(c.screen_to_world(s));
                assert!(close(back.x, s.x, 1e-3), "zoom {} {} -> {}", zoom, s, back);
                assert!(close(back.y, s.y, 1e-3), "zoom {} {} -> {}", zoom, s, back);
            }
        }
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        let c = Camera::new(100, 100, 0);
        let up = c.world_to_screen(WorldPoint::new(0.0, 10.0));
        let down = c.world_to_screen(WorldPoint::new(0.0, -10.0));
        assert!(up.y < down.y);
        assert!(close(up.y, 40.0, 1e-4));
    }

    #[test]
    fn test_zoom_monotonic_and_reversible() {
        let mut c = Camera::default();
        let mut prev = None;
        for level in -10..10 {
            c.set_zoom_level(level);
            let r = c.world_to_screen_ratio();
            if let Some(p) = prev {
                assert!(r > p);
            }
            prev = Some(r);
        }

        let mut c = Camera::default();
        let before = c.world_to_screen_ratio();
        c.zoom_in(1);
        assert_eq!(c.zoom_level(), 0);
        assert!(c.world_to_screen_ratio() < before);
        c.zoom_in(-1);
        assert_eq!(c.world_to_screen_ratio(), before);
    }

    #[test]
    fn test_move_follows_pointer() {
        let mut c = Camera::new(200, 100, 0);
        let grabbed = c.screen_to_world(ScreenPoint::new(50.0, 50.0));
        c.move_by(10.0, 5.0);
        // the world point that was under the pointer moved with it
        let now = c.world_to_screen(grabbed);
        assert!(close(now.x, 60.0, 1e-4));
        assert!(close(now.y, 55.0, 1e-4));
        assert!(close(c.world_center().x, -10.0, 1e-4));
        assert!(close(c.world_center().y, 5.0, 1e-4));
    }

    #[test]
    fn test_move_scales_with_zoom() {
        let mut c = Camera::new(200, 100, 2);
        c.move_by(10.0, 0.0);
        assert!(close(c.world_center().x, -14.4, 1e-4));
    }

    #[test]
    fn test_screen_size() {
        let mut c = Camera::default();
        c.update_screen_size(640, 480);
        assert_eq!(c.screen_size(), (640, 480));
        let up_left = c.world_up_left();
        assert!(close(up_left.x, -384.0, 1e-3));
        assert!(close(up_left.y, 288.0, 1e-3));
    }
}
