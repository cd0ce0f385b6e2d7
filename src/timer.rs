// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Fixed-timestep frame pacing.
//!
//! The timer counts whole frames since it was created. Each [`FrameTimer::tick`]
//! reports how many frames elapsed since the previous tick (0 when called
//! again within the same frame), and [`FrameTimer::relax`] sleeps until the
//! next frame boundary. Widgets and the camera never look at the clock: the
//! main loop turns the frame count into a `delta` and passes it down.

use std::time::{Duration, Instant};

/// Frames are at least one nanosecond long.
pub const MAX_FPS: u32 = 1_000_000_000;

pub struct FrameTimer {
    start: Instant,
    frame: Duration,
    delta: f32,
    last_frame: u64,
}

impl FrameTimer {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, start: Instant) -> Self {
        let fps = fps.clamp(1, MAX_FPS);
        Self {
            start,
            frame: Duration::from_nanos(1_000_000_000 / fps as u64),
            delta: 1.0 / fps as f32,
            last_frame: 0,
        }
    }

    /// Frames elapsed since the previous tick.
    pub fn tick(&mut self) -> u32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> u32 {
        let current = self.frame_index(now);
        let passed = current.saturating_sub(self.last_frame);
        self.last_frame = self.last_frame.max(current);
        passed.min(u32::MAX as u64) as u32
    }

    /// Seconds per frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Sleeps until the start of the frame after the last ticked one.
    pub fn relax(&self) {
        let now = Instant::now();
        let next = self.next_frame_time();
        if next > now {
            std::thread::sleep(next - now);
        }
    }

    pub fn next_frame_time(&self) -> Instant {
        let nanos = (self.frame.as_nanos() as u64).saturating_mul(self.last_frame + 1);
        self.start + Duration::from_nanos(nanos)
    }

    fn frame_index(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_nanos() / self.frame.as_nanos()) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta() {
        let t = FrameTimer::new(50);
        assert!((t.delta() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_frames_passed() {
        let start = Instant::now();
        let mut t = FrameTimer::starting_at(10, start);
        assert_eq!(t.tick_at(start), 0);
        assert_eq!(t.tick_at(start + Duration::from_millis(50)), 0);
        assert_eq!(t.tick_at(start + Duration::from_millis(100)), 1);
        assert_eq!(t.tick_at(start + Duration::from_millis(150)), 0);
        assert_eq!(t.tick_at(start + Duration::from_millis(420)), 3);
        // a clock reading from the past never reports negative progress
        assert_eq!(t.tick_at(start + Duration::from_millis(200)), 0);
    }

    #[test]
    fn test_next_frame_time() {
        let start = Instant::now();
        let mut t = FrameTimer::starting_at(10, start);
        assert_eq!(t.next_frame_time(), start + Duration::from_millis(100));
        t.tick_at(start + Duration::from_millis(250));
        assert_eq!(t.next_frame_time(), start + Duration::from_millis(300));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let t = FrameTimer::new(0);
        assert_eq!(t.delta(), 1.0);
    }

    #[test]
    fn test_huge_fps_is_clamped() {
        let start = Instant::now();
        let mut t = FrameTimer::starting_at(2_000_000_000, start);
        assert_eq!(t.delta(), 1.0 / MAX_FPS as f32);
        assert_eq!(t.tick_at(start + Duration::from_millis(1)), 1_000_000);
        assert_eq!(t.next_frame_time(), start + Duration::from_nanos(1_000_001));
    }
}
