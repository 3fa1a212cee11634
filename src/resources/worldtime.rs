//! Fixed-step simulation clock.
//!
//! The simulation advances in whole frames at a fixed rate (60 by default).
//! All durations given in seconds are converted into frame counts with
//! [`seconds_to_frames`].

use bevy_ecs::prelude::Resource;

pub const DEFAULT_FPS: u32 = 60;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of simulated time since start.
    pub elapsed: f32,
    /// Length of one frame in seconds.
    pub delta: f32,
    /// Frames simulated so far.
    pub frame_count: u64,
    pub fps: u32,
}

impl Default for WorldTime {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}

impl WorldTime {
    pub fn with_fps(fps: u32) -> Self {
        let fps = fps.max(1);
        WorldTime {
            elapsed: 0.0,
            delta: 1.0 / fps as f32,
            frame_count: 0,
            fps,
        }
    }

    pub fn advance(&mut self) {
        self.frame_count += 1;
        self.elapsed = self.frame_count as f32 * self.delta;
    }

    pub fn frames(&self, seconds: f32) -> u32 {
        seconds_to_frames(seconds, self.fps)
    }
}

/// Whole frames for a duration at the given frame rate. Non-positive
/// durations are zero frames.
pub fn seconds_to_frames(seconds: f32, fps: u32) -> u32 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    (seconds * fps as f32).round() as u32
}
