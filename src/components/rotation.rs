use bevy_ecs::prelude::Component;

/// Facing angle in degrees as seen by the renderer.
///
/// 0° points up, 180° points down. The movement direction stored in
/// [`Motion`](super::motion::Motion) is this angle offset by -90°.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self {
            degrees: normalize_degrees(degrees),
        }
    }

    pub fn rotate(&mut self, delta: f32) {
        self.degrees = normalize_degrees(self.degrees + delta);
    }
}

/// Constant rotation applied every frame by the movement system.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Spin {
    pub degrees_per_frame: f32,
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs due to rounding
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
