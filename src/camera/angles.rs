//! Angle and scalar helpers for the orbit rig.
//!
//! Clamping and interpolation follow game-engine conventions rather than
//! `f32::clamp`: inverted bounds never panic, and interpolation factors are
//! saturated to `[0, 1]` so a long frame can never overshoot its target.

use glam::{EulerRot, Quat};

/// Yaw/pitch pair in degrees.
///
/// `yaw` turns around the world up axis, `pitch` tilts around the rig's
/// right axis. Positive pitch looks down onto the target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitAngles {
    /// Horizontal orbit angle in degrees.
    pub yaw: f32,
    /// Vertical orbit angle in degrees.
    pub pitch: f32,
}

impl OrbitAngles {
    /// Create an angle pair from yaw and pitch in degrees.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Build from a `[yaw, pitch]` array as stored in options.
    #[must_use]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Rotation with pitch about X and yaw about Y, no roll.
    ///
    /// Roll is applied first, then pitch, then yaw (`Y * X * Z`), so the
    /// camera's horizon stays level for every yaw.
    #[must_use]
    pub fn to_rotation(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Component-wise interpolation toward `to` by a saturated factor.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            yaw: lerp(self.yaw, to.yaw, t),
            pitch: lerp(self.pitch, to.pitch, t),
        }
    }

    /// Euclidean distance in angle space, used to measure how far the live
    /// orientation is from home.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.yaw - other.yaw).hypot(self.pitch - other.pitch)
    }
}

/// Reduce an angle in degrees to `(-180, 180]`.
#[must_use]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Keep `origin.yaw` in `(-180, 180]` and move `live.yaw` by whole turns so
/// that `live.yaw - origin.yaw` is also in `(-180, 180]`.
///
/// After this call, interpolating `live` toward `origin` takes the shorter
/// way around.
pub fn normalize_yaw(origin: &mut OrbitAngles, live: &mut OrbitAngles) {
    origin.yaw = wrap_degrees(origin.yaw);
    live.yaw = origin.yaw + wrap_degrees(live.yaw - origin.yaw);
}

/// Clamp without the `min <= max` precondition of [`f32::clamp`].
///
/// Below `min` yields `min`, above `max` yields `max`. With inverted bounds
/// the result is one of the bounds.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation with the factor saturated to `[0, 1]`.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    from + (to - from) * t
}
