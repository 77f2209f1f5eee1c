//! Third-person orbit rig.
//!
//! Turns pointer drags, scroll and frame time into a smoothed camera pose
//! around a moving target, with pitch limits, yaw wrap-around, zoom easing
//! and line-of-sight collision.

/// Angle math: wrap-around, clamping and interpolation.
pub mod angles;
/// The orbit camera controller and its per-tick update.
pub mod controller;
mod cursor;
mod occlusion;
/// Camera pose and view matrix.
pub mod transform;

pub use angles::OrbitAngles;
pub use controller::OrbitCameraController;
pub use occlusion::COLLISION_MARGIN;
pub use transform::Transform;
