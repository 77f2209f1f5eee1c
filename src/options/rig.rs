use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collision::LayerMask;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rig", inline)]
#[serde(default)]
/// Behavior and limits of one orbit rig.
///
/// Bounds are not validated. Inverted pairs (`min > max`) pin the value to
/// one of the bounds instead of failing.
pub struct RigOptions {
    /// Rotate the rig while a drag button is held.
    #[schemars(title = "Allow Rotation")]
    pub allow_rotation: bool,
    /// Lock and hide the pointer while dragging.
    #[schemars(title = "Lock Cursor")]
    pub lock_cursor: bool,
    /// Ease back to the origin orientation when not dragging.
    #[schemars(title = "Return To Origin")]
    pub return_to_origin: bool,
    /// Keep the origin yaw aligned with the target's heading.
    #[schemars(title = "Stay Behind Target")]
    pub stay_behind_target: bool,
    /// Starting distance from the pivot.
    #[schemars(title = "Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Lowest pitch in degrees.
    #[schemars(title = "Min Angle", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub min_angle: f32,
    /// Highest pitch in degrees.
    #[schemars(title = "Max Angle", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub max_angle: f32,
    /// Closest zoom distance.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest zoom distance.
    #[schemars(title = "Max Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Rate (per second) of the ease back to origin.
    #[schemars(title = "Return Smoothing", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub return_smoothing: f32,
    /// Rate (per second) of the ease toward the zoom distance.
    #[schemars(title = "Zoom Smoothing", range(min = 0.0, max = 60.0), extend("step" = 1.0))]
    pub zoom_smooth: f32,
    /// Distance change per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Layers that block the line of sight.
    #[schemars(skip)]
    pub collision_layers: LayerMask,
    /// Home orientation as `[yaw, pitch]` in degrees.
    #[schemars(skip)]
    pub origin_rotation: [f32; 2],
    /// Pivot offset as `[lateral, vertical]`.
    #[schemars(skip)]
    pub target_offset: [f32; 2],
    /// Clamp collision-shortened distances to `[min_distance, max_distance]`.
    /// Off by default: a very close obstruction may pull the camera nearer
    /// than `min_distance`.
    #[schemars(skip)]
    pub clamp_collision_distance: bool,
    /// Reset the shared input settings when a controller is created.
    #[schemars(skip)]
    pub reset_input_settings_on_init: bool,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            lock_cursor: true,
            return_to_origin: true,
            stay_behind_target: false,
            distance: 5.0,
            min_angle: -90.0,
            max_angle: 90.0,
            min_distance: 0.0,
            max_distance: 10.0,
            return_smoothing: 3.0,
            zoom_smooth: 16.0,
            zoom_speed: 1.0,
            collision_layers: LayerMask::NONE,
            origin_rotation: [0.0, 0.0],
            target_offset: [0.0, 0.0],
            clamp_collision_distance: false,
            reset_input_settings_on_init: true,
        }
    }
}
