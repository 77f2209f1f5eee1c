use glam::{Quat, Vec3};

use crate::collision::LayerMask;
use crate::host::SceneQuery;

/// Clearance kept between the camera and an obstructing surface.
pub const COLLISION_MARGIN: f32 = 0.2;

/// Where the rig hangs for one tick: its orientation, the world-space
/// anchor (target position plus vertical offset) and the lateral offset
/// applied in rig space.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RigFrame {
    pub(crate) rotation: Quat,
    pub(crate) anchor: Vec3,
    pub(crate) lateral: f32,
}

impl RigFrame {
    /// Point `distance` units behind the pivot along the view axis.
    pub(crate) fn point_at(&self, distance: f32) -> Vec3 {
        self.rotation * Vec3::new(self.lateral, 0.0, -distance) + self.anchor
    }

    /// The pivot itself: the line-of-sight start.
    pub(crate) fn pivot(&self) -> Vec3 {
        self.point_at(0.0)
    }
}

/// Distance the camera can back away from the pivot before hitting
/// geometry in `mask`, or `None` when the way to `desired` (plus margin)
/// is clear.
///
/// The result is not clamped; it can be negative when the obstruction is
/// closer to the pivot than the margin.
pub(crate) fn obstructed_distance(
    scene: &dyn SceneQuery,
    frame: &RigFrame,
    desired: f32,
    mask: LayerMask,
) -> Option<f32> {
    let pivot = frame.pivot();
    let wanted = frame.point_at(desired + COLLISION_MARGIN);
    let hit = scene.linecast(pivot, wanted, mask)?;
    let distance = pivot.distance(hit) - COLLISION_MARGIN;
    log::trace!("line of sight blocked at {hit}, distance {distance:.3}");
    Some(distance)
}
