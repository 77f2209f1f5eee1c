use glam::Vec3;
use parking_lot::RwLock;

use super::Followable;

/// A movable pivot the host updates during its simulate phase.
#[derive(Debug, Default)]
pub struct FollowTarget {
    pose: RwLock<(Vec3, f32)>,
}

impl FollowTarget {
    /// Target at `position` facing `yaw_degrees`.
    #[must_use]
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            pose: RwLock::new((position, yaw_degrees)),
        }
    }

    /// Move the target.
    pub fn set_position(&self, position: Vec3) {
        self.pose.write().0 = position;
    }

    /// Turn the target.
    pub fn set_yaw(&self, yaw_degrees: f32) {
        self.pose.write().1 = yaw_degrees;
    }
}

impl Followable for FollowTarget {
    fn position(&self) -> Vec3 {
        self.pose.read().0
    }

    fn yaw_degrees(&self) -> f32 {
        self.pose.read().1
    }
}
