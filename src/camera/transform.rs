use glam::{Mat4, Quat, Vec3};

/// World-space pose written by the rig once per tick.
///
/// The rig's local frame looks down `+Z` with `+Y` up; the camera sits on
/// the `-Z` side of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Direction the camera is looking.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Camera up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Camera right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World-to-view matrix for a renderer using the rig's `+Z` forward
    /// convention.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }
}
