//! Process-wide pointer settings shared by every rig.
//!
//! Invert flags and sensitivity are a broadcast channel: a settings menu
//! writes them once and every controller holding the handle sees the new
//! values on its next tick. Last write wins.
//!
//! Constructing an [`OrbitCameraController`](crate::camera::OrbitCameraController)
//! resets these settings to their defaults unless the rig's options opt out
//! (`reset_input_settings_on_init = false`). With several rigs alive, creating
//! one therefore discards whatever the others were using.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::RwLock;

/// Sensitivity applied on both axes after a reset.
pub const DEFAULT_SENSITIVITY: f32 = 3.0;

/// Invert flags and per-axis pointer sensitivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    /// Reverse horizontal drag direction.
    pub invert_x: bool,
    /// Reverse vertical drag direction.
    pub invert_y: bool,
    /// Degrees of rotation per unit of pointer motion, per axis.
    pub sensitivity: Vec2,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            invert_x: false,
            invert_y: false,
            sensitivity: Vec2::splat(DEFAULT_SENSITIVITY),
        }
    }
}

/// Cloneable handle to one shared [`InputSettings`].
#[derive(Debug, Clone, Default)]
pub struct SharedInputSettings {
    inner: Arc<RwLock<InputSettings>>,
}

impl SharedInputSettings {
    /// Fresh handle holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current settings.
    #[must_use]
    pub fn get(&self) -> InputSettings {
        *self.inner.read()
    }

    /// Reverse (or restore) horizontal drag direction.
    pub fn set_invert_x(&self, invert: bool) {
        self.inner.write().invert_x = invert;
    }

    /// Reverse (or restore) vertical drag direction.
    pub fn set_invert_y(&self, invert: bool) {
        self.inner.write().invert_y = invert;
    }

    /// Use the same sensitivity on both axes.
    pub fn set_sensitivity(&self, sensitivity: f32) {
        self.inner.write().sensitivity = Vec2::splat(sensitivity);
    }

    /// Replace every field at once.
    pub fn set(&self, settings: InputSettings) {
        *self.inner.write() = settings;
    }

    /// Restore the defaults.
    pub fn reset(&self) {
        self.set(InputSettings::default());
    }
}
