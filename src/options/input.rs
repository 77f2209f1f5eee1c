use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::settings::{InputSettings, SharedInputSettings, DEFAULT_SENSITIVITY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Persisted form of the shared pointer settings.
pub struct InputSettingsOptions {
    /// Reverse horizontal drag direction.
    #[schemars(title = "Invert X")]
    pub invert_x: bool,
    /// Reverse vertical drag direction.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Degrees of rotation per unit of pointer motion.
    #[schemars(title = "Sensitivity", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub sensitivity: f32,
}

impl Default for InputSettingsOptions {
    fn default() -> Self {
        Self {
            invert_x: false,
            invert_y: false,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl InputSettingsOptions {
    /// Broadcast these values to every rig sharing `shared`.
    pub fn apply_to(&self, shared: &SharedInputSettings) {
        shared.set(InputSettings {
            invert_x: self.invert_x,
            invert_y: self.invert_y,
            sensitivity: Vec2::splat(self.sensitivity),
        });
    }
}
