//! Layer-filtered segment casts against simple static geometry.
//!
//! [`StaticScene`] is a ready-made [`SceneQuery`] for hosts without a physics
//! engine of their own: a flat list of spheres, boxes and half-spaces, each
//! tagged with a layer, tested against the rig's line of sight.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::host::SceneQuery;

/// Bit set of collision layers (bit `n` = layer `n`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches no layer.
    pub const NONE: Self = Self(0);
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing only `layer` (0-31).
    #[must_use]
    pub const fn layer(layer: u8) -> Self {
        Self(1 << (layer & 31))
    }

    /// Add `layer` to the mask.
    #[must_use]
    pub const fn with(self, layer: u8) -> Self {
        Self(self.0 | Self::layer(layer).0)
    }

    /// Whether `layer` is in the mask.
    #[must_use]
    pub const fn contains(self, layer: u8) -> bool {
        self.0 & Self::layer(layer).0 != 0
    }
}

/// Static collision shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Solid sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },
    /// Solid axis-aligned box.
    Aabb {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
    /// Solid half-space `normal · p + offset <= 0` (e.g. the ground).
    HalfSpace {
        /// Unit normal pointing out of the solid.
        normal: Vec3,
        /// Plane offset along the normal.
        offset: f32,
    },
}

impl Collider {
    /// Fraction `t` in `[0, 1]` along `start + t * dir` where the segment
    /// first enters the shape. Shapes that already contain `start` are not
    /// reported.
    #[must_use]
    pub fn cast(&self, start: Vec3, dir: Vec3) -> Option<f32> {
        if dir.length_squared() <= f32::EPSILON * f32::EPSILON {
            return None;
        }
        let t = match *self {
            Self::Sphere { center, radius } => {
                segment_sphere(start, dir, center, radius)
            }
            Self::Aabb { min, max } => segment_aabb(start, dir, min, max),
            Self::HalfSpace { normal, offset } => {
                segment_half_space(start, dir, normal, offset)
            }
        }?;
        (0.0..=1.0).contains(&t).then_some(t)
    }
}

fn segment_sphere(start: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = start - center;
    let c = oc.dot(oc) - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let a = dir.dot(dir);
    let b = 2.0 * oc.dot(dir);
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    (t >= 0.0).then_some(t)
}

fn segment_aabb(start: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    if start.cmpge(min).all() && start.cmple(max).all() {
        return None;
    }
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, lo, hi) = (start[axis], dir[axis], min[axis], max[axis]);
        if d == 0.0 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a < b { (a, b) } else { (b, a) }
        };
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }
    (t_enter >= 0.0).then_some(t_enter)
}

fn segment_half_space(start: Vec3, dir: Vec3, normal: Vec3, offset: f32) -> Option<f32> {
    let side = normal.dot(start) + offset;
    if side <= 0.0 {
        return None;
    }
    let approach = normal.dot(dir);
    if approach >= 0.0 {
        return None;
    }
    Some(-side / approach)
}

/// Flat list of layered colliders.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    colliders: Vec<(Collider, u8)>,
}

impl StaticScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `collider` on `layer` (0-31).
    pub fn insert(&mut self, collider: Collider, layer: u8) {
        self.colliders.push((collider, layer));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, collider: Collider, layer: u8) -> Self {
        self.insert(collider, layer);
        self
    }

    /// Number of colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the scene has no colliders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl SceneQuery for StaticScene {
    fn linecast(&self, start: Vec3, end: Vec3, mask: LayerMask) -> Option<Vec3> {
        let dir = end - start;
        self.colliders
            .iter()
            .filter(|(_, layer)| mask.contains(*layer))
            .filter_map(|(collider, _)| collider.cast(start, dir))
            .min_by(f32::total_cmp)
            .map(|t| start + dir * t)
    }
}
