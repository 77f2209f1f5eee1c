//! Services the rig needs from its host application.
//!
//! The controller never reaches for global input, cursor or physics state.
//! Everything it reads or drives is one of the traits below, handed over at
//! construction in a [`Services`] bundle. Service methods take `&self` so a
//! host can keep an [`Arc`] to the same object it injected and keep feeding
//! it between ticks.

mod clock;
mod cursor;
mod target;

use std::sync::Arc;

pub use clock::{ManualClock, SystemClock};
pub use cursor::CursorState;
use glam::{Vec2, Vec3};
pub use target::FollowTarget;

use crate::collision::LayerMask;

/// Pointer state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Whether the primary (left) drag button is held.
    pub primary: bool,
    /// Whether the secondary (right) drag button is held.
    pub secondary: bool,
    /// Pointer motion since the previous sample (x right, y up).
    pub delta: Vec2,
    /// Scroll wheel motion since the previous sample (positive = away from
    /// the user).
    pub scroll: f32,
}

impl PointerSample {
    /// Whether either drag button is held.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.primary || self.secondary
    }

    /// Whether the pointer moved at all during the frame.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.delta.x != 0.0 || self.delta.y != 0.0
    }
}

/// Something the rig can orbit around.
pub trait Followable {
    /// World-space position of the pivot.
    fn position(&self) -> Vec3;
    /// World-space heading in degrees.
    fn yaw_degrees(&self) -> f32;
}

/// Per-frame pointer source.
pub trait PointerInput {
    /// Sample buttons, motion and scroll for the current frame.
    ///
    /// Called exactly once per tick.
    fn sample(&self) -> PointerSample;
}

/// Pointer lock and cursor visibility.
pub trait CursorControl {
    /// Whether the cursor is currently shown.
    fn is_visible(&self) -> bool;
    /// Lock the pointer in place and hide the cursor.
    fn lock_and_hide(&self);
    /// Release the pointer lock and show the cursor.
    fn unlock_and_show(&self);
}

/// Line-of-sight test against scene geometry.
pub trait SceneQuery {
    /// First obstruction on the segment `start -> end` among colliders in
    /// `mask`, as a world-space hit point.
    fn linecast(&self, start: Vec3, end: Vec3, mask: LayerMask) -> Option<Vec3>;
}

/// Frame timing source.
pub trait FrameClock {
    /// Seconds elapsed since the previous frame.
    fn delta_seconds(&self) -> f32;
}

impl<T: Followable + ?Sized> Followable for Arc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn yaw_degrees(&self) -> f32 {
        (**self).yaw_degrees()
    }
}

impl<T: PointerInput + ?Sized> PointerInput for Arc<T> {
    fn sample(&self) -> PointerSample {
        (**self).sample()
    }
}

impl<T: CursorControl + ?Sized> CursorControl for Arc<T> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn lock_and_hide(&self) {
        (**self).lock_and_hide();
    }

    fn unlock_and_show(&self) {
        (**self).unlock_and_show();
    }
}

impl<T: SceneQuery + ?Sized> SceneQuery for Arc<T> {
    fn linecast(&self, start: Vec3, end: Vec3, mask: LayerMask) -> Option<Vec3> {
        (**self).linecast(start, end, mask)
    }
}

impl<T: FrameClock + ?Sized> FrameClock for Arc<T> {
    fn delta_seconds(&self) -> f32 {
        (**self).delta_seconds()
    }
}

/// A scene with nothing in it. Every linecast misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneQuery for EmptyScene {
    fn linecast(&self, _start: Vec3, _end: Vec3, _mask: LayerMask) -> Option<Vec3> {
        None
    }
}

/// The host services injected into a controller.
pub struct Services {
    /// Pointer buttons, motion and scroll.
    pub input: Box<dyn PointerInput>,
    /// Pointer lock and cursor visibility.
    pub cursor: Box<dyn CursorControl>,
    /// Line-of-sight queries.
    pub scene: Box<dyn SceneQuery>,
    /// Frame delta time.
    pub clock: Box<dyn FrameClock>,
}

impl Services {
    /// Bundle the four services.
    #[must_use]
    pub fn new(
        input: impl PointerInput + 'static,
        cursor: impl CursorControl + 'static,
        scene: impl SceneQuery + 'static,
        clock: impl FrameClock + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            cursor: Box::new(cursor),
            scene: Box::new(scene),
            clock: Box::new(clock),
        }
    }
}
