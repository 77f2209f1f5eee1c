use std::sync::{Arc, Weak};

use glam::{Mat4, Quat, Vec3};

use super::angles::{clamp, lerp, normalize_yaw, OrbitAngles};
use super::cursor::sync_cursor;
use super::occlusion::{obstructed_distance, RigFrame};
use super::transform::Transform;
use crate::host::{Followable, PointerSample, Services};
use crate::options::RigOptions;
use crate::settings::SharedInputSettings;

/// Third-person orbit camera following one target.
///
/// Each frame the host first runs its simulate phase (target movement,
/// physics), then calls [`tick`](Self::tick) or [`step`](Self::step). The
/// rig must see the target's final position for the frame; ticking before
/// the target moves leaves the camera one frame behind.
///
/// Without a live target the rig holds still: zoom, rotation and pose are
/// left untouched and only the cursor is released.
pub struct OrbitCameraController {
    options: RigOptions,
    settings: SharedInputSettings,
    services: Services,
    target: Option<Weak<dyn Followable>>,

    /// Home orientation the rig eases back to.
    origin: OrbitAngles,
    /// Orientation driving the rendered pose.
    input: OrbitAngles,
    /// Smoothed (and possibly collision-shortened) distance.
    distance: f32,
    /// Zoom distance the smoothing heads for.
    desired_distance: f32,
    rotation: Quat,
    transform: Transform,
}

impl OrbitCameraController {
    /// Create a rig with no target.
    ///
    /// Live orientation starts at `options.origin_rotation`, both distances
    /// at `options.distance`. Unless `options.reset_input_settings_on_init`
    /// is cleared, `settings` is reset to its defaults, which every other
    /// rig sharing it will observe.
    #[must_use]
    pub fn new(
        options: RigOptions,
        settings: SharedInputSettings,
        services: Services,
    ) -> Self {
        if options.reset_input_settings_on_init {
            log::debug!("orbit rig init: resetting shared input settings");
            settings.reset();
        }
        let origin = OrbitAngles::from_array(options.origin_rotation);
        Self {
            distance: options.distance,
            desired_distance: options.distance,
            options,
            settings,
            services,
            target: None,
            origin,
            input: origin,
            rotation: origin.to_rotation(),
            transform: Transform::default(),
        }
    }

    /// Follow `target`. The rig only holds a weak reference; once the
    /// owner drops it the rig behaves as if it had no target.
    pub fn set_target<T: Followable + 'static>(&mut self, target: &Arc<T>) {
        let weak = Arc::downgrade(target);
        let weak: Weak<dyn Followable> = weak;
        self.target = Some(weak);
        log::debug!("orbit rig: target attached");
    }

    /// Stop following.
    pub fn clear_target(&mut self) {
        if self.target.take().is_some() {
            log::debug!("orbit rig: target cleared");
        }
    }

    /// Whether a target is attached and still alive.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.live_target().is_some()
    }

    fn live_target(&self) -> Option<Arc<dyn Followable>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    /// Advance one frame.
    ///
    /// Samples input and frame time once, updates the cursor lock, then
    /// the pose. Call after the frame's simulate phase has finished.
    pub fn tick(&mut self) {
        let sample = self.services.input.sample();
        let dt = self.services.clock.delta_seconds();
        self.update_cursor(&sample);
        self.update_pose(&sample, dt);
    }

    /// Run `simulate` (target movement for this frame), then [`tick`](Self::tick).
    pub fn step(&mut self, simulate: impl FnOnce()) {
        simulate();
        self.tick();
    }

    /// Lock the pointer while dragging with motion, release it otherwise.
    pub fn update_cursor(&self, sample: &PointerSample) {
        let engaged = self.options.lock_cursor
            && self.has_target()
            && sample.dragging()
            && sample.moved();
        sync_cursor(self.services.cursor.as_ref(), engaged);
    }

    /// Apply zoom and rotation input, smooth the distance, resolve
    /// occlusion and write the transform. No-op without a live target.
    pub fn update_pose(&mut self, sample: &PointerSample, dt: f32) {
        let Some(target) = self.live_target() else {
            return;
        };

        self.zoom(sample.scroll);
        self.orient(sample, target.yaw_degrees(), dt);
        self.rotation = self.input.to_rotation();

        let opts = &self.options;
        self.distance = clamp(
            lerp(self.distance, self.desired_distance, dt * opts.zoom_smooth),
            opts.min_distance,
            opts.max_distance,
        );

        let [lateral, vertical] = opts.target_offset;
        let frame = RigFrame {
            rotation: self.rotation,
            anchor: target.position() + Vec3::new(0.0, vertical, 0.0),
            lateral,
        };
        if let Some(blocked) = obstructed_distance(
            self.services.scene.as_ref(),
            &frame,
            self.desired_distance,
            opts.collision_layers,
        ) {
            self.distance = if opts.clamp_collision_distance {
                clamp(blocked, opts.min_distance, opts.max_distance)
            } else {
                blocked
            };
        }

        self.transform = Transform {
            position: frame.point_at(self.distance),
            rotation: self.rotation,
        };
    }

    fn zoom(&mut self, scroll: f32) {
        let opts = &self.options;
        if scroll < 0.0 {
            self.desired_distance += opts.zoom_speed;
        } else if scroll > 0.0 {
            self.desired_distance -= opts.zoom_speed;
        }
        self.desired_distance =
            clamp(self.desired_distance, opts.min_distance, opts.max_distance);
    }

    fn orient(&mut self, sample: &PointerSample, target_yaw: f32, dt: f32) {
        let opts = &self.options;
        if opts.allow_rotation && sample.dragging() {
            let settings = self.settings.get();
            let dx = sample.delta.x * settings.sensitivity.x;
            let dy = sample.delta.y * settings.sensitivity.y;

            self.input.yaw += if settings.invert_x { -dx } else { dx };
            normalize_yaw(&mut self.origin, &mut self.input);

            self.input.pitch -= if settings.invert_y { -dy } else { dy };
            self.input.pitch =
                clamp(self.input.pitch, opts.min_angle, opts.max_angle);

            // Dragging with the secondary button re-homes the rig.
            if sample.secondary {
                self.origin = self.input;
                normalize_yaw(&mut self.origin, &mut self.input);
            }
        } else {
            if opts.stay_behind_target {
                self.origin.yaw = target_yaw;
                normalize_yaw(&mut self.origin, &mut self.input);
            }
            if opts.return_to_origin {
                self.input =
                    self.input.lerp(self.origin, opts.return_smoothing * dt);
            }
        }
    }

    /// Pose written by the last tick.
    #[must_use]
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-to-view matrix of the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.view_matrix()
    }

    /// Orientation computed by the last tick.
    #[must_use]
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Current camera distance from the pivot.
    #[must_use]
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Zoom distance the rig is easing toward.
    #[must_use]
    pub const fn desired_distance(&self) -> f32 {
        self.desired_distance
    }

    /// Orientation currently driving the pose.
    #[must_use]
    pub const fn input_rotation(&self) -> OrbitAngles {
        self.input
    }

    /// Home orientation.
    #[must_use]
    pub const fn origin_rotation(&self) -> OrbitAngles {
        self.origin
    }

    /// Move the home orientation. The live orientation eases toward it on
    /// idle ticks when `return_to_origin` is set.
    pub fn set_origin_rotation(&mut self, origin: OrbitAngles) {
        self.origin = origin;
        normalize_yaw(&mut self.origin, &mut self.input);
    }

    /// Rig options.
    #[must_use]
    pub const fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Mutable rig options; changes apply from the next tick.
    pub fn options_mut(&mut self) -> &mut RigOptions {
        &mut self.options
    }

    /// Handle to the shared input settings this rig reads.
    #[must_use]
    pub const fn settings(&self) -> &SharedInputSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use parking_lot::Mutex;
    use rand::Rng;

    use super::*;
    use crate::collision::{Collider, LayerMask, StaticScene};
    use crate::host::{
        CursorControl, CursorState, EmptyScene, FollowTarget, ManualClock,
        PointerInput, SceneQuery,
    };

    const DT: f32 = 0.016;

    /// Replays the same sample every tick until changed.
    #[derive(Default)]
    struct Scripted(Mutex<PointerSample>);

    impl Scripted {
        fn set(&self, sample: PointerSample) {
            *self.0.lock() = sample;
        }

        fn drag(&self, dx: f32, dy: f32) {
            self.set(PointerSample {
                primary: true,
                delta: Vec2::new(dx, dy),
                ..PointerSample::default()
            });
        }

        fn idle(&self) {
            self.set(PointerSample::default());
        }
    }

    impl PointerInput for Scripted {
        fn sample(&self) -> PointerSample {
            *self.0.lock()
        }
    }

    struct Rig {
        controller: OrbitCameraController,
        input: Arc<Scripted>,
        cursor: Arc<CursorState>,
        clock: Arc<ManualClock>,
        target: Arc<FollowTarget>,
    }

    fn rig_with(options: RigOptions, scene: impl SceneQuery + 'static) -> Rig {
        let input = Arc::new(Scripted::default());
        let cursor = Arc::new(CursorState::new());
        let clock = Arc::new(ManualClock::fixed(DT));
        let target = Arc::new(FollowTarget::default());
        let mut controller = OrbitCameraController::new(
            options,
            SharedInputSettings::new(),
            Services::new(input.clone(), cursor.clone(), scene, clock.clone()),
        );
        controller.set_target(&target);
        Rig {
            controller,
            input,
            cursor,
            clock,
            target,
        }
    }

    fn rig(options: RigOptions) -> Rig {
        rig_with(options, EmptyScene)
    }

    fn wall_at(z: f32) -> StaticScene {
        StaticScene::new().with(
            Collider::Aabb {
                min: Vec3::new(-1.0, -1.0, z - 1.0),
                max: Vec3::new(1.0, 1.0, z),
            },
            0,
        )
    }

    #[test]
    fn idle_pose_sits_behind_target() {
        let mut r = rig(RigOptions {
            target_offset: [1.0, 2.0],
            ..RigOptions::default()
        });
        r.target.set_position(Vec3::new(10.0, 0.0, 0.0));
        r.controller.tick();

        let t = r.controller.transform();
        assert!(t.position.abs_diff_eq(Vec3::new(11.0, 2.0, -5.0), 1e-5));
        assert!(t.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn no_target_is_a_no_op() {
        let mut r = rig(RigOptions::default());
        r.controller.clear_target();
        r.input.set(PointerSample {
            primary: true,
            secondary: true,
            delta: Vec2::new(7.0, -3.0),
            scroll: -1.0,
        });
        let before = (
            r.controller.distance(),
            r.controller.desired_distance(),
            r.controller.input_rotation(),
            *r.controller.transform(),
        );
        for _ in 0..10 {
            r.controller.tick();
        }
        let after = (
            r.controller.distance(),
            r.controller.desired_distance(),
            r.controller.input_rotation(),
            *r.controller.transform(),
        );
        assert_eq!(before, after);
        // Dragging without a target never locks the pointer.
        assert!(r.cursor.is_visible());
    }

    #[test]
    fn dropped_target_counts_as_absent() {
        let r = rig(RigOptions::default());
        assert!(r.controller.has_target());
        let Rig {
            mut controller,
            target,
            ..
        } = r;
        drop(target);
        assert!(!controller.has_target());
        controller.tick();
        assert_eq!(*controller.transform(), Transform::default());
    }

    #[test]
    fn no_target_still_releases_cursor() {
        let mut r = rig(RigOptions::default());
        r.cursor.lock_and_hide();
        r.controller.clear_target();
        r.controller.tick();
        assert!(r.cursor.is_visible());
        assert!(!r.cursor.is_locked());
    }

    #[test]
    fn drag_rotates_by_sensitivity() {
        let mut r = rig(RigOptions {
            return_to_origin: false,
            ..RigOptions::default()
        });
        r.input.drag(10.0, 0.0);
        r.controller.tick();
        assert_eq!(r.controller.input_rotation().yaw, 30.0);

        // Pointer up tilts the camera up (pitch decreases).
        r.input.drag(0.0, 5.0);
        r.controller.tick();
        assert_eq!(r.controller.input_rotation().pitch, -15.0);
    }

    #[test]
    fn invert_flags_are_read_live_from_shared_settings() {
        let mut r = rig(RigOptions::default());
        r.controller.settings().set_invert_x(true);
        r.controller.settings().set_invert_y(true);
        r.controller.settings().set_sensitivity(1.0);

        r.input.drag(10.0, 5.0);
        r.controller.tick();
        let live = r.controller.input_rotation();
        assert_eq!(live.yaw, -10.0);
        assert_eq!(live.pitch, 5.0);
    }

    #[test]
    fn pitch_is_pinned_to_limits() {
        let mut r = rig(RigOptions::default());
        r.input.drag(0.0, 1000.0);
        r.controller.tick();
        assert_eq!(r.controller.input_rotation().pitch, -90.0);

        r.input.drag(0.0, -5000.0);
        r.controller.tick();
        assert_eq!(r.controller.input_rotation().pitch, 90.0);
    }

    #[test]
    fn pitch_stays_in_limits_for_random_drags() {
        let mut r = rig(RigOptions {
            min_angle: -30.0,
            max_angle: 60.0,
            ..RigOptions::default()
        });
        let mut rng = rand::rng();
        for _ in 0..500 {
            r.input
                .drag(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            r.controller.tick();
            let pitch = r.controller.input_rotation().pitch;
            assert!((-30.0..=60.0).contains(&pitch), "pitch {pitch}");
        }
    }

    #[test]
    fn yaw_stays_near_origin_across_full_turns() {
        let mut r = rig(RigOptions::default());
        r.controller.settings().set_sensitivity(1.0);
        for _ in 0..40 {
            r.input.drag(25.0, 0.0);
            r.controller.tick();
            let origin = r.controller.origin_rotation().yaw;
            let diff = r.controller.input_rotation().yaw - origin;
            assert!(origin > -180.0 && origin <= 180.0);
            assert!(diff > -180.0 && diff <= 180.0, "diff {diff}");
        }
    }

    #[test]
    fn secondary_drag_rehomes_origin() {
        let mut r = rig(RigOptions::default());
        r.input.set(PointerSample {
            secondary: true,
            delta: Vec2::new(20.0, -4.0),
            ..PointerSample::default()
        });
        r.controller.tick();
        let live = r.controller.input_rotation();
        assert_eq!(live, OrbitAngles::new(60.0, 12.0));
        assert_eq!(r.controller.origin_rotation(), live);

        // Releasing does not pull the camera back: it is already home.
        r.input.idle();
        r.controller.tick();
        assert_eq!(r.controller.input_rotation(), live);
    }

    #[test]
    fn rotation_disabled_ignores_drag() {
        let mut r = rig(RigOptions {
            allow_rotation: false,
            ..RigOptions::default()
        });
        r.input.drag(10.0, 10.0);
        r.controller.tick();
        assert_eq!(r.controller.input_rotation(), OrbitAngles::default());
    }

    #[test]
    fn idle_return_converges_monotonically() {
        let mut r = rig(RigOptions::default());
        r.input.drag(30.0, -10.0);
        r.controller.tick();
        let start = r.controller.input_rotation();
        assert_eq!(start, OrbitAngles::new(90.0, 30.0));

        r.input.idle();
        let origin = r.controller.origin_rotation();
        let mut last = start.distance(origin);
        for _ in 0..200 {
            r.controller.tick();
            let live = r.controller.input_rotation();
            let now = live.distance(origin);
            assert!(now < last, "distance went from {last} to {now}");
            // Never overshoots past home.
            assert!(live.yaw >= origin.yaw && live.pitch >= origin.pitch);
            last = now;
        }
        assert!(last < 0.1);
    }

    #[test]
    fn return_disabled_holds_orientation() {
        let mut r = rig(RigOptions {
            return_to_origin: false,
            ..RigOptions::default()
        });
        r.input.drag(10.0, 0.0);
        r.controller.tick();
        r.input.idle();
        for _ in 0..20 {
            r.controller.tick();
        }
        assert_eq!(r.controller.input_rotation().yaw, 30.0);
    }

    #[test]
    fn stay_behind_follows_target_heading() {
        let mut r = rig(RigOptions {
            stay_behind_target: true,
            ..RigOptions::default()
        });
        r.target.set_yaw(270.0);
        r.controller.tick();
        // 270 wraps to -90; the live yaw heads there the short way.
        assert_eq!(r.controller.origin_rotation().yaw, -90.0);
        let yaw = r.controller.input_rotation().yaw;
        assert!(yaw < 0.0 && yaw > -90.0, "yaw {yaw}");
    }

    #[test]
    fn scroll_steps_desired_distance_within_bounds() {
        let mut r = rig(RigOptions {
            min_distance: 2.0,
            max_distance: 8.0,
            zoom_speed: 1.5,
            ..RigOptions::default()
        });
        let mut rng = rand::rng();
        for _ in 0..500 {
            let scroll = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            r.input.set(PointerSample {
                scroll,
                ..PointerSample::default()
            });
            r.controller.tick();
            let desired = r.controller.desired_distance();
            assert!((2.0..=8.0).contains(&desired), "desired {desired}");
            let current = r.controller.distance();
            assert!((2.0..=8.0).contains(&current), "current {current}");
        }
    }

    #[test]
    fn zoom_eases_toward_desired_distance() {
        let mut r = rig(RigOptions::default());
        r.input.set(PointerSample {
            scroll: 1.0,
            ..PointerSample::default()
        });
        r.controller.tick();
        assert_eq!(r.controller.desired_distance(), 4.0);
        // 5 + (4 - 5) * (0.016 * 16)
        assert!((r.controller.distance() - 4.744).abs() < 1e-5);

        r.input.idle();
        for _ in 0..100 {
            r.controller.tick();
        }
        assert!((r.controller.distance() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn long_frame_does_not_overshoot() {
        let mut r = rig(RigOptions::default());
        r.clock.set_delta(10.0);
        r.input.set(PointerSample {
            scroll: 1.0,
            ..PointerSample::default()
        });
        r.controller.tick();
        assert_eq!(r.controller.distance(), 4.0);
    }

    #[test]
    fn obstruction_shortens_distance_for_the_tick() {
        let mut r = rig_with(
            RigOptions {
                distance: 10.0,
                collision_layers: LayerMask::layer(0),
                ..RigOptions::default()
            },
            wall_at(-4.0),
        );
        r.controller.tick();
        let d = r.controller.distance();
        assert!((d - 3.8).abs() < 1e-4, "distance {d}");
        let pos = r.controller.transform().position;
        assert!(pos.abs_diff_eq(Vec3::new(0.0, 0.0, -3.8), 1e-4));
        // The zoom target is untouched.
        assert_eq!(r.controller.desired_distance(), 10.0);
    }

    #[test]
    fn obstruction_on_unmasked_layer_is_ignored() {
        let mut r = rig_with(
            RigOptions {
                distance: 10.0,
                collision_layers: LayerMask::layer(4),
                ..RigOptions::default()
            },
            wall_at(-4.0),
        );
        r.controller.tick();
        assert_eq!(r.controller.distance(), 10.0);
    }

    #[test]
    fn camera_eases_back_out_once_clear() {
        let scene = Arc::new(wall_at(-4.0));
        let mut r = rig_with(
            RigOptions {
                distance: 10.0,
                collision_layers: LayerMask::ALL,
                ..RigOptions::default()
            },
            scene,
        );
        r.controller.tick();
        assert!(r.controller.distance() < 4.0);

        // Swing the view away from the wall: the smoothing resumes from the
        // shortened distance.
        r.input.set(PointerSample {
            secondary: true,
            delta: Vec2::new(60.0, 0.0),
            ..PointerSample::default()
        });
        r.controller.tick();
        let d = r.controller.distance();
        assert!(d > 3.8 && d < 10.0, "distance {d}");
    }

    #[test]
    fn moved_origin_pulls_live_orientation_the_short_way() {
        let mut r = rig(RigOptions::default());
        r.controller.set_origin_rotation(OrbitAngles::new(350.0, 10.0));
        assert_eq!(r.controller.origin_rotation(), OrbitAngles::new(-10.0, 10.0));

        r.controller.tick();
        let live = r.controller.input_rotation();
        assert!(live.yaw < 0.0 && live.yaw > -10.0, "yaw {live:?}");
        assert!(live.pitch > 0.0 && live.pitch < 10.0);

        r.controller.options_mut().return_to_origin = false;
        r.controller.tick();
        assert_eq!(r.controller.input_rotation(), live);
    }

    #[test]
    fn collision_distance_clamp_is_opt_in() {
        let options = RigOptions {
            distance: 10.0,
            min_distance: 1.0,
            collision_layers: LayerMask::ALL,
            ..RigOptions::default()
        };

        let mut literal = rig_with(options.clone(), wall_at(-0.5));
        literal.controller.tick();
        assert!((literal.controller.distance() - 0.3).abs() < 1e-4);

        let mut clamped = rig_with(
            RigOptions {
                clamp_collision_distance: true,
                ..options
            },
            wall_at(-0.5),
        );
        clamped.controller.tick();
        assert_eq!(clamped.controller.distance(), 1.0);
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        let mut r = rig(RigOptions {
            min_distance: 10.0,
            max_distance: 2.0,
            min_angle: 45.0,
            max_angle: -45.0,
            ..RigOptions::default()
        });
        r.input.set(PointerSample {
            primary: true,
            delta: Vec2::new(1.0, 1.0),
            scroll: -1.0,
            ..PointerSample::default()
        });
        r.controller.tick();
        let d = r.controller.distance();
        assert!(d == 10.0 || d == 2.0);
        let pitch = r.controller.input_rotation().pitch;
        assert!(pitch == 45.0 || pitch == -45.0);
    }

    #[test]
    fn cursor_locks_only_while_dragging_with_motion() {
        let mut r = rig(RigOptions::default());

        r.input.drag(3.0, 0.0);
        r.controller.tick();
        assert!(r.cursor.is_locked());
        assert!(!r.cursor.is_visible());

        r.controller.tick();
        assert_eq!(r.cursor.lock_count(), 1);

        // Held but still: released.
        r.input.drag(0.0, 0.0);
        r.controller.tick();
        assert!(r.cursor.is_visible());

        r.input.idle();
        r.controller.tick();
        r.controller.tick();
        assert_eq!(r.cursor.unlock_count(), 1);
    }

    #[test]
    fn cursor_lock_can_be_disabled() {
        let mut r = rig(RigOptions {
            lock_cursor: false,
            ..RigOptions::default()
        });
        r.input.drag(3.0, 3.0);
        r.controller.tick();
        assert!(r.cursor.is_visible());
        assert_eq!(r.cursor.lock_count(), 0);
        // Rotation still happens.
        assert_eq!(r.controller.input_rotation().yaw, 9.0);
    }

    #[test]
    fn init_resets_shared_settings_unless_disabled() {
        let shared = SharedInputSettings::new();
        shared.set_sensitivity(0.5);
        shared.set_invert_x(true);

        let services = || {
            Services::new(
                Scripted::default(),
                CursorState::new(),
                EmptyScene,
                ManualClock::fixed(DT),
            )
        };

        let _keep = OrbitCameraController::new(
            RigOptions {
                reset_input_settings_on_init: false,
                ..RigOptions::default()
            },
            shared.clone(),
            services(),
        );
        assert_eq!(shared.get().sensitivity, Vec2::splat(0.5));

        let _reset =
            OrbitCameraController::new(RigOptions::default(), shared.clone(), services());
        assert_eq!(shared.get().sensitivity, Vec2::splat(3.0));
        assert!(!shared.get().invert_x);
    }

    #[test]
    fn step_reads_target_after_simulation() {
        let mut r = rig(RigOptions::default());
        let target = r.target.clone();
        r.controller.step(|| target.set_position(Vec3::new(0.0, 0.0, 20.0)));
        let pos = r.controller.transform().position;
        assert!(pos.abs_diff_eq(Vec3::new(0.0, 0.0, 15.0), 1e-5));
    }
}
