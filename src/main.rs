//! Headless orbit rig demo.
//!
//! Runs a target around a pillar for a few seconds of simulated frames,
//! with a scripted drag and zoom, and logs the camera pose. Pass a TOML
//! options file as the first argument to try a preset; run with
//! `RUST_LOG=debug` (or `trace`) to see rig internals.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use orbicam::camera::OrbitCameraController;
use orbicam::collision::{Collider, LayerMask, StaticScene};
use orbicam::host::{CursorState, FollowTarget, ManualClock, Services};
use orbicam::input::{InputEvent, MouseButton, PointerState};
use orbicam::options::Options;
use orbicam::settings::SharedInputSettings;
use orbicam::OrbicamError;

const FRAME: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;
const WALLS: u8 = 1;

fn demo_scene() -> StaticScene {
    StaticScene::new()
        .with(
            Collider::HalfSpace {
                normal: Vec3::Y,
                offset: 0.5,
            },
            WALLS,
        )
        .with(
            Collider::Aabb {
                min: Vec3::new(-1.0, -0.5, -1.0),
                max: Vec3::new(1.0, 6.0, 1.0),
            },
            WALLS,
        )
}

fn load_options() -> Result<Options, OrbicamError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from '{path}'");
            Ok(options)
        }
        None => {
            let mut options = Options::default();
            options.rig.collision_layers = LayerMask::layer(WALLS);
            options.rig.stay_behind_target = true;
            options.rig.origin_rotation = [0.0, 15.0];
            options.rig.target_offset = [0.0, 1.5];
            Ok(options)
        }
    }
}

/// Scripted pointer activity for frame `frame`.
fn script(pointer: &PointerState, frame: u32) {
    match frame {
        120 => pointer.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }),
        121..=180 => {
            pointer.handle_event(InputEvent::PointerMotion { dx: 2.0, dy: 0.5 });
        }
        181 => pointer.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }),
        300..=305 => pointer.handle_event(InputEvent::Scroll { delta: -1.0 }),
        _ => {}
    }
}

fn main() -> Result<(), OrbicamError> {
    env_logger::init();

    let options = load_options()?;
    let settings = SharedInputSettings::new();

    let pointer = Arc::new(PointerState::new());
    let cursor = Arc::new(CursorState::new());
    let target = Arc::new(FollowTarget::default());

    let mut rig = OrbitCameraController::new(
        options.rig,
        settings.clone(),
        Services::new(
            pointer.clone(),
            cursor.clone(),
            demo_scene(),
            ManualClock::fixed(FRAME),
        ),
    );
    // Rig init resets the shared settings; apply the preset afterwards.
    options.input.apply_to(&settings);
    rig.set_target(&target);

    for frame in 0..FRAMES {
        script(&pointer, frame);
        rig.step(|| {
            // Circle the pillar at radius 4, facing along the path.
            let angle = frame as f32 * FRAME * 0.5;
            target.set_position(Vec3::new(4.0 * angle.sin(), 0.0, 4.0 * angle.cos()));
            target.set_yaw(angle.to_degrees() + 90.0);
        });

        if frame % 60 == 0 {
            let pose = rig.transform();
            let angles = rig.input_rotation();
            log::info!(
                "frame {frame:>3}: pos {:.2} yaw {:>7.2} pitch {:>6.2} dist {:.2} cursor {}",
                pose.position,
                angles.yaw,
                angles.pitch,
                rig.distance(),
                if cursor.is_locked() { "locked" } else { "free" },
            );
        }
    }

    Ok(())
}
