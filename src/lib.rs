// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Third-person orbit camera rig.
//!
//! Orbicam positions and orients one camera around a moving target from
//! pointer-drag input, with zoom easing, pitch limits, yaw wrap-around,
//! line-of-sight collision against scene geometry and an automatic return
//! to a home orientation.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCameraController`] - the rig and its per-frame `tick`
//! - [`host`] - the services a host injects (input, cursor, scene queries,
//!   frame clock, target)
//! - [`settings::SharedInputSettings`] - invert/sensitivity settings
//!   broadcast to every rig
//! - [`options::Options`] - rig and input options with TOML presets
//!
//! # Frame order
//!
//! The rig never drives the frame itself. Each frame the host runs its
//! simulate phase (target movement, physics) to completion and only then
//! ticks the rig, so the camera reads the target's final pose for the
//! frame.

pub mod camera;
pub mod collision;
pub mod error;
pub mod host;
pub mod input;
pub mod options;
pub mod settings;

pub use camera::OrbitCameraController;
pub use error::OrbicamError;
