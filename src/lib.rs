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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit and first-person camera controllers for interactive 3D viewports.
//!
//! Pivot turns raw pointer, wheel, touch, and keyboard input into a camera
//! pose every frame. It does not render anything; hosts hand it a
//! [`camera::Camera`] and read the updated pose (or a
//! [`camera::CameraUniform`]) back.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - owns the camera, the active controller, and the
//!   input processor; the usual host integration point
//! - [`camera::OrbitController`] - rotate, dolly, and pan around a target
//! - [`camera::FirstPersonController`] - pointer-look plus walking physics
//! - [`input::InputProcessor`] - converts [`input::InputEvent`]s into
//!   [`rig::CameraCommand`]s
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is frame-driven and single-threaded. Input callbacks only
//! queue motion (spherical deltas, pan offsets, held command flags); the
//! controllers fold it into the camera during `update(dt)`. Listener
//! subscriptions are explicit handles so detaching a mode always removes
//! exactly what it attached.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod util;
/// Standalone winit window driving a [`rig::CameraRig`].
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, FirstPersonController, OrbitController};
pub use error::PivotError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
pub use rig::{CameraCommand, CameraRig};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
