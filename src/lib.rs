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

//! Small 3D scene viewer built on wgpu: a tiled ground plane, a handful
//! of static and orbiting tanks, and a camera flown with keyboard and
//! mouse.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - GPU setup, command dispatch, and the
//!   per-frame update/render loop
//! - [`camera::CameraController`] - the multi-mode camera (free flight
//!   and world-axis motion)
//! - [`options::Options`] - runtime configuration (camera, controls,
//!   lighting, scene layout, keybindings)
//! - `viewer::Viewer` - the winit window host (`viewer` feature)
//!
//! # Architecture
//!
//! Raw window events are translated into platform-agnostic
//! [`input::InputEvent`]s, which the [`input::InputProcessor`] turns
//! into [`engine::SceneCommand`]s. The engine is the single dispatch
//! point: keyboard, mouse, and programmatic callers all drive it
//! through [`engine::SceneEngine::execute`]. Camera math lives in
//! [`camera::rig`]; everything the GPU sees goes through the shared
//! `camera`/`lighting` WGSL modules composed at pipeline creation.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{SceneCommand, SceneEngine};
pub use error::TankyardError;
pub use input::{InputEvent, MouseButton};
