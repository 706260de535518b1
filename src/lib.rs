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

//! First-person camera navigation and 3D vector math.
//!
//! navcam keeps an eye/look-at/up frame and moves it with discrete
//! forward, back, strafe and pan commands, the way a keyboard-and-mouse
//! walkthrough of a block world does.
//!
//! # Key entry points
//!
//! - [`math::Vector3`] - immutable vector arithmetic
//! - [`camera::Camera`] - the eye/at/up frame and its navigation moves
//! - [`engine::NavEngine`] - owns a camera, a block map, and the input
//!   processor for one viewport
//! - [`options::Options`] - sensitivities, projection, keybindings, world
//!   layout (TOML presets)
//!
//! # Architecture
//!
//! Raw pointer events and key strings go through
//! [`input::InputProcessor`], which turns them into
//! [`engine::NavCommand`]s. The engine applies each command to its camera or
//! block map; the host reads the resulting [`camera::CameraFrame`] and
//! builds view matrices from it. Hosts that render on a separate thread
//! publish frames through [`camera::frame_channel`].
//!
//! ```
//! use navcam::engine::NavEngine;
//! use navcam::math::Vector3;
//!
//! let mut engine = NavEngine::default();
//! assert!(engine.handle_key_press("KeyW"));
//! assert_eq!(engine.camera().eye, Vector3::new(0.0, 0.0, 2.0));
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod world;

pub use engine::{NavCommand, NavEngine};
pub use error::NavError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
