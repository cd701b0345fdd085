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

//! Scene-graph transforms and arcball camera for an interactive
//! solar-system viewer.
//!
//! Solarium owns the CPU side of the viewer: the celestial body tree and
//! its per-frame transform propagation, the arcball camera, light
//! composition, the frame clock and the draw list. Windowing, GPU binding
//! and page wiring stay with the host, which receives plain matrices and
//! draw commands.
//!
//! # Key entry points
//!
//! - [`engine::Engine`] - the render loop driver
//! - [`scene::SolarSystem`] - the body arena and transform engine
//! - [`camera::CameraState`] - arcball rotation, zoom and view modes
//! - [`options::Options`] - runtime configuration (camera, animation,
//!   navigation, geometry, key bindings)
//!
//! # Frame flow
//!
//! The host's animation callback calls [`engine::Engine::pump`] with its
//! timestamp. When the clock lets a frame through, the engine propagates
//! transforms depth-first from the Sun, re-validates the selected body,
//! composes the view/projection around it, gathers lights from luminous
//! bodies and emits an ordered [`engine::DrawList`].

pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
