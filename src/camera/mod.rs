//! Camera system for framing a selected body.
//!
//! Provides a virtual-trackball rotation, zoom, view-direction and
//! rotation-lock modes, and the per-frame view/projection built from them.

/// Pointer normalization and trackball rotation math.
pub mod arcball;
/// Persistent camera state and per-frame view composition.
pub mod controller;
/// View/projection pair and GPU uniform types.
pub mod core;

pub use controller::CameraState;
pub use self::core::{CameraUniform, ViewProjection};
