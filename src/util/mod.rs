//! Shared utilities for the engine.
//!
//! Currently just the frame clock that gates and times the render loop.

pub mod frame_timing;
