//! # Engine Core
//!
//! Engine-level utilities for Qi Path: 2D vectors, axis-aligned bounding boxes
//! with collision classification, line rendering hooks for debug drawing, and
//! per-frame effects. This crate knows nothing about dialogue or stats.

pub mod bounding_box;
pub mod effects;
pub mod error;
pub mod math;
pub mod render;

pub use bounding_box::*;
pub use effects::*;
pub use error::*;
pub use math::*;
pub use render::*;
