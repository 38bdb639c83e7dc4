//! Time-based visual effects advanced once per frame.

mod oscillate;

pub use oscillate::*;
