//! Damped harmonic oscillation, used for shake effects.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A damped oscillation that runs for a fixed number of frames (cycles).
///
/// Each call to [`Oscillation::next_value`] consumes one cycle and returns
/// `magnitude * frac² * cos((1 - frac) * ω)`, where `frac` is the share of
/// cycles still remaining. Once exhausted it returns `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    magnitude: f32,
    omega: f32,
    cycles: u32,
    remaining: u32,
}

impl Oscillation {
    /// Create an oscillation of `magnitude` at `frequency` lasting `cycles` frames.
    pub fn new(magnitude: f32, frequency: f32, cycles: u32) -> Self {
        Self {
            magnitude,
            omega: frequency * TAU,
            cycles,
            remaining: cycles,
        }
    }

    /// Rewind to the first cycle.
    pub fn restart(&mut self) {
        self.remaining = self.cycles;
    }

    /// Whether every cycle has been consumed.
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Cycles left before the oscillation settles.
    pub fn remaining_cycles(&self) -> u32 {
        self.remaining
    }

    /// Advance one cycle and return the offset for this frame.
    pub fn next_value(&mut self) -> f32 {
        self.remaining = self.remaining.saturating_sub(1);
        if self.is_done() {
            return 0.0;
        }
        self.magnitude * self.damped_harmonic()
    }

    fn damped_harmonic(&self) -> f32 {
        let frac = self.remaining as f32 / self.cycles as f32;
        frac * frac * ((1.0 - frac) * self.omega).cos()
    }
}
