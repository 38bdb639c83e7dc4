//! Line rendering hooks used by debug drawing.
//!
//! The engine does not own a graphics pipeline. Anything that can draw a
//! straight line for a given camera implements [`LineRenderer`], and debug
//! routines such as [`crate::BoundingBox::draw`] feed it segments.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    /// Create a segment from `from` to `to`.
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    /// Size of the endpoint markers, in pixels.
    pub point_size: f32,
    /// Whether the endpoints are drawn as points.
    pub draw_vertices: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            point_size: 1.0,
            draw_vertices: false,
        }
    }
}

/// A collaborator able to draw lines through a camera of type `C`.
pub trait LineRenderer<C: ?Sized> {
    fn draw_line(&mut self, segment: LineSegment, style: &LineStyle, camera: &C);
}

/// Renderer that keeps every segment it is asked to draw.
///
/// Useful for headless runs and for asserting on debug output.
#[derive(Debug, Clone, Default)]
pub struct LineRecorder {
    lines: Vec<(LineSegment, LineStyle)>,
}

impl LineRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded segments, in draw order.
    pub fn lines(&self) -> &[(LineSegment, LineStyle)] {
        &self.lines
    }

    /// Recorded segments without their styles.
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        self.lines.iter().map(|(segment, _)| segment)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl<C: ?Sized> LineRenderer<C> for LineRecorder {
    fn draw_line(&mut self, segment: LineSegment, style: &LineStyle, _camera: &C) {
        self.lines.push((segment, *style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = LineRecorder::new();
        let style = LineStyle::default();

        recorder.draw_line(LineSegment::new(Vec2::zero(), Vec2::new(1.0, 0.0)), &style, &());
        recorder.draw_line(LineSegment::new(Vec2::zero(), Vec2::new(0.0, 1.0)), &style, &());

        let ends: Vec<_> = recorder.segments().map(|s| s.to).collect();
        assert_eq!(ends, vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);

        recorder.clear();
        assert!(recorder.lines().is_empty());
    }
}
