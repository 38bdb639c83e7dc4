//! Axis-aligned bounding boxes.
//!
//! A box is stored as its lower-left corner plus a non-negative width and
//! height. Rotation is ignored. All containment and intersection tests are
//! strict: touching edges do not count.

mod status;

pub use status::*;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::math::Vec2;
use crate::render::{Color, LineRenderer, LineSegment, LineStyle};

/// Style used by [`BoundingBox::draw`].
pub const DEBUG_OUTLINE_STYLE: LineStyle = LineStyle {
    color: Color::WHITE,
    point_size: 10.0,
    draw_vertices: false,
};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    lower_left: Vec2,
    width: f32,
    height: f32,
}

/// Unchecked serialized form; converted through [`TryFrom`] so the extent
/// is validated on the way in.
#[derive(Deserialize)]
struct RawBoundingBox {
    lower_left: Vec2,
    width: f32,
    height: f32,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = GeometryError;

    fn try_from(raw: RawBoundingBox) -> GeometryResult<Self> {
        if !valid_extent(raw.width) || !valid_extent(raw.height) {
            return Err(GeometryError::InvalidExtent {
                width: raw.width,
                height: raw.height,
            });
        }
        Ok(Self {
            lower_left: raw.lower_left,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl BoundingBox {
    /// Create a box centered on `center`.
    pub fn new(center: Vec2, width: f32, height: f32) -> GeometryResult<Self> {
        let mut bbox = Self {
            lower_left: Vec2::zero(),
            width: 0.0,
            height: 0.0,
        };
        bbox.set_bounds(center, width, height)?;
        Ok(bbox)
    }

    /// Create a box from its two extreme corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            lower_left: min,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Recompute the box from a center and size, replacing the old extent.
    ///
    /// On error the box is left untouched.
    pub fn set_bounds(&mut self, center: Vec2, width: f32, height: f32) -> GeometryResult<()> {
        if !valid_extent(width) || !valid_extent(height) {
            return Err(GeometryError::InvalidExtent { width, height });
        }
        self.width = width;
        self.height = height;
        self.lower_left = Vec2::new(center.x - width / 2.0, center.y - height / 2.0);
        Ok(())
    }

    /// Lower-left corner.
    pub fn lower_left(&self) -> Vec2 {
        self.lower_left
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.lower_left.x + self.width / 2.0,
            self.lower_left.y + self.height / 2.0,
        )
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.lower_left.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.lower_left.x + self.width
    }

    /// Bottom edge.
    pub fn min_y(&self) -> f32 {
        self.lower_left.y
    }

    /// Top edge.
    pub fn max_y(&self) -> f32 {
        self.lower_left.y + self.height
    }

    /// Strict interior test; points on the boundary are outside.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x > self.min_x() && x < self.max_x() && y > self.min_y() && y < self.max_y()
    }

    /// Whether the two boxes overlap with a non-zero area.
    pub fn intersects_bound(&self, other: &BoundingBox) -> bool {
        self.min_x() < other.max_x()
            && self.max_x() > other.min_x()
            && self.min_y() < other.max_y()
            && self.max_y() > other.min_y()
    }

    /// Classify `other` relative to `self`.
    ///
    /// Returns [`CollisionStatus::OUTSIDE`] when the boxes do not intersect,
    /// the set of sides `other` protrudes through when they do, or
    /// [`CollisionStatus::INSIDE`] when it protrudes through none.
    pub fn bound_collide_status(&self, other: &BoundingBox) -> CollisionStatus {
        if !self.intersects_bound(other) {
            return CollisionStatus::OUTSIDE;
        }

        let mut status = CollisionStatus::OUTSIDE;
        if other.min_x() < self.min_x() {
            status |= CollisionStatus::LEFT;
        }
        if other.max_x() > self.max_x() {
            status |= CollisionStatus::RIGHT;
        }
        if other.min_y() < self.min_y() {
            status |= CollisionStatus::BOTTOM;
        }
        if other.max_y() > self.max_y() {
            status |= CollisionStatus::TOP;
        }

        if status.is_empty() {
            CollisionStatus::INSIDE
        } else {
            status
        }
    }

    /// Grow this box into the smallest box covering both.
    pub fn merge_bbox(&mut self, other: &BoundingBox) {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());

        self.lower_left = Vec2::new(min_x, min_y);
        self.width = max_x - min_x;
        self.height = max_y - min_y;
    }

    /// The smallest box covering both `a` and `b`.
    pub fn merged(a: &BoundingBox, b: &BoundingBox) -> BoundingBox {
        let mut out = *a;
        out.merge_bbox(b);
        out
    }

    /// Trace the outline through `renderer`.
    ///
    /// Edges are emitted bottom, left, top, right.
    pub fn draw<C, R>(&self, renderer: &mut R, camera: &C)
    where
        C: ?Sized,
        R: LineRenderer<C> + ?Sized,
    {
        let ll = self.lower_left;
        let lr = Vec2::new(self.max_x(), self.min_y());
        let ul = Vec2::new(self.min_x(), self.max_y());
        let ur = Vec2::new(self.max_x(), self.max_y());

        for segment in [
            LineSegment::new(ll, lr),
            LineSegment::new(ll, ul),
            LineSegment::new(ur, ul),
            LineSegment::new(ur, lr),
        ] {
            renderer.draw_line(segment, &DEBUG_OUTLINE_STYLE, camera);
        }
    }
}

fn valid_extent(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
