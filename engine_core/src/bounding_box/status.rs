//! Collision classification between two bounding boxes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// How a second box sits relative to a reference box.
    ///
    /// The side bits are set for every side on which the other box extends
    /// past the reference. An empty mask means the boxes do not intersect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionStatus: u8 {
        const LEFT   = 0b0000_0001;
        const RIGHT  = 0b0000_0010;
        const TOP    = 0b0000_0100;
        const BOTTOM = 0b0000_1000;
        /// The other box lies entirely within the reference box.
        const INSIDE = 0b0001_0000;
    }
}

impl CollisionStatus {
    /// No intersection.
    pub const OUTSIDE: CollisionStatus = CollisionStatus::empty();

    pub fn is_outside(self) -> bool {
        self.is_empty()
    }

    pub fn is_inside(self) -> bool {
        self.contains(CollisionStatus::INSIDE)
    }
}

impl Default for CollisionStatus {
    fn default() -> Self {
        CollisionStatus::OUTSIDE
    }
}
