//! `PaneBounds`: pixel-space bounding box for a pane or split.

use super::common::Orientation;

/// Bounds of a pane in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneBounds {
    /// X position in pixels from left edge of content area
    pub x: i32,
    /// Y position in pixels from top of content area (below tab bar)
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PaneBounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Length along the axis a split of this orientation divides
    pub fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Divide these bounds at `position` pixels along the split axis.
    ///
    /// The divider occupies `divider_width` pixels after the first child.
    /// Out-of-range positions are clamped so neither child has negative size.
    pub fn split(
        &self,
        orientation: Orientation,
        position: i32,
        divider_width: i32,
    ) -> (PaneBounds, PaneBounds) {
        let available = (self.extent(orientation) - divider_width).max(0);
        let first = position.clamp(0, available);
        let second = available - first;

        match orientation {
            Orientation::Horizontal => (
                PaneBounds::new(self.x, self.y, first, self.height),
                PaneBounds::new(self.x + first + divider_width, self.y, second, self.height),
            ),
            Orientation::Vertical => (
                PaneBounds::new(self.x, self.y, self.width, first),
                PaneBounds::new(self.x, self.y + first + divider_width, self.width, second),
            ),
        }
    }
}
