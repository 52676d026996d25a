//! Point addressing: screen position -> point index.
//!
//! The layout is computed once from `BoardGeometry` and never mutated.
//! Columns run left to right; the bottom row holds points 11..=0 and the
//! top row holds 12..=23, with the bar gap after the sixth column. Anything
//! outside the 24 regions (bar, borne-off tray, frame) resolves to `None`.

use serde::{Deserialize, Serialize};

use crate::core::config::BoardGeometry;
use crate::core::point::{PointIndex, POINT_COUNT};

/// Pointer position in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

impl PointerPos {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for PointerPos {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned hit region. Left and top edges are inclusive, right and
/// bottom edges exclusive, so adjacent regions never overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Does this region contain `pos`?
    #[must_use]
    pub fn contains(&self, pos: PointerPos) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }

    /// Center of the region.
    #[must_use]
    pub fn center(&self) -> PointerPos {
        PointerPos::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Fixed hit-test regions for the 24 points.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLayout {
    regions: [Rect; POINT_COUNT],
}

impl PointLayout {
    /// Compute the regions for a geometry.
    #[must_use]
    pub fn from_geometry(geometry: &BoardGeometry) -> Self {
        let mut regions = [Rect::default(); POINT_COUNT];
        let bottom_y = geometry.height - geometry.board_edge - geometry.point_height;

        for column in 0..12usize {
            let mut x = geometry.board_edge + column as f32 * geometry.point_width;
            if column >= 6 {
                x += geometry.bar_width;
            }

            regions[11 - column] = Rect::new(x, bottom_y, geometry.point_width, geometry.point_height);
            regions[12 + column] = Rect::new(
                x,
                geometry.board_edge,
                geometry.point_width,
                geometry.point_height,
            );
        }

        Self { regions }
    }

    /// The point under `pos`, if any.
    #[must_use]
    pub fn locate(&self, pos: PointerPos) -> Option<PointIndex> {
        PointIndex::all().find(|p| self.regions[p.index()].contains(pos))
    }

    /// Hit region for `point`, for renderers that need to agree with hit-testing.
    #[must_use]
    pub fn region(&self, point: PointIndex) -> Rect {
        self.regions[point.index()]
    }
}

impl Default for PointLayout {
    fn default() -> Self {
        Self::from_geometry(&BoardGeometry::default())
    }
}
