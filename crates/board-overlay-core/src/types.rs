use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// The four tracked reference points bounding the directly observed board
/// cell, in the fixed reference-axis order produced by the pose collaborator.
///
/// The core never reorders these points. A producer that breaks the ordering
/// yields a geometrically wrong (but non-crashing) grid, so quads must be
/// validated upstream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Projected origin of the board axes.
    pub origin: Point2<f32>,
    /// Projected end of the width axis.
    pub width_end: Point2<f32>,
    /// Projected corner diagonally opposite the origin.
    pub far: Point2<f32>,
    /// Projected end of the height axis.
    pub height_end: Point2<f32>,
}

impl Quad {
    pub fn new(
        origin: Point2<f32>,
        width_end: Point2<f32>,
        far: Point2<f32>,
        height_end: Point2<f32>,
    ) -> Self {
        Self {
            origin,
            width_end,
            far,
            height_end,
        }
    }
}

/// Corners of the 4×4 lattice describing a 3×3 cell board, indexed row-major
/// from 0 to 15.
///
/// Extrapolation populates only the subset it can derive from the observed
/// quad ([`GridCorners::POPULATED`]); the remaining positions stay `None` and
/// nothing may be drawn from them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridCorners {
    corners: [Option<Point2<f32>>; 16],
}

impl GridCorners {
    /// Lattice positions filled in by extrapolation.
    pub const POPULATED: [usize; 8] = [0, 1, 2, 3, 4, 5, 8, 12];

    /// Corner at `index`, or `None` for an unpopulated or out-of-lattice
    /// position.
    pub fn get(&self, index: usize) -> Option<Point2<f32>> {
        self.corners.get(index).copied().flatten()
    }

    /// Populate the corner at `index`.
    ///
    /// Panics if `index` is outside the lattice.
    pub fn set(&mut self, index: usize, point: Point2<f32>) {
        self.corners[index] = Some(point);
    }
}
