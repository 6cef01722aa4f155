use crate::types::{GridCorners, Quad};

/// Default geometric decay applied to successive extrapolated cell widths.
pub const DEFAULT_DECAY: f32 = 0.9;

/// Expand the observed quad into grid-cell corner coordinates.
///
/// The quad maps directly onto lattice positions 0, 1, 5 and 4, the one
/// directly observed cell. The remaining corners are extrapolated along the
/// width and height axes, with each step's displacement shrunk by `decay`.
/// Successive cell widths therefore shrink geometrically, which approximates
/// perspective foreshortening without re-solving the camera projection for
/// every virtual corner. `decay = 1` degenerates to uniform spacing, useful
/// for testing against a known undistorted grid.
///
/// Only positions 0, 1, 2, 3, 4, 5, 8 and 12 are populated, the subset the
/// renderer consumes. The rest of the lattice stays undefined.
pub fn extrapolate_grid(quad: &Quad, decay: f32) -> GridCorners {
    let mut corners = GridCorners::default();
    corners.set(0, quad.origin);
    corners.set(1, quad.width_end);
    corners.set(5, quad.far);
    corners.set(4, quad.height_end);

    // Rightward along the width axis: each step is the previous one, scaled.
    let mut step = (quad.width_end - quad.origin) * decay;
    let corner2 = quad.width_end + step;
    step *= decay;
    let corner3 = corner2 + step;
    corners.set(2, corner2);
    corners.set(3, corner3);

    // Downward along the height axis, same construction.
    let mut step = (quad.height_end - quad.origin) * decay;
    let corner8 = quad.height_end + step;
    step *= decay;
    let corner12 = corner8 + step;
    corners.set(8, corner8);
    corners.set(12, corner12);

    corners
}
