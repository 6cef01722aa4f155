use nalgebra::Point2;

/// Two lines with no unique intersection point.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("lines are parallel or coincident")]
pub struct DegenerateLines;

/// Determinant threshold below which the two lines are treated as parallel.
const DET_EPS: f64 = 1e-9;

/// Intersect the infinite lines through `(a0, a1)` and `(b0, b1)`.
///
/// Each point pair is treated as an infinite line in standard form
/// `a·x + b·y = c`, so vertical segments need no special casing. The
/// intersection is not clipped to the segment extents — border lines are
/// drawn well past the observed quad toward their vanishing point.
pub fn line_intersection(
    a0: Point2<f32>,
    a1: Point2<f32>,
    b0: Point2<f32>,
    b1: Point2<f32>,
) -> Result<Point2<f32>, DegenerateLines> {
    let (la, lb, lc) = standard_form(a0, a1);
    let (ma, mb, mc) = standard_form(b0, b1);

    let det = la * mb - ma * lb;
    if det.abs() < DET_EPS {
        return Err(DegenerateLines);
    }

    let x = (lc * mb - mc * lb) / det;
    let y = (la * mc - ma * lc) / det;
    Ok(Point2::new(x as f32, y as f32))
}

/// Line through two points as `(a, b, c)` with `a·x + b·y = c`.
fn standard_form(p: Point2<f32>, q: Point2<f32>) -> (f64, f64, f64) {
    let a = f64::from(q.y) - f64::from(p.y);
    let b = f64::from(p.x) - f64::from(q.x);
    let c = a * f64::from(p.x) + b * f64::from(p.y);
    (a, b, c)
}
