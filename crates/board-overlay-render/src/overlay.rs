use board_overlay_core::{line_intersection, Action, GridCorners};
use image::RgbaImage;
use log::debug;
use nalgebra::Point2;
use tiny_skia::{Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::style::OverlayStyle;

/// Result of one overlay pass over a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderReport {
    /// False when the vanishing points were degenerate (or a quad corner was
    /// missing) and the border lines were skipped this frame.
    pub borders_drawn: bool,
    pub markers_drawn: usize,
    /// Actions whose cell needed an unpopulated lattice corner.
    pub skipped: Vec<Action>,
}

/// Draw the grid border lines and the pending move markers onto `frame`.
///
/// Border lines fan out from the grid corners toward the two vanishing
/// points, so the drawn grid converges like the real one under projection.
/// Failures are partial by design: degenerate vanishing points skip only the
/// border pass, and an action addressing an unpopulated corner skips only
/// that marker. The frame is mutated in place.
pub fn render_overlay(
    frame: &mut RgbaImage,
    corners: &GridCorners,
    actions: &[Action],
    style: &OverlayStyle,
) -> RenderReport {
    let mut report = RenderReport::default();
    with_pixmap(frame, |pixmap| {
        report.borders_drawn = draw_borders(pixmap, corners, style);
        for &action in actions {
            if draw_marker(pixmap, corners, action, style) {
                report.markers_drawn += 1;
            } else {
                debug!("cell {} needs an unpopulated corner, marker skipped", action.cell);
                report.skipped.push(action);
            }
        }
    });
    report
}

/// Convert the frame to a `Pixmap`, apply `f`, copy the pixels back.
fn with_pixmap(frame: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let Some(size) = tiny_skia::IntSize::from_wh(frame.width(), frame.height()) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(frame.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    frame.copy_from_slice(pixmap.data());
}

fn draw_borders(pixmap: &mut Pixmap, corners: &GridCorners, style: &OverlayStyle) -> bool {
    let (Some(c0), Some(c1), Some(c4), Some(c5)) = (
        corners.get(0),
        corners.get(1),
        corners.get(4),
        corners.get(5),
    ) else {
        debug!("observed quad corners missing, border lines skipped");
        return false;
    };

    // Width-axis edges of the observed cell meet at one vanishing point,
    // height-axis edges at the other.
    let vp_width = line_intersection(c0, c1, c5, c4);
    let vp_height = line_intersection(c1, c5, c4, c0);
    let (Ok(vp_width), Ok(vp_height)) = (vp_width, vp_height) else {
        debug!("degenerate vanishing points, border lines skipped this frame");
        return false;
    };

    let mut pb = PathBuilder::new();
    // Column borders: top-row corners toward the height-axis vanishing point.
    for index in [0usize, 1, 2, 3] {
        if let Some(p) = corners.get(index) {
            segment(&mut pb, p, vp_height);
        }
    }
    // Row borders: left-column corners toward the width-axis vanishing point.
    for index in [0usize, 4, 8, 12] {
        if let Some(p) = corners.get(index) {
            segment(&mut pb, p, vp_width);
        }
    }

    let Some(path) = pb.finish() else {
        return false;
    };
    stroke_path(pixmap, &path, style.border_color, style.border_width);
    true
}

/// Both symbols share the two-diagonal glyph; only the stroke color tells a
/// cross from a ring.
fn draw_marker(
    pixmap: &mut Pixmap,
    corners: &GridCorners,
    action: Action,
    style: &OverlayStyle,
) -> bool {
    let cell = action.cell;
    let [Some(tl), Some(br), Some(bl), Some(tr)] =
        [cell, cell + 5, cell + 4, cell + 1].map(|index| corners.get(index))
    else {
        return false;
    };

    let mut pb = PathBuilder::new();
    segment(&mut pb, tl, br);
    segment(&mut pb, bl, tr);
    let Some(path) = pb.finish() else {
        return false;
    };
    stroke_path(
        pixmap,
        &path,
        style.marker_color(action.symbol),
        style.marker_width,
    );
    true
}

fn segment(pb: &mut PathBuilder, from: Point2<f32>, to: Point2<f32>) {
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
}

fn stroke_path(pixmap: &mut Pixmap, path: &Path, color: [u8; 4], width: f32) {
    let [r, g, b, a] = color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &paint, &stroke, Transform::identity(), None);
}
