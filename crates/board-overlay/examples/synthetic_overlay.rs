//! Renders the grid overlay and a couple of moves on a synthetic frame and
//! writes the result to a PNG.
//!
//! Usage: `cargo run --example synthetic_overlay [output.png]`

use std::{env, error::Error, path::PathBuf, time::Duration};

use board_overlay::{decode_actions, OverlayPipeline, PipelineParams, Quad};
use image::{Rgba, RgbaImage};
use nalgebra::Point2;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let output_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("synthetic_overlay.png"));

    let mut frame = RgbaImage::from_pixel(640, 480, Rgba([40, 40, 40, 255]));

    // Stand-in for the pose collaborator: the projected reference quad of a
    // board seen at a slight angle.
    let quad = Quad::new(
        Point2::new(180.0, 140.0),
        Point2::new(300.0, 150.0),
        Point2::new(310.0, 260.0),
        Point2::new(170.0, 250.0),
    );
    let lookup = move |_frame: &RgbaImage| Some(quad);

    let mut pipeline = OverlayPipeline::new(PipelineParams::default(), lookup);

    // "RB1" addresses a cell whose corners are never extrapolated, so it
    // shows up as skipped in the report.
    let actions = decode_actions(["CA0", "RB1"]);
    let report = pipeline.process_frame(&mut frame, Duration::ZERO, &actions);

    println!("refresh: {:?}", report.refresh);
    if let Some(overlay) = &report.overlay {
        println!(
            "borders drawn: {}, markers drawn: {}, skipped: {}",
            overlay.borders_drawn,
            overlay.markers_drawn,
            overlay.skipped.len()
        );
    }

    frame.save(&output_path)?;
    println!("wrote overlay frame to {}", output_path.display());
    Ok(())
}
