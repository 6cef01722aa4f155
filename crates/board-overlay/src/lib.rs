//! Perspective-correct board-game overlay for a tracked planar pattern.
//!
//! This crate wires the geometric core (`board-overlay-core`) and the stroke
//! renderer (`board-overlay-render`) into a frame-at-a-time pipeline: a
//! rate-limited pose cache decides when to ask the external pose collaborator
//! for a fresh quad, the cached quad is extrapolated into grid corners, and
//! the overlay (converging border lines plus move markers) is drawn onto the
//! frame in place.
//!
//! Pattern detection, camera calibration and pose solving are *not* part of
//! this workspace — they live behind the [`PoseLookup`] seam.
//!
//! ## Quickstart
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use board_overlay::{decode_actions, OverlayPipeline, PipelineParams, Quad};
//! use nalgebra::Point2;
//!
//! // Stand-in for the pose collaborator: a fixed quad, as if the pattern
//! // were detected in every frame.
//! let lookup = |_frame: &image::RgbaImage| {
//!     Some(Quad::new(
//!         Point2::new(120.0, 80.0),
//!         Point2::new(220.0, 90.0),
//!         Point2::new(230.0, 190.0),
//!         Point2::new(110.0, 180.0),
//!     ))
//! };
//!
//! let mut pipeline = OverlayPipeline::new(PipelineParams::default(), lookup);
//! let mut frame = image::RgbaImage::new(640, 480);
//! let actions = decode_actions(["CA0", "RB1"]);
//!
//! let report = pipeline.process_frame(&mut frame, Duration::from_millis(33), &actions);
//! assert!(report.overlay.is_some());
//! ```

pub use board_overlay_core as core;
pub use board_overlay_render as render;

mod pipeline;
mod pose;

pub use board_overlay_core::{
    extrapolate_grid, line_intersection, Action, ActionDecodeError, DegenerateLines, GridCorners,
    MoveSymbol, Quad, DEFAULT_DECAY,
};
pub use board_overlay_render::{render_overlay, OverlayStyle, RenderReport};

pub use pipeline::{decode_actions, FrameReport, OverlayPipeline, PipelineParams, PoseLookup};
pub use pose::{PoseCache, RefreshOutcome};
