//! Geometry and move-code types for the perspective board overlay.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any image type or drawing backend: it turns a tracked
//! quadrilateral into grid-cell corners and compact move codes into cell
//! targets, and leaves rasterisation to `board-overlay-render`.

mod action;
mod extrapolate;
mod intersect;
mod types;

pub use action::{Action, ActionDecodeError, MoveSymbol};
pub use extrapolate::{extrapolate_grid, DEFAULT_DECAY};
pub use intersect::{line_intersection, DegenerateLines};
pub use types::{GridCorners, Quad};
