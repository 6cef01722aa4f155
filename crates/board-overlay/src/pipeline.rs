use std::time::Duration;

use board_overlay_core::{extrapolate_grid, Action, Quad, DEFAULT_DECAY};
use board_overlay_render::{render_overlay, OverlayStyle, RenderReport};
use image::RgbaImage;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::pose::{PoseCache, RefreshOutcome};

/// External pose-estimation seam.
///
/// Implementations detect the calibration pattern in the frame, solve the
/// camera pose and return the projected reference quad, or `None` when the
/// pattern is not currently visible. Any `FnMut(&RgbaImage) -> Option<Quad>`
/// qualifies.
pub trait PoseLookup {
    fn lookup(&mut self, frame: &RgbaImage) -> Option<Quad>;
}

impl<F> PoseLookup for F
where
    F: FnMut(&RgbaImage) -> Option<Quad>,
{
    fn lookup(&mut self, frame: &RgbaImage) -> Option<Quad> {
        self(frame)
    }
}

/// Pipeline configuration. Pure data, no file format attached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Geometric decay of successive extrapolated cell widths.
    pub decay: f32,
    /// Minimum time between two pose lookups.
    pub refresh_interval: Duration,
    pub style: OverlayStyle,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            decay: DEFAULT_DECAY,
            refresh_interval: PoseCache::DEFAULT_REFRESH_INTERVAL,
            style: OverlayStyle::default(),
        }
    }
}

/// What happened to one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub refresh: RefreshOutcome,
    /// `None` when no pose has been observed yet: the whole overlay is
    /// skipped and the frame is left untouched.
    pub overlay: Option<RenderReport>,
}

/// Frame-at-a-time overlay driver: refresh decision, then extrapolation,
/// then render.
///
/// Fully synchronous: one frame is processed to completion before the next
/// is accepted, and the pose cache is the only state carried between frames.
pub struct OverlayPipeline<L> {
    cache: PoseCache,
    params: PipelineParams,
    lookup: L,
}

impl<L: PoseLookup> OverlayPipeline<L> {
    pub fn new(params: PipelineParams, lookup: L) -> Self {
        Self {
            cache: PoseCache::new(params.refresh_interval),
            params,
            lookup,
        }
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Process one frame at monotonic timestamp `now`.
    ///
    /// The pose lookup runs only when the cache decides it is due; the
    /// overlay itself is drawn every frame from the cached quad.
    pub fn process_frame(
        &mut self,
        frame: &mut RgbaImage,
        now: Duration,
        actions: &[Action],
    ) -> FrameReport {
        let lookup = &mut self.lookup;
        let refresh = self.cache.maybe_refresh(now, || lookup.lookup(frame));

        let Some(quad) = self.cache.current_quad() else {
            debug!("no pose observed yet, overlay skipped");
            return FrameReport {
                refresh,
                overlay: None,
            };
        };

        let corners = extrapolate_grid(quad, self.params.decay);
        let overlay = render_overlay(frame, &corners, actions, &self.params.style);
        FrameReport {
            refresh,
            overlay: Some(overlay),
        }
    }
}

/// Decode a batch of move codes, skipping malformed ones.
///
/// This is the recommended policy from the codec contract: a bad code drops
/// that single action at debug log level and the rest of the batch still
/// renders. Callers that want abort-on-error call [`Action::decode`]
/// directly.
pub fn decode_actions<'a, I>(codes: I) -> Vec<Action>
where
    I: IntoIterator<Item = &'a str>,
{
    codes
        .into_iter()
        .filter_map(|code| match Action::decode(code) {
            Ok(action) => Some(action),
            Err(err) => {
                debug!("skipping move code {code:?}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_overlay_core::MoveSymbol;

    #[test]
    fn decode_actions_skips_malformed_codes() {
        let actions = decode_actions(["CA0", "XD9", "RB1", "R"]);
        assert_eq!(
            actions,
            vec![
                Action {
                    symbol: MoveSymbol::Cross,
                    cell: 0
                },
                Action {
                    symbol: MoveSymbol::Ring,
                    cell: 5
                },
            ]
        );
    }

    #[test]
    fn params_serde_round_trip() {
        let params = PipelineParams {
            decay: 0.8,
            refresh_interval: Duration::from_millis(250),
            ..PipelineParams::default()
        };
        let json = serde_json::to_string(&params).expect("serialize");
        let back: PipelineParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, params);
    }
}
