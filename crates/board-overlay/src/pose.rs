use std::time::Duration;

use board_overlay_core::Quad;
use log::debug;

/// Outcome of a single [`PoseCache::maybe_refresh`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshOutcome {
    /// The lookup ran and produced a fresh quad.
    Refreshed,
    /// The lookup ran but the pattern was not visible; the previously cached
    /// quad (if any) is retained.
    PatternNotFound,
    /// The refresh interval has not elapsed; the lookup was not invoked.
    Throttled,
}

/// Rate limiter and cache for the external pose lookup.
///
/// The pose estimate is the one expensive step of the pipeline, so it runs
/// at most once per `refresh_interval` once a pose has been observed; every
/// frame in between reuses the cached quad. Timestamps are monotonic offsets
/// supplied by the frame source — the cache never reads a clock itself.
#[derive(Clone, Debug)]
pub struct PoseCache {
    quad: Option<Quad>,
    last_refresh: Duration,
    initialized: bool,
    refresh_interval: Duration,
}

impl PoseCache {
    /// Default time between two pose lookups.
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            quad: None,
            last_refresh: Duration::ZERO,
            initialized: false,
            refresh_interval,
        }
    }

    /// Invoke `lookup` if no pose has been observed yet or the refresh
    /// interval has elapsed.
    ///
    /// The attempt timestamp advances whether or not the pattern was found,
    /// so once initialized a lost pattern is retried at most once per
    /// interval. On failure the stale quad stays cached.
    pub fn maybe_refresh(
        &mut self,
        now: Duration,
        lookup: impl FnOnce() -> Option<Quad>,
    ) -> RefreshOutcome {
        if self.initialized && now.saturating_sub(self.last_refresh) < self.refresh_interval {
            return RefreshOutcome::Throttled;
        }

        self.last_refresh = now;
        match lookup() {
            Some(quad) => {
                self.quad = Some(quad);
                self.initialized = true;
                RefreshOutcome::Refreshed
            }
            None => {
                debug!("pattern not found, keeping cached pose");
                RefreshOutcome::PatternNotFound
            }
        }
    }

    /// Last successfully observed quad; `None` until the first success.
    pub fn current_quad(&self) -> Option<&Quad> {
        self.quad.as_ref()
    }
}

impl Default for PoseCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn quad(x: f32) -> Quad {
        Quad::new(
            Point2::new(x, 0.0),
            Point2::new(x + 1.0, 0.0),
            Point2::new(x + 1.0, 1.0),
            Point2::new(x, 1.0),
        )
    }

    #[test]
    fn first_call_always_invokes_the_lookup() {
        let mut cache = PoseCache::default();
        // `now` far below the interval: the uninitialized cache still asks.
        let outcome = cache.maybe_refresh(Duration::from_millis(1), || Some(quad(0.0)));
        assert_eq!(outcome, RefreshOutcome::Refreshed);
        assert_eq!(cache.current_quad(), Some(&quad(0.0)));
    }

    #[test]
    fn refreshes_are_throttled_to_the_interval() {
        let mut cache = PoseCache::default();
        assert_eq!(
            cache.maybe_refresh(Duration::ZERO, || Some(quad(0.0))),
            RefreshOutcome::Refreshed
        );

        // 0.1 s later: interval not elapsed, lookup must not run.
        let outcome = cache.maybe_refresh(Duration::from_millis(100), || {
            panic!("lookup invoked while throttled")
        });
        assert_eq!(outcome, RefreshOutcome::Throttled);

        // 1.1 s later: due again.
        assert_eq!(
            cache.maybe_refresh(Duration::from_millis(1100), || Some(quad(5.0))),
            RefreshOutcome::Refreshed
        );
        assert_eq!(cache.current_quad(), Some(&quad(5.0)));
    }

    #[test]
    fn failed_lookup_keeps_stale_quad_and_advances_the_timestamp() {
        let mut cache = PoseCache::default();
        cache.maybe_refresh(Duration::ZERO, || Some(quad(0.0)));

        // Pattern lost at t = 2 s: stale quad retained.
        assert_eq!(
            cache.maybe_refresh(Duration::from_secs(2), || None),
            RefreshOutcome::PatternNotFound
        );
        assert_eq!(cache.current_quad(), Some(&quad(0.0)));

        // t = 2.5 s: the failed attempt advanced the timestamp, so the
        // lookup stays throttled until 3 s.
        assert_eq!(
            cache.maybe_refresh(Duration::from_millis(2500), || {
                panic!("lookup invoked while throttled")
            }),
            RefreshOutcome::Throttled
        );
    }

    #[test]
    fn uninitialized_cache_reports_no_quad() {
        let mut cache = PoseCache::default();
        assert_eq!(cache.current_quad(), None);

        assert_eq!(
            cache.maybe_refresh(Duration::ZERO, || None),
            RefreshOutcome::PatternNotFound
        );
        assert_eq!(cache.current_quad(), None);
    }
}
