//! Infinite-wrap control: page tracking, publish dedup, edge teleports.
//!
//! The visible window scrolls through a finite strip. When the raw offset
//! leaves the strip on either side, the controller bumps its page counter
//! and asks the scroll surface to rewrite the offset to the opposite edge.
//! The page compensation exactly cancels the jump, so the quantized tick
//! value never notices the teleport.

use tracing::debug;

use crate::geometry::StripGeometry;
use crate::quantize;

/// Decision for one scroll-position notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WrapOutcome {
    /// Newly published tick value. Absent when the notification stayed
    /// inside the previously published tick (sub-tick movement).
    pub published: Option<f64>,
    /// Offset the scroll surface must be rewritten to before the next
    /// real event. Present only when an edge was crossed.
    pub rewrite_offset_to: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct WrapController {
    tick_width: f64,
    page: i64,
    last_published: f64,
}

impl WrapController {
    pub fn new(tick_width: f64) -> Self {
        Self {
            tick_width,
            page: 0,
            last_published: 0.0,
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn tick_width(&self) -> f64 {
        self.tick_width
    }

    /// Process one scroll-position notification.
    ///
    /// Publishing strictly precedes the edge checks: a teleport rewrites
    /// the offset and bumps the page by the exact compensating amount, so
    /// the re-fed offset quantizes to the tick just published and the
    /// dedup swallows the synthetic notification.
    pub fn on_scroll(&mut self, offset: f64, geometry: &StripGeometry) -> WrapOutcome {
        let mut outcome = WrapOutcome::default();

        let tick = quantize::tick_value(offset, geometry.wrap_span(), self.page, self.tick_width);
        if tick != self.last_published {
            self.last_published = tick;
            outcome.published = Some(tick);
        }

        // Past the start of the strip: jump to the same logical position
        // at the far end.
        if offset < 0.0 {
            self.page -= 1;
            outcome.rewrite_offset_to = Some(geometry.max_offset());
            debug!(page = self.page, "wrapped past start of strip");
            return outcome;
        }

        // Past the end: jump back to the start.
        if offset > geometry.max_offset() {
            self.page += 1;
            outcome.rewrite_offset_to = Some(0.0);
            debug!(page = self.page, "wrapped past end of strip");
        }

        outcome
    }

    /// Forget accumulated wrap state. The next notification republishes
    /// from a zero page.
    pub fn reset(&mut self) {
        self.page = 0;
        self.last_published = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> StripGeometry {
        StripGeometry::new(300.0, 600.0).unwrap()
    }

    #[test]
    fn test_publish_dedup_within_tick() {
        let mut wrap = WrapController::new(20.0);
        let outcome = wrap.on_scroll(95.0, &geom());
        assert_eq!(outcome.published, Some(5.0));
        // 104 still quantizes to tick 5: nothing published.
        let outcome = wrap.on_scroll(104.0, &geom());
        assert_eq!(outcome.published, None);
        assert_eq!(outcome.rewrite_offset_to, None);
    }

    #[test]
    fn test_initial_tick_not_republished() {
        let mut wrap = WrapController::new(20.0);
        // Offset 0 quantizes to the initial published tick of 0.
        assert_eq!(wrap.on_scroll(0.0, &geom()).published, None);
    }

    #[test]
    fn test_right_edge_teleport() {
        let mut wrap = WrapController::new(20.0);
        let outcome = wrap.on_scroll(301.0, &geom());
        assert_eq!(outcome.published, Some(15.0));
        assert_eq!(outcome.rewrite_offset_to, Some(0.0));
        assert_eq!(wrap.page(), 1);

        // The synthetic notification for the rewritten offset quantizes to
        // the same tick and publishes nothing: no jump across the teleport.
        let outcome = wrap.on_scroll(0.0, &geom());
        assert_eq!(outcome.published, None);
        assert_eq!(outcome.rewrite_offset_to, None);
        assert_eq!(wrap.page(), 1);
    }

    #[test]
    fn test_left_edge_teleport() {
        let mut wrap = WrapController::new(20.0);
        let outcome = wrap.on_scroll(-4.0, &geom());
        assert_eq!(outcome.rewrite_offset_to, Some(300.0));
        assert_eq!(wrap.page(), -1);

        let outcome = wrap.on_scroll(300.0, &geom());
        assert_eq!(outcome.published, None);
        assert_eq!(wrap.page(), -1);
    }

    #[test]
    fn test_page_moves_one_per_teleport() {
        let mut wrap = WrapController::new(20.0);
        wrap.on_scroll(301.0, &geom());
        wrap.on_scroll(0.0, &geom());
        wrap.on_scroll(302.0, &geom());
        wrap.on_scroll(0.0, &geom());
        assert_eq!(wrap.page(), 2);
    }

    #[test]
    fn test_publish_precedes_teleport() {
        let mut wrap = WrapController::new(20.0);
        // Crossing the edge mid-tick publishes the new tick on the same
        // notification that requests the rewrite.
        let outcome = wrap.on_scroll(305.0, &geom());
        assert_eq!(outcome.published, Some(15.0));
        assert_eq!(outcome.rewrite_offset_to, Some(0.0));
    }

    #[test]
    fn test_reset() {
        let mut wrap = WrapController::new(20.0);
        wrap.on_scroll(301.0, &geom());
        wrap.reset();
        assert_eq!(wrap.page(), 0);
        assert_eq!(wrap.on_scroll(0.0, &geom()).published, None);
    }
}
