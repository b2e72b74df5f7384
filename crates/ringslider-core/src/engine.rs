//! Slider engine: one explicit entry point per scroll notification.
//!
//! Composes the wrap controller and the delta emitter. The presentation
//! layer calls [`SliderEngine::on_scroll`], applies any returned offset
//! rewrite to its scroll surface, and re-feeds the rewritten offset at
//! most once per real input event. No callbacks, no re-entrancy.

use tracing::trace;

use crate::delta::DeltaEmitter;
use crate::geometry::StripGeometry;
use crate::wrap::WrapController;

/// Result of feeding one scroll notification through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollResponse {
    /// Offset the scroll surface must be rewritten to (wrap teleport).
    pub rewrite_offset_to: Option<f64>,
    /// Signed tick delta for the value binder. Absent when the
    /// notification produced no value movement.
    pub value_delta: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SliderEngine {
    wrap: WrapController,
    emitter: DeltaEmitter,
}

impl SliderEngine {
    pub fn new(tick_width: f64) -> Self {
        Self {
            wrap: WrapController::new(tick_width),
            emitter: DeltaEmitter::new(),
        }
    }

    /// Process a scroll-position notification.
    pub fn on_scroll(&mut self, offset: f64, geometry: &StripGeometry) -> ScrollResponse {
        let outcome = self.wrap.on_scroll(offset, geometry);

        let value_delta = outcome
            .published
            .map(|tick| self.emitter.observe(tick))
            .filter(|delta| *delta != 0.0);

        if let Some(delta) = value_delta {
            trace!(delta, page = self.wrap.page(), "tick delta");
        }

        ScrollResponse {
            rewrite_offset_to: outcome.rewrite_offset_to,
            value_delta,
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.wrap.page()
    }

    #[inline]
    pub fn last_tick(&self) -> f64 {
        self.emitter.last_tick()
    }

    #[inline]
    pub fn tick_width(&self) -> f64 {
        self.wrap.tick_width()
    }

    /// Forget wrap and delta state, as if freshly mounted.
    pub fn reset(&mut self) {
        self.wrap.reset();
        self.emitter = DeltaEmitter::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> StripGeometry {
        // Twelve viewport-wide runs, so a long scroll stays wrap-free.
        StripGeometry::new(300.0, 3600.0).unwrap()
    }

    #[test]
    fn test_scroll_to_tick_sixteen() {
        let mut engine = SliderEngine::new(20.0);
        assert_eq!(engine.on_scroll(0.0, &geom()).value_delta, None);
        let response = engine.on_scroll(310.0, &geom());
        assert_eq!(response.value_delta, Some(16.0));
        assert_eq!(response.rewrite_offset_to, None);
    }

    #[test]
    fn test_deltas_round_trip() {
        let mut engine = SliderEngine::new(20.0);
        let mut sum = 0.0;
        for offset in [40.0, 95.0, 250.0, 60.0, 310.0] {
            if let Some(delta) = engine.on_scroll(offset, &geom()).value_delta {
                sum += delta;
            }
        }
        // Sum of emitted deltas equals the final tick value.
        assert_eq!(sum, engine.last_tick());
        assert_eq!(sum, 16.0);
    }

    #[test]
    fn test_no_redundant_emission() {
        let mut engine = SliderEngine::new(20.0);
        assert_eq!(engine.on_scroll(95.0, &geom()).value_delta, Some(5.0));
        // Same tick again: no delta at all, not a zero delta.
        assert_eq!(engine.on_scroll(99.0, &geom()).value_delta, None);
    }

    #[test]
    fn test_teleport_is_not_value_movement() {
        let geom = StripGeometry::new(300.0, 600.0).unwrap();
        let mut engine = SliderEngine::new(20.0);

        // Land just past the edge, within half a tick of it.
        let response = engine.on_scroll(305.0, &geom);
        assert_eq!(response.value_delta, Some(15.0));
        assert_eq!(response.rewrite_offset_to, Some(0.0));
        assert_eq!(engine.page(), 1);

        // Re-feeding the rewritten offset quantizes to the same tick:
        // the teleport itself moves no value.
        let response = engine.on_scroll(0.0, &geom);
        assert_eq!(response.value_delta, None);
        assert_eq!(response.rewrite_offset_to, None);
    }

    #[test]
    fn test_wrap_continuity_both_edges() {
        let geom = StripGeometry::new(300.0, 600.0).unwrap();
        let mut engine = SliderEngine::new(20.0);

        // Walk right across the edge and back left across the start.
        engine.on_scroll(305.0, &geom);
        engine.on_scroll(0.0, &geom);
        let tick_after_right = engine.last_tick();

        let response = engine.on_scroll(-2.0, &geom);
        assert_eq!(response.rewrite_offset_to, Some(300.0));
        let response = engine.on_scroll(300.0, &geom);
        assert_eq!(response.value_delta, None);
        assert_eq!(engine.page(), 0);
        assert_eq!(engine.last_tick(), tick_after_right);
    }
}
