//! Scroll surface emulation.
//!
//! A terminal has no native horizontal scroll view, so this owns what a
//! platform scroll surface would: the raw offset and the strip geometry.
//! Drags arrive in column space and are scaled into logical pixels.
//!
//! Feeding the surface pushes the offset through the slider engine and
//! applies any requested teleport rewrite immediately, re-feeding the
//! rewritten offset exactly once. That single bounded iteration replaces
//! the re-entrant observation callback a native scroll view would produce.

use ringslider_core::{Result, SliderEngine, StripGeometry};

/// Movement produced by one pump of the surface through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceUpdate {
    /// Accumulated tick delta, if any value movement happened.
    pub value_delta: Option<f64>,
    /// Whether a wrap teleport was applied.
    pub teleported: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollSurface {
    offset: f64,
    geometry: StripGeometry,
    px_per_cell: f64,
}

impl ScrollSurface {
    /// Build a surface whose strip is `runs` viewport-wide runs.
    pub fn new(viewport_cells: u16, px_per_cell: f64, runs: u32) -> Result<Self> {
        let viewport = f64::from(viewport_cells) * px_per_cell;
        Ok(Self {
            offset: 0.0,
            geometry: StripGeometry::replicated(viewport, runs)?,
            px_per_cell,
        })
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn geometry(&self) -> &StripGeometry {
        &self.geometry
    }

    #[inline]
    pub fn px_per_cell(&self) -> f64 {
        self.px_per_cell
    }

    /// Move by a column-space distance (positive scrolls toward larger
    /// values). The offset may leave the strip; the next feed wraps it.
    pub fn scroll_by_cells(&mut self, cells: f64) {
        self.offset += cells * self.px_per_cell;
    }

    /// Move by a pixel-space distance.
    pub fn scroll_by_px(&mut self, px: f64) {
        self.offset += px;
    }

    /// Jump to an absolute raw offset without notifying the engine.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Push the current offset through the engine, applying at most one
    /// teleport rewrite. Deltas from the real and the synthetic
    /// notification are accumulated; in practice the synthetic one is
    /// deduped away unless the offset overshot the edge by half a tick.
    pub fn feed(&mut self, engine: &mut SliderEngine) -> SurfaceUpdate {
        let mut update = SurfaceUpdate::default();

        let response = engine.on_scroll(self.offset, &self.geometry);
        let mut total = response.value_delta.unwrap_or(0.0);

        if let Some(rewritten) = response.rewrite_offset_to {
            self.offset = rewritten;
            update.teleported = true;
            let response = engine.on_scroll(self.offset, &self.geometry);
            total += response.value_delta.unwrap_or(0.0);
            // Geometry validation guarantees the rewrite lands inside the
            // safe zone, so the synthetic notification never teleports.
            debug_assert!(response.rewrite_offset_to.is_none());
        }

        if total != 0.0 {
            update.value_delta = Some(total);
        }
        update
    }

    /// Scroll by a pixel distance, feeding the engine in sub-half-tick
    /// chunks.
    ///
    /// A native scroll view notifies densely enough that an edge is never
    /// overshot by more than a fraction of a tick before the teleport
    /// lands. Pointer sampling in a terminal is far coarser; a fast drag
    /// can jump whole ticks past the edge in one event, and the teleport's
    /// exact-origin rewrite would discard that overshoot. Chunking
    /// restores the dense stream the engine is designed around.
    pub fn scroll_feeding(&mut self, px: f64, engine: &mut SliderEngine) -> SurfaceUpdate {
        let mut update = SurfaceUpdate::default();
        let mut total = 0.0;
        let chunk = engine.tick_width() / 2.0;
        let mut remaining = px;

        loop {
            let step = remaining.clamp(-chunk, chunk);
            self.offset += step;
            remaining -= step;

            let fed = self.feed(engine);
            total += fed.value_delta.unwrap_or(0.0);
            update.teleported |= fed.teleported;

            if remaining == 0.0 {
                break;
            }
        }

        if total != 0.0 {
            update.value_delta = Some(total);
        }
        update
    }

    /// Rebuild the strip for a new viewport width, dropping the raw
    /// offset back to the strip origin.
    pub fn resize(&mut self, viewport_cells: u16, runs: u32) -> Result<()> {
        let viewport = f64::from(viewport_cells) * self.px_per_cell;
        self.geometry = StripGeometry::replicated(viewport, runs)?;
        self.offset = 0.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> ScrollSurface {
        // 60 columns at 5 px each: viewport 300 px, strip 600 px.
        ScrollSurface::new(60, 5.0, 2).unwrap()
    }

    #[test]
    fn test_cell_scaling() {
        let mut surface = surface();
        surface.scroll_by_cells(4.0);
        assert_eq!(surface.offset(), 20.0);
    }

    #[test]
    fn test_feed_reports_tick_delta() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);
        surface.scroll_by_px(95.0);
        let update = surface.feed(&mut engine);
        assert_eq!(update.value_delta, Some(5.0));
        assert!(!update.teleported);
    }

    #[test]
    fn test_feed_applies_single_teleport() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);

        surface.scroll_by_px(305.0);
        let update = surface.feed(&mut engine);
        assert!(update.teleported);
        assert_eq!(surface.offset(), 0.0);
        assert_eq!(update.value_delta, Some(15.0));
        assert_eq!(engine.page(), 1);

        // The surface is now inside the safe zone; feeding again is quiet.
        let update = surface.feed(&mut engine);
        assert!(!update.teleported);
        assert_eq!(update.value_delta, None);
    }

    #[test]
    fn test_feed_left_edge() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);
        surface.scroll_by_px(-3.0);
        let update = surface.feed(&mut engine);
        assert!(update.teleported);
        assert_eq!(surface.offset(), 300.0);
        assert_eq!(engine.page(), -1);
        assert_eq!(update.value_delta, None);
    }

    #[test]
    fn test_sub_tick_feed_is_quiet() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);
        surface.scroll_by_px(6.0);
        assert_eq!(surface.feed(&mut engine), SurfaceUpdate::default());
    }

    #[test]
    fn test_overshoot_accumulates_across_teleport() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);

        // Overshoot the edge by a full tick: the real notification
        // publishes 16, the teleport drops the offset back to the strip
        // origin, and the synthetic notification corrects to 15. The
        // caller sees the accumulated movement, not two jumps.
        surface.scroll_by_px(320.0);
        let update = surface.feed(&mut engine);
        assert!(update.teleported);
        assert_eq!(surface.offset(), 0.0);
        assert_eq!(update.value_delta, Some(15.0));
        assert_eq!(engine.last_tick(), 15.0);
    }

    #[test]
    fn test_chunked_scroll_survives_left_edge() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);

        // A single coarse 40 px leftward jump from the origin crosses the
        // left edge; chunked feeding keeps the two ticks of movement that
        // a one-shot feed would discard with the overshoot.
        let update = surface.scroll_feeding(-40.0, &mut engine);
        assert!(update.teleported);
        assert_eq!(update.value_delta, Some(-2.0));
        assert_eq!(surface.offset(), 270.0);
        assert_eq!(engine.page(), -1);
    }

    #[test]
    fn test_chunked_scroll_exact_across_right_edge() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);

        // 320 px is exactly 16 ticks; the wrap in the middle must not
        // change that.
        let update = surface.scroll_feeding(320.0, &mut engine);
        assert!(update.teleported);
        assert_eq!(update.value_delta, Some(16.0));
        assert_eq!(engine.page(), 1);
        assert_eq!(surface.offset(), 10.0);
    }

    #[test]
    fn test_chunked_scroll_zero_distance_is_quiet() {
        let mut surface = surface();
        let mut engine = SliderEngine::new(20.0);
        assert_eq!(
            surface.scroll_feeding(0.0, &mut engine),
            SurfaceUpdate::default()
        );
        assert_eq!(surface.offset(), 0.0);
    }

    #[test]
    fn test_resize_rebuilds_strip() {
        let mut surface = surface();
        surface.scroll_by_px(123.0);
        surface.resize(100, 2).unwrap();
        assert_eq!(surface.offset(), 0.0);
        assert_eq!(surface.geometry().viewport(), 500.0);
    }
}
