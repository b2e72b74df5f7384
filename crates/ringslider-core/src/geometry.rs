//! Strip geometry: the finite backing buffer behind the infinite-wrap
//! illusion.
//!
//! The strip must be at least two viewports wide, otherwise a wrap teleport
//! could land in a position that immediately re-triggers another edge
//! condition. That is a configuration defect, so it is rejected here at
//! construction instead of being patched over per event.

use crate::error::{Error, Result};

/// Validated dimensions of the tick strip and its visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    viewport: f64,
    content: f64,
}

impl StripGeometry {
    /// Create a geometry, rejecting non-finite or degenerate dimensions
    /// and strips narrower than two viewports.
    pub fn new(viewport: f64, content: f64) -> Result<Self> {
        if !viewport.is_finite() || !content.is_finite() {
            return Err(Error::Geometry(format!(
                "dimensions must be finite, got viewport {viewport}, content {content}"
            )));
        }
        if viewport <= 0.0 {
            return Err(Error::Geometry(format!(
                "viewport width must be positive, got {viewport}"
            )));
        }
        if content < viewport * 2.0 {
            return Err(Error::StripTooNarrow { content, viewport });
        }
        Ok(Self { viewport, content })
    }

    /// Strip built from viewport-wide runs of tick groups, the way the
    /// widget lays out its backing buffer. At least two runs.
    pub fn replicated(viewport: f64, runs: u32) -> Result<Self> {
        Self::new(viewport, viewport * f64::from(runs))
    }

    #[inline]
    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    #[inline]
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Largest raw offset that keeps the visible window inside the strip.
    /// Offsets beyond it (or below zero) are the teleport triggers.
    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.content - self.viewport
    }

    /// Distance a wrap teleport jumps. Each page increment compensates
    /// exactly this much, which is what keeps the tick value continuous
    /// across a teleport.
    #[inline]
    pub fn wrap_span(&self) -> f64 {
        self.content - self.viewport
    }
}
