//! Tick quantization: continuous scroll position to discrete tick value.
//!
//! Pure functions only. The scroll surface hands us a raw offset that lives
//! inside a finite strip; the page counter remembers how many times the
//! surface has wrapped. Combining the two reconstructs an unbounded logical
//! position, which snaps to a tick every `tick_width` pixels.

/// Pixels of scroll travel per tick in the reference sizing.
pub const DEFAULT_TICK_WIDTH: f64 = 20.0;

/// Unbounded logical scroll position.
///
/// `wrap_span` is the distance a wrap teleport jumps (content width minus
/// viewport width), which is exactly what each page increment compensates.
///
/// # Arguments
/// * `offset` - Raw offset inside the finite strip
/// * `wrap_span` - Teleport jump distance in pixels
/// * `page` - Signed count of wraps so far
#[inline]
pub fn absolute_position(offset: f64, wrap_span: f64, page: i64) -> f64 {
    offset + page as f64 * wrap_span
}

/// Quantize a scroll position to a tick value.
///
/// Ties round away from zero (`f64::round`); that rule is part of the
/// contract, not an implementation detail.
#[inline]
pub fn tick_value(offset: f64, wrap_span: f64, page: i64, tick_width: f64) -> f64 {
    (absolute_position(offset, wrap_span, page) / tick_width).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization_deterministic() {
        for _ in 0..3 {
            assert_eq!(tick_value(310.0, 300.0, 0, 20.0), 16.0);
        }
    }

    #[test]
    fn test_page_compensation() {
        // offset 10 on page 1 is the same logical position as offset 310
        // on page 0 when the wrap span is 300.
        assert_eq!(
            tick_value(10.0, 300.0, 1, 20.0),
            tick_value(310.0, 300.0, 0, 20.0)
        );
        // Negative pages count backwards past the origin.
        assert_eq!(tick_value(280.0, 300.0, -1, 20.0), -1.0);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(tick_value(10.0, 300.0, 0, 20.0), 1.0);
        assert_eq!(tick_value(-10.0, 300.0, 0, 20.0), -1.0);
        assert_eq!(tick_value(30.0, 300.0, 0, 20.0), 2.0);
    }

    #[test]
    fn test_sub_tick_movement_same_tick() {
        // Anything within (-K/2, K/2) of a tick center quantizes to it.
        assert_eq!(tick_value(95.0, 300.0, 0, 20.0), 5.0);
        assert_eq!(tick_value(100.0, 300.0, 0, 20.0), 5.0);
        assert_eq!(tick_value(109.0, 300.0, 0, 20.0), 5.0);
    }
}
