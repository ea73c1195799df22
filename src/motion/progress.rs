//! Scroll-to-progress mappings. Inputs are the section's bounding-box `top`
//! (relative to the viewport) and `height`, plus the viewport height; outputs
//! are clamped to `[0, 1]` and move monotonically with scroll offset.

/// Progress of a section travelling through the viewport: 0 exactly when the
/// section's top reaches the viewport bottom, 1 exactly when its bottom
/// reaches the viewport top.
pub fn view_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let span = height + viewport;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport - top) / span).clamp(0.0, 1.0)
}

/// Exit progress for an above-the-fold section: 0 while its top sits at the
/// viewport top, 1 once it has scrolled fully past.
pub fn exit_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Progress through a section taller than the viewport whose inner content is
/// pinned: 0 when the section top hits the viewport top, 1 when its bottom
/// hits the viewport bottom.
pub fn pin_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let track = height - viewport;
    if track <= 0.0 {
        return 0.0;
    }
    (-top / track).clamp(0.0, 1.0)
}

/// Remap overall section progress onto a `[start, end]` sub-range.
pub fn remap(progress: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if progress < start { 0.0 } else { 1.0 };
    }
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 900.0;
    const HEIGHT: f64 = 600.0;

    #[test]
    fn test_view_progress_extremes_at_boundaries() {
        // Section top at viewport bottom: entry boundary.
        assert_eq!(view_progress(VIEWPORT, HEIGHT, VIEWPORT), 0.0);
        // Section bottom at viewport top: exit boundary.
        assert_eq!(view_progress(-HEIGHT, HEIGHT, VIEWPORT), 1.0);
        // Off-screen in either direction stays clamped.
        assert_eq!(view_progress(VIEWPORT + 500.0, HEIGHT, VIEWPORT), 0.0);
        assert_eq!(view_progress(-HEIGHT - 500.0, HEIGHT, VIEWPORT), 1.0);
    }

    #[test]
    fn test_view_progress_monotonic_in_scroll() {
        // Scrolling down moves `top` upward (decreasing); progress must not
        // decrease anywhere along the way.
        let mut prev = 0.0;
        let mut top = VIEWPORT + 100.0;
        while top > -HEIGHT - 100.0 {
            let p = view_progress(top, HEIGHT, VIEWPORT);
            assert!(p >= prev, "progress regressed at top={top}");
            prev = p;
            top -= 7.0;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_view_progress_continuous_at_boundaries() {
        let eps = 0.5;
        for boundary in [VIEWPORT, -HEIGHT] {
            let below = view_progress(boundary + eps, HEIGHT, VIEWPORT);
            let at = view_progress(boundary, HEIGHT, VIEWPORT);
            let above = view_progress(boundary - eps, HEIGHT, VIEWPORT);
            assert!((at - below).abs() < 1e-3);
            assert!((above - at).abs() < 1e-3);
        }
    }

    #[test]
    fn test_exit_progress_span() {
        assert_eq!(exit_progress(0.0, HEIGHT), 0.0);
        assert_eq!(exit_progress(-HEIGHT / 2.0, HEIGHT), 0.5);
        assert_eq!(exit_progress(-HEIGHT, HEIGHT), 1.0);
        assert_eq!(exit_progress(200.0, HEIGHT), 0.0);
    }

    #[test]
    fn test_pin_progress_span() {
        let tall = VIEWPORT * 5.0;
        assert_eq!(pin_progress(0.0, tall, VIEWPORT), 0.0);
        assert_eq!(pin_progress(-(tall - VIEWPORT), tall, VIEWPORT), 1.0);
        assert_eq!(pin_progress(-(tall - VIEWPORT) / 2.0, tall, VIEWPORT), 0.5);
        // Sections no taller than the viewport have no track to scrub.
        assert_eq!(pin_progress(-100.0, VIEWPORT, VIEWPORT), 0.0);
    }

    #[test]
    fn test_remap_subrange() {
        assert_eq!(remap(0.0, 0.0, 0.8), 0.0);
        assert_eq!(remap(0.4, 0.0, 0.8), 0.5);
        assert_eq!(remap(0.8, 0.0, 0.8), 1.0);
        assert_eq!(remap(0.9, 0.0, 0.8), 1.0);
        // Degenerate range behaves as a step.
        assert_eq!(remap(0.2, 0.5, 0.5), 0.0);
        assert_eq!(remap(0.7, 0.5, 0.5), 1.0);
    }
}
