//! Scrub math for scroll-linked bindings.
//!
//! A scrub's progress is a continuous function of scroll offset, not of
//! elapsed time. These functions are pure so the mapping is unit-testable;
//! the controller in `mod.rs` feeds them live geometry.

/// Scroll-linked binding kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubKind {
    /// Vertical translation by a depth factor over the element's own
    /// visible range.
    Parallax { depth: f64 },
    /// Horizontal scale bound to overall page scroll fraction.
    ProgressBar,
    /// Subtle scale pulse over the element's visible range.
    PulseScale { max_scale: f64 },
}

/// Progress of an element through its visible range: 0.0 the moment its top
/// enters at the bottom of the viewport, 1.0 when its bottom leaves at the
/// top.
pub fn span_progress(top: f64, height: f64, viewport_h: f64) -> f64 {
    let total = viewport_h + height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_h - top) / total).clamp(0.0, 1.0)
}

/// Parallax translation in percent of element height. Depth 1.0 travels the
/// full -30% over the visible range.
pub fn parallax_percent(depth: f64, progress: f64) -> f64 {
    depth * -30.0 * progress
}

/// Overall page scroll fraction in 0..=1.
pub fn page_fraction(scroll_y: f64, scroll_height: f64, viewport_h: f64) -> f64 {
    let scrollable = scroll_height - viewport_h;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Background hue in degrees for a given page fraction.
pub fn hue(fraction: f64) -> f64 {
    (fraction * 360.0).clamp(0.0, 360.0)
}

/// CSS transform for a scrub binding at the given progress.
pub fn scrub_transform(kind: &ScrubKind, progress: f64) -> String {
    match kind {
        ScrubKind::Parallax { depth } => {
            format!("translateY({:.3}%)", parallax_percent(*depth, progress))
        }
        ScrubKind::ProgressBar => format!("scaleX({progress:.4})"),
        ScrubKind::PulseScale { max_scale } => {
            format!("scale({:.4})", 1.0 + (max_scale - 1.0) * progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_progress_endpoints() {
        // element top at viewport bottom: just entering
        assert_eq!(span_progress(800.0, 200.0, 800.0), 0.0);
        // element bottom at viewport top: just leaving
        assert_eq!(span_progress(-200.0, 200.0, 800.0), 1.0);
        // halfway through its range
        let mid = span_progress(300.0, 200.0, 800.0);
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn span_progress_clamps_out_of_range() {
        assert_eq!(span_progress(2000.0, 200.0, 800.0), 0.0);
        assert_eq!(span_progress(-5000.0, 200.0, 800.0), 1.0);
        assert_eq!(span_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_scales_with_depth() {
        assert_eq!(parallax_percent(1.0, 1.0), -30.0);
        assert_eq!(parallax_percent(0.2, 0.5), -3.0);
        assert_eq!(parallax_percent(0.5, 0.0), 0.0);
    }

    #[test]
    fn page_fraction_clamps_and_handles_short_pages() {
        assert_eq!(page_fraction(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(page_fraction(2200.0, 3000.0, 800.0), 1.0);
        assert_eq!(page_fraction(1100.0, 3000.0, 800.0), 0.5);
        // page shorter than the viewport never scrolls
        assert_eq!(page_fraction(50.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn hue_spans_the_wheel() {
        assert_eq!(hue(0.0), 0.0);
        assert_eq!(hue(0.5), 180.0);
        assert_eq!(hue(1.0), 360.0);
    }

    #[test]
    fn scrub_transforms_render_css() {
        assert_eq!(
            scrub_transform(&ScrubKind::Parallax { depth: 0.2 }, 0.5),
            "translateY(-3.000%)"
        );
        assert_eq!(scrub_transform(&ScrubKind::ProgressBar, 0.25), "scaleX(0.2500)");
        assert_eq!(
            scrub_transform(&ScrubKind::PulseScale { max_scale: 1.015 }, 1.0),
            "scale(1.0150)"
        );
    }
}
