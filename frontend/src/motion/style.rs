use crate::config::{MotionConfig, ParallaxRange};
use crate::motion::scroll::ScrollSnapshot;

/// Hard toggle, strictly greater than the threshold.
pub fn navbar_elevated(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

/// How far through the scrollable part of the document the viewport is,
/// in `[0, 1]`. A document that does not scroll reports 0.
pub fn progress_ratio(offset: u32, document_height: u32, viewport_height: u32) -> f64 {
    let scrollable = document_height.saturating_sub(viewport_height);
    if scrollable == 0 {
        return 0.0;
    }
    (offset as f64 / scrollable as f64).clamp(0.0, 1.0)
}

/// Hero card tilt in degrees.
pub fn parallax_tilt(offset: u32, range: ParallaxRange) -> f64 {
    if range.max_offset <= 0.0 {
        return 0.0;
    }
    let t = (offset as f64 / range.max_offset).clamp(0.0, 1.0);
    t * range.max_degrees
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedStyle {
    pub nav_elevated: bool,
    /// Unsmoothed progress; the progress bar springs towards it.
    pub progress_target: f64,
    pub tilt_degrees: f64,
}

impl DerivedStyle {
    pub fn from_snapshot(snapshot: ScrollSnapshot, config: &MotionConfig) -> Self {
        Self {
            nav_elevated: navbar_elevated(snapshot.offset, config.nav_threshold),
            progress_target: progress_ratio(
                snapshot.offset,
                snapshot.document_height,
                snapshot.viewport_height,
            ),
            tilt_degrees: parallax_tilt(snapshot.offset, config.parallax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u32 = 12;

    #[test]
    fn navbar_flag_matches_strict_threshold() {
        for offset in 0..200 {
            assert_eq!(navbar_elevated(offset, THRESHOLD), offset > 12, "offset {offset}");
        }
        assert!(!navbar_elevated(12, THRESHOLD));
        assert!(navbar_elevated(13, THRESHOLD));
    }

    #[test]
    fn navbar_scenario_load_scroll_down_and_back() {
        let config = MotionConfig::default();
        let style = |offset| {
            DerivedStyle::from_snapshot(
                ScrollSnapshot { offset, document_height: 3000, viewport_height: 800 },
                &config,
            )
        };
        assert!(!style(0).nav_elevated);
        assert!(style(50).nav_elevated);
        assert!(!style(5).nav_elevated);
    }

    #[test]
    fn progress_halfway_example() {
        assert_eq!(progress_ratio(2000, 5000, 1000), 0.5);
    }

    #[test]
    fn progress_is_bounded_and_monotonic() {
        let mut last = 0.0;
        for offset in (0..=4000).step_by(25) {
            let ratio = progress_ratio(offset, 5000, 1000);
            assert!((0.0..=1.0).contains(&ratio));
            assert!(ratio >= last, "dropped at {offset}");
            last = ratio;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn progress_clamps_inconsistent_extents() {
        // offset past the end, as can happen mid-resize
        assert_eq!(progress_ratio(9000, 5000, 1000), 1.0);
        assert_eq!(progress_ratio(300, 800, 1000), 0.0);
        assert_eq!(progress_ratio(300, 1000, 1000), 0.0);
    }

    #[test]
    fn tilt_is_linear_and_clamped() {
        let range = ParallaxRange::default();
        assert_eq!(parallax_tilt(0, range), 0.0);
        assert_eq!(parallax_tilt(300, range), 4.0);
        assert_eq!(parallax_tilt(600, range), 8.0);
        assert_eq!(parallax_tilt(6000, range), 8.0);
    }

    #[test]
    fn tilt_with_empty_range_is_flat() {
        let range = ParallaxRange { max_offset: 0.0, max_degrees: 8.0 };
        assert_eq!(parallax_tilt(100, range), 0.0);
    }

    #[test]
    fn default_snapshot_derives_safe_state() {
        let style = DerivedStyle::from_snapshot(ScrollSnapshot::default(), &MotionConfig::default());
        assert_eq!(style, DerivedStyle::default());
    }

    #[test]
    fn derivation_is_idempotent() {
        let config = MotionConfig::default();
        let snap = ScrollSnapshot { offset: 777, document_height: 4000, viewport_height: 900 };
        assert_eq!(
            DerivedStyle::from_snapshot(snap, &config),
            DerivedStyle::from_snapshot(snap, &config)
        );
    }
}
