//! Pointer and touch drag measurement.
//!
//! Handlers feed raw client coordinates in; everything here is plain
//! arithmetic so it can be driven without a browser.

use crate::slides::Direction;

/// Multiplier applied to pointer travel when dragging the room strip.
pub const SCROLL_DRAG_FACTOR: f64 = 1.5;

/// Release rule for a swipe. Either bound being exceeded commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold {
    pub min_px: f64,
    pub min_percent: Option<f64>,
}

impl SwipeThreshold {
    /// Full-screen hero: 40px or 15% of the container.
    pub const HERO: Self = Self {
        min_px: 40.0,
        min_percent: Some(15.0),
    };

    /// Gallery: touch swipes only, 50px.
    pub const GALLERY: Self = Self {
        min_px: 50.0,
        min_percent: None,
    };

    pub fn is_met(&self, sample: DragSample) -> bool {
        if sample.offset_px.abs() > self.min_px {
            return true;
        }
        self.min_percent
            .is_some_and(|min| sample.percent.abs() > min)
    }
}

/// Drag distance since the pointer went down.
///
/// `offset_px` is `start_x - current_x`, so dragging left is positive and
/// means "show the next slide".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSample {
    pub offset_px: f64,
    pub percent: f64,
}

impl DragSample {
    pub fn measure(start_x: f64, current_x: f64, container_width: f64) -> Self {
        let offset_px = start_x - current_x;
        Self {
            offset_px,
            percent: drag_percent(offset_px, container_width),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        if self.offset_px > 0.0 {
            Some(Direction::Forward)
        } else if self.offset_px < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// Offset as a percentage of the container, clamped to [-100, 100].
/// A zero or unmeasurable width reads as no drag at all.
pub fn drag_percent(offset_px: f64, container_width: f64) -> f64 {
    if !(container_width > 0.0) || !offset_px.is_finite() {
        return 0.0;
    }
    (offset_px / container_width * 100.0).clamp(-100.0, 100.0)
}

/// Drag-to-scroll for a horizontally scrolling strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDrag {
    start_x: f64,
    start_scroll: f64,
}

impl ScrollDrag {
    pub fn begin(x: f64, scroll_left: f64) -> Self {
        Self {
            start_x: x,
            start_scroll: scroll_left,
        }
    }

    /// Scroll position that keeps the strip under the pointer.
    pub fn scroll_for(&self, x: f64) -> f64 {
        self.start_scroll - (x - self.start_x) * SCROLL_DRAG_FACTOR
    }
}

/// Card currently in view for a strip of `count` cards each `card_width` wide.
pub fn visible_index(scroll_left: f64, card_width: f64, count: usize) -> usize {
    if count == 0 || !(card_width > 0.0) {
        return 0;
    }
    let idx = (scroll_left / card_width).round().max(0.0) as usize;
    idx.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(drag_percent(50.0, 200.0), 25.0);
        assert_eq!(drag_percent(-500.0, 200.0), -100.0);
        assert_eq!(drag_percent(900.0, 200.0), 100.0);
    }

    #[test]
    fn zero_width_container_reads_as_no_drag() {
        assert_eq!(drag_percent(120.0, 0.0), 0.0);
        assert_eq!(drag_percent(120.0, -10.0), 0.0);
        assert_eq!(drag_percent(120.0, f64::NAN), 0.0);
    }

    #[test]
    fn dragging_left_points_forward() {
        let sample = DragSample::measure(300.0, 200.0, 1000.0);
        assert_eq!(sample.offset_px, 100.0);
        assert_eq!(sample.percent, 10.0);
        assert_eq!(sample.direction(), Some(Direction::Forward));
        assert_eq!(
            DragSample::measure(200.0, 300.0, 1000.0).direction(),
            Some(Direction::Backward)
        );
        assert_eq!(DragSample::default().direction(), None);
    }

    #[test]
    fn hero_threshold_accepts_either_bound() {
        // 30px on a 100px container: 30% clears the percent rule
        assert!(SwipeThreshold::HERO.is_met(DragSample::measure(130.0, 100.0, 100.0)));
        // 41px on a very wide container: clears the pixel rule
        assert!(SwipeThreshold::HERO.is_met(DragSample::measure(141.0, 100.0, 10_000.0)));
        // 40px exactly on a wide container: neither
        assert!(!SwipeThreshold::HERO.is_met(DragSample::measure(140.0, 100.0, 10_000.0)));
    }

    #[test]
    fn gallery_threshold_ignores_percent() {
        let short = DragSample::measure(140.0, 100.0, 50.0);
        assert_eq!(short.percent, 80.0);
        assert!(!SwipeThreshold::GALLERY.is_met(short));
        assert!(SwipeThreshold::GALLERY.is_met(DragSample::measure(100.0, 49.0, 50.0)));
    }

    #[test]
    fn scroll_drag_moves_opposite_to_pointer() {
        let drag = ScrollDrag::begin(100.0, 400.0);
        assert_eq!(drag.scroll_for(100.0), 400.0);
        assert_eq!(drag.scroll_for(60.0), 460.0);
        assert_eq!(drag.scroll_for(140.0), 340.0);
    }

    #[test]
    fn visible_index_rounds_and_caps() {
        assert_eq!(visible_index(0.0, 300.0, 4), 0);
        assert_eq!(visible_index(449.0, 300.0, 4), 1);
        assert_eq!(visible_index(451.0, 300.0, 4), 2);
        assert_eq!(visible_index(5_000.0, 300.0, 4), 3);
        assert_eq!(visible_index(500.0, 0.0, 4), 0);
        assert_eq!(visible_index(500.0, 300.0, 0), 0);
    }
}
