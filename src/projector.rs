//! Per-slide styling derived from carousel state.

use crate::carousel::Carousel;

const CURRENT_Z: i32 = 10;
const NEIGHBOUR_Z: i32 = 5;
/// Drag percentage at which a revealed neighbour reaches full opacity.
const FADE_IN_SPAN: f64 = 30.0;
/// How far a neighbour sits outside the frame before it is dragged in.
const NEIGHBOUR_START_OFFSET: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SlideStyle {
    pub translate_percent: f64,
    pub opacity: f64,
    pub z_index: i32,
    /// `None` while the pointer is down so the slide tracks it exactly.
    pub transition: Option<String>,
}

impl SlideStyle {
    pub fn to_css(&self) -> String {
        format!(
            "position: absolute; inset: 0; transform: translateX({}%); opacity: {}; z-index: {}; transition: {};",
            self.translate_percent,
            self.opacity,
            self.z_index,
            self.transition.as_deref().unwrap_or("none"),
        )
    }
}

pub fn transition_css(animation_ms: u32, reduced_motion: bool) -> String {
    if reduced_motion {
        format!("transform {animation_ms}ms ease, opacity {animation_ms}ms ease")
    } else {
        format!(
            "transform {animation_ms}ms cubic-bezier(0.25, 1, 0.5, 1), opacity {animation_ms}ms ease-out"
        )
    }
}

/// Sliding projection used by the full-screen hero.
///
/// The current slide follows the drag. The neighbour on the side being
/// revealed fades and slides in; everything else is parked behind at
/// opacity 0.
pub fn slide_style(carousel: &Carousel, index: usize) -> SlideStyle {
    let config = carousel.config();
    let percent = carousel.drag().percent;
    let moving = carousel.is_dragging() || carousel.is_transitioning();
    let transitioning = carousel.is_transitioning();
    let reveal = (percent.abs() / FADE_IN_SPAN).clamp(0.0, 1.0);
    let travel = NEIGHBOUR_START_OFFSET * (1.0 - (percent.abs() / 100.0).min(1.0));

    let mut style = SlideStyle {
        translate_percent: 0.0,
        opacity: 0.0,
        z_index: 0,
        transition: if carousel.is_dragging() {
            None
        } else {
            Some(transition_css(config.animation_ms, config.reduced_motion))
        },
    };

    if index == carousel.current() {
        style.z_index = CURRENT_Z;
        style.opacity = 1.0;
        if moving {
            style.translate_percent = -percent;
        }
    } else if index == carousel.next_index() && (percent > 0.0 || transitioning) {
        style.z_index = NEIGHBOUR_Z;
        if config.reduced_motion {
            style.translate_percent = 100.0;
            style.opacity = if transitioning { 1.0 } else { reveal_forward(percent) };
        } else {
            style.translate_percent = 100.0 - travel;
            style.opacity = reveal_forward(percent);
        }
    } else if index == carousel.prev_index() && (percent < 0.0 || transitioning) {
        style.z_index = NEIGHBOUR_Z;
        if config.reduced_motion {
            style.translate_percent = -100.0;
            style.opacity = if transitioning { 1.0 } else { reveal };
        } else {
            style.translate_percent = -100.0 + travel;
            style.opacity = reveal;
        }
    }

    style
}

// Only a forward drag reveals the next slide.
fn reveal_forward(percent: f64) -> f64 {
    (percent / FADE_IN_SPAN).clamp(0.0, 1.0)
}

/// Cross-fade projection used by the gallery: one visible slide at a time.
pub fn fade_class(carousel: &Carousel, index: usize) -> &'static str {
    if index == carousel.current() {
        "opacity-100 z-10"
    } else {
        "opacity-0 z-0"
    }
}

pub fn fade_css(carousel: &Carousel) -> String {
    format!("transition-duration: {}ms;", carousel.config().animation_ms)
}

/// Caption overlay hides while a slide change is animating.
pub fn caption_css(carousel: &Carousel) -> String {
    let opacity = if carousel.is_transitioning() { 0 } else { 1 };
    format!(
        "opacity: {opacity}; transition-duration: {}ms;",
        carousel.config().animation_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselAction, CarouselConfig};

    fn dragging(len: usize, offset: f64, reduced_motion: bool) -> Carousel {
        let mut c = Carousel::new(len, CarouselConfig::hero(reduced_motion));
        c.apply(CarouselAction::DragStart { x: 1000.0 });
        c.apply(CarouselAction::DragMove {
            x: 1000.0 - offset,
            container_width: 1000.0,
        });
        c
    }

    #[test]
    fn idle_carousel_shows_only_current() {
        let c = Carousel::new(3, CarouselConfig::hero(false));
        let current = slide_style(&c, 0);
        assert_eq!(current.opacity, 1.0);
        assert_eq!(current.z_index, 10);
        assert_eq!(current.translate_percent, 0.0);
        assert!(current.transition.is_some());
        for i in 1..3 {
            let hidden = slide_style(&c, i);
            assert_eq!(hidden.opacity, 0.0);
            assert_eq!(hidden.z_index, 0);
        }
    }

    #[test]
    fn forward_drag_reveals_next_only() {
        let c = dragging(4, 250.0, false);
        let current = slide_style(&c, 0);
        assert_eq!(current.translate_percent, -25.0);
        assert_eq!(current.transition, None);

        let next = slide_style(&c, 1);
        assert_eq!(next.z_index, 5);
        assert_eq!(next.opacity, 25.0 / 30.0);
        assert_eq!(next.translate_percent, 62.5);

        let prev = slide_style(&c, 3);
        assert_eq!(prev.opacity, 0.0);
        assert_eq!(prev.z_index, 0);
        assert_eq!(slide_style(&c, 2).opacity, 0.0);
    }

    #[test]
    fn backward_drag_reveals_previous() {
        let c = dragging(4, -500.0, false);
        let prev = slide_style(&c, 3);
        assert_eq!(prev.opacity, 1.0);
        assert_eq!(prev.translate_percent, -75.0);
        assert_eq!(slide_style(&c, 1).opacity, 0.0);
    }

    #[test]
    fn reduced_motion_parks_neighbours_at_full_offset() {
        let mut c = dragging(3, 300.0, true);
        assert_eq!(slide_style(&c, 1).translate_percent, 100.0);
        c.apply(CarouselAction::DragEnd);
        // now transitioning on slide 1; slide 2 is next, slide 0 previous
        let next = slide_style(&c, 2);
        assert_eq!(next.translate_percent, 100.0);
        assert_eq!(next.opacity, 1.0);
        assert_eq!(
            next.transition.as_deref(),
            Some("transform 400ms ease, opacity 400ms ease")
        );
    }

    #[test]
    fn single_slide_has_no_neighbour_styles() {
        let c = dragging(1, 300.0, false);
        let only = slide_style(&c, 0);
        assert_eq!(only.z_index, 10);
        assert_eq!(only.opacity, 1.0);
    }

    #[test]
    fn css_serialisation() {
        let style = SlideStyle {
            translate_percent: -12.5,
            opacity: 1.0,
            z_index: 10,
            transition: None,
        };
        assert_eq!(
            style.to_css(),
            "position: absolute; inset: 0; transform: translateX(-12.5%); opacity: 1; z-index: 10; transition: none;"
        );
    }

    #[test]
    fn fade_and_caption_follow_transition() {
        let mut c = Carousel::new(3, CarouselConfig::gallery(false));
        assert_eq!(fade_class(&c, 0), "opacity-100 z-10");
        assert_eq!(caption_css(&c), "opacity: 1; transition-duration: 500ms;");
        c.apply(CarouselAction::Select(2));
        assert_eq!(fade_class(&c, 0), "opacity-0 z-0");
        assert_eq!(fade_class(&c, 2), "opacity-100 z-10");
        assert_eq!(caption_css(&c), "opacity: 0; transition-duration: 500ms;");
        assert_eq!(fade_css(&c), "transition-duration: 500ms;");
    }
}
