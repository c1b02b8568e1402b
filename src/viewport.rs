use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

/// Widths below this get the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

fn inner_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Tracks whether the window is below the mobile breakpoint.
///
/// Only flips state when the answer changes, so resizing within one layout
/// does not rerender the page.
#[hook]
pub fn use_is_mobile() -> bool {
    let is_mobile = use_state_eq(|| inner_width().is_some_and(is_mobile_width));

    {
        let is_mobile = is_mobile.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "resize", move |_| {
                    if let Some(width) = inner_width() {
                        is_mobile.set(is_mobile_width(width));
                    }
                })
            });
            move || drop(listener)
        });
    }

    *is_mobile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1440.0));
    }
}
