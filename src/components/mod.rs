mod about;
mod footer;
mod gallery;
mod hero_carousel;
mod rooms;
mod services;

pub use about::{AboutSection, AboutSectionProps};
pub use footer::{Footer, FooterProps};
pub use gallery::{Gallery, GalleryProps};
pub use hero_carousel::{HeroCarousel, HeroCarouselProps};
pub use rooms::{RoomCard, RoomCardProps, RoomStrip, RoomStripProps};
pub use services::{ServiceCard, ServiceCardProps, ServicesSection, ServicesSectionProps};

use web_sys::{HtmlElement, TouchEvent};
use yew::NodeRef;

/// Horizontal position of the first active touch.
pub(crate) fn touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|t| f64::from(t.client_x()))
}

/// Rendered width of the element behind `node`, 0 when unmounted.
pub(crate) fn element_width(node: &NodeRef) -> f64 {
    node.cast::<HtmlElement>()
        .map(|el| f64::from(el.offset_width()))
        .unwrap_or(0.0)
}
