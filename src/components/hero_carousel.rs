use gloo::console::{log, warn};
use yew::prelude::*;

use super::{element_width, touch_x};
use crate::booking::{BookingForm, BookingRequest};
use crate::carousel::{use_carousel, CarouselAction, CarouselConfig};
use crate::content::Slide;
use crate::projector::{caption_css, slide_style};

const DEFAULT_TITLE: &str = "Riad Emberiza Sahari";
const DEFAULT_DESCRIPTION: &str =
    "Experience authentic Moroccan hospitality in our beautiful riad in the heart of the medina.";
/// The booking bar spans the screen on small layouts when motion is reduced.
const REDUCED_MOTION_BOOKING_WIDTH: &str = "sm:max-w-full md:max-w-[90%]";

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub reduced_motion: bool,
}

/// Full-screen hero: swipeable slides, caption overlay and the booking bar.
#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let carousel = use_carousel(props.slides.len(), CarouselConfig::hero(props.reduced_motion));
    let container = use_node_ref();

    let drag_start = {
        let dispatcher = carousel.dispatcher();
        move |x: f64| dispatcher.dispatch(CarouselAction::DragStart { x })
    };
    let drag_move = {
        let dispatcher = carousel.dispatcher();
        let container = container.clone();
        move |x: f64| {
            dispatcher.dispatch(CarouselAction::DragMove {
                x,
                container_width: element_width(&container),
            })
        }
    };
    let drag_end = {
        let dispatcher = carousel.dispatcher();
        move || dispatcher.dispatch(CarouselAction::DragEnd)
    };

    let onmousedown = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drag_start(f64::from(e.client_x()));
        })
    };
    let onmousemove = {
        let drag_move = drag_move.clone();
        let dragging = carousel.is_dragging();
        Callback::from(move |e: MouseEvent| {
            if dragging {
                e.prevent_default();
                drag_move(f64::from(e.client_x()));
            }
        })
    };
    let onmouseup = {
        let drag_end = drag_end.clone();
        Callback::from(move |_: MouseEvent| drag_end())
    };
    let onmouseleave = {
        let drag_end = drag_end.clone();
        Callback::from(move |_: MouseEvent| drag_end())
    };
    let ontouchstart = Callback::from(move |e: TouchEvent| {
        if let Some(x) = touch_x(&e) {
            drag_start(x);
        }
    });
    let ontouchmove = {
        let dragging = carousel.is_dragging();
        Callback::from(move |e: TouchEvent| {
            // touch listeners are passive; `touch-pan-y` keeps the page from panning sideways
            if let Some(x) = touch_x(&e).filter(|_| dragging) {
                drag_move(x);
            }
        })
    };
    let ontouchend = {
        let drag_end = drag_end.clone();
        Callback::from(move |_: TouchEvent| drag_end())
    };
    let ontouchcancel = Callback::from(move |_: TouchEvent| drag_end());

    // Stable across renders so drag frames do not rerender the form.
    let on_booking = use_callback((), |request: BookingRequest, _| {
        match serde_json::to_string(&request) {
            Ok(json) => log!("booking request", json),
            Err(e) => warn!(format!("booking: could not serialise request: {e}")),
        }
    });

    let (title, description) = caption_text(&props.slides, carousel.current());
    let cursor = if carousel.is_dragging() { "cursor-grabbing" } else { "cursor-grab" };

    html! {
      <section class="relative h-screen w-full overflow-hidden bg-black">
        <div ref={container}
             class={classes!("absolute", "inset-0", "select-none", "touch-pan-y", cursor)}
             {onmousedown} {onmousemove} {onmouseup} {onmouseleave}
             {ontouchstart} {ontouchmove} {ontouchend} {ontouchcancel}>
          { for props.slides.iter().enumerate().map(|(i, slide)| html! {
              <div key={i} style={slide_style(&carousel, i).to_css()}>
                <img src={slide.src.clone()} alt={slide.alt.clone()} draggable="false"
                     class="w-full h-full object-cover pointer-events-none" />
                <div class="absolute inset-0 bg-black/40 backdrop-blur-[2px]"></div>
              </div>
          }) }
        </div>

        <div class="absolute inset-0 z-20 flex flex-col items-center justify-center text-center px-4 pointer-events-none transition-opacity"
             style={caption_css(&carousel)}>
          <StarRating stars={5} />
          <h1 class="text-white text-4xl md:text-6xl lg:text-7xl font-gilda mb-6">{ title }</h1>
          <p class="text-white/90 text-sm md:text-lg tracking-widest max-w-3xl font-jost mb-6">{ description }</p>
          <a href="#about"
             class="pointer-events-auto bg-[#d1a163] hover:bg-amber-700 text-white px-4 md:px-6 py-2 md:py-3 text-base md:text-lg font-jost font-medium transition-colors">
            { "Découvrir" }
          </a>
        </div>

        <BookingForm class={classes!(booking_class(props.reduced_motion))} on_submit={on_booking} />
      </section>
    }
}

/// Caption for the slide at `index`, falling back to the riad's name and blurb.
fn caption_text(slides: &[Slide], index: usize) -> (String, String) {
    let slide = slides.get(index);
    let title = slide
        .and_then(|s| s.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let description = slide
        .and_then(|s| s.description.clone())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    (title, description)
}

fn booking_class(reduced_motion: bool) -> Option<&'static str> {
    reduced_motion.then_some(REDUCED_MOTION_BOOKING_WIDTH)
}

#[derive(Properties, PartialEq)]
struct StarRatingProps {
    stars: u8,
}

#[function_component(StarRating)]
fn star_rating(props: &StarRatingProps) -> Html {
    html! {
      <div class="flex justify-center gap-1 mb-4 text-[#d1a163]" aria-label={format!("{} étoiles", props.stars)}>
        { for (0..props.stars).map(|_| html! { <span>{ "★" }</span> }) }
      </div>
    }
}
