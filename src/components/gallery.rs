use yew::prelude::*;

use super::{element_width, touch_x};
use crate::carousel::{use_carousel, CarouselAction, CarouselConfig};
use crate::content::Slide;
use crate::projector::{fade_class, fade_css};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub slides: Vec<Slide>,
    /// Shorter fades, and no thumbnail track on small screens.
    #[prop_or_default]
    pub mobile_optimized: bool,
    #[prop_or_default]
    pub is_mobile: bool,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let carousel = use_carousel(props.slides.len(), CarouselConfig::gallery(props.mobile_optimized));
    let frame = use_node_ref();

    if carousel.is_empty() {
        return html! {};
    }

    let dispatch = |action: CarouselAction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let ontouchstart = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                dispatcher.dispatch(CarouselAction::DragStart { x });
            }
        })
    };
    let ontouchmove = {
        let dispatcher = carousel.dispatcher();
        let frame = frame.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                dispatcher.dispatch(CarouselAction::DragMove {
                    x,
                    container_width: element_width(&frame),
                });
            }
        })
    };
    let ontouchend = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: TouchEvent| dispatcher.dispatch(CarouselAction::DragEnd))
    };

    let show_thumbnails = !(props.mobile_optimized && props.is_mobile);
    let fade = fade_css(&carousel);
    let arrow = "absolute top-1/2 -translate-y-1/2 z-20 w-12 h-12 flex items-center justify-center \
                 bg-black/40 text-white text-2xl hover:bg-[#d1a163] transition-colors";

    html! {
      <section id="gallery" class="bg-[#0e0e0e] py-12 md:py-24">
        <div class="max-w-[1300px] mx-auto px-4">
          <div class="mb-8 md:mb-12 text-center font-jost">
            <span class="text-[#d1a163] text-base md:text-lg tracking-wider">{ "DÉCOUVREZ" }</span>
            <h2 class="text-2xl md:text-4xl lg:text-5xl text-white mt-2 font-medium">{ "Notre Galerie" }</h2>
          </div>
          <div ref={frame} class="relative h-[60vh] overflow-hidden touch-pan-y"
               {ontouchstart} {ontouchmove} {ontouchend}>
            { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                <div key={i} style={fade.clone()}
                     class={classes!("absolute", "inset-0", "transition-opacity", "ease-in-out", fade_class(&carousel, i))}>
                  <img src={slide.src.clone()} alt={slide.alt.clone()} draggable="false"
                       class="w-full h-full object-cover" />
                  { caption(slide) }
                </div>
            }) }

            <button class={classes!(arrow, "left-4")} aria-label="Image précédente"
                    onclick={dispatch(CarouselAction::Prev)}>{ "‹" }</button>
            <button class={classes!(arrow, "right-4")} aria-label="Image suivante"
                    onclick={dispatch(CarouselAction::Next)}>{ "›" }</button>

            <div class="absolute bottom-4 left-0 right-0 z-20 flex justify-center gap-2">
              { for (0..carousel.len()).map(|i| html! {
                  <button key={i} aria-label={format!("Image {}", i + 1)}
                          onclick={dispatch(CarouselAction::Select(i))}
                          class={classes!("h-2", "rounded-full", "transition-all",
                              if i == carousel.current() { "w-8 bg-[#d1a163]" } else { "w-2 bg-white/60" })}>
                  </button>
              }) }
            </div>
          </div>

          if show_thumbnails {
            <div class="mt-4 flex gap-3 overflow-x-auto">
              { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                  <button key={i} onclick={dispatch(CarouselAction::Select(i))}
                          class={classes!("shrink-0", "w-24", "h-16", "border-2", "transition-opacity",
                              if i == carousel.current() { "border-[#d1a163] opacity-100" } else { "border-transparent opacity-60" })}>
                    <img src={slide.src.clone()} alt={slide.alt.clone()} class="w-full h-full object-cover" />
                  </button>
              }) }
            </div>
          }
        </div>
      </section>
    }
}

fn caption(slide: &Slide) -> Html {
    if slide.title.is_none() && slide.description.is_none() {
        return html! {};
    }
    html! {
      <div class="absolute bottom-0 left-0 right-0 p-6 md:p-10 bg-gradient-to-t from-black/80 to-transparent">
        if let Some(title) = &slide.title {
          <h3 class="text-white text-2xl md:text-3xl font-gilda mb-2">{ title }</h3>
        }
        if let Some(description) = &slide.description {
          <p class="text-white/80 font-jost">{ description }</p>
        }
      </div>
    }
}
