use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::touch_x;
use crate::content::Room;
use crate::gesture::{visible_index, ScrollDrag};

#[derive(Properties, PartialEq)]
pub struct RoomStripProps {
    pub rooms: Vec<Room>,
}

/// Horizontally scrolling room cards with drag-to-scroll and mobile dots.
#[function_component(RoomStrip)]
pub fn room_strip(props: &RoomStripProps) -> Html {
    let strip = use_node_ref();
    let drag = use_mut_ref(|| None::<ScrollDrag>);
    let visible = use_state_eq(|| 0usize);
    let count = props.rooms.len();

    let card_width = {
        let strip = strip.clone();
        move || {
            strip
                .cast::<Element>()
                .filter(|_| count > 0)
                .map(|el| f64::from(el.scroll_width()) / count as f64)
                .unwrap_or(0.0)
        }
    };

    let begin = {
        let strip = strip.clone();
        let drag = drag.clone();
        move |x: f64| {
            if let Some(el) = strip.cast::<Element>() {
                *drag.borrow_mut() = Some(ScrollDrag::begin(x, f64::from(el.scroll_left())));
            }
        }
    };
    let track = {
        let strip = strip.clone();
        let drag = drag.clone();
        move |x: f64| {
            let Some(active) = *drag.borrow() else {
                return false;
            };
            if let Some(el) = strip.cast::<Element>() {
                el.set_scroll_left(active.scroll_for(x).round() as i32);
            }
            true
        }
    };
    let release = {
        let drag = drag.clone();
        move || *drag.borrow_mut() = None
    };

    let onmousedown = {
        let begin = begin.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            begin(f64::from(e.client_x()));
        })
    };
    let onmousemove = {
        let track = track.clone();
        Callback::from(move |e: MouseEvent| {
            if track(f64::from(e.client_x())) {
                e.prevent_default();
            }
        })
    };
    let onmouseup = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let onmouseleave = {
        let release = release.clone();
        Callback::from(move |_: MouseEvent| release())
    };
    let ontouchstart = Callback::from(move |e: TouchEvent| {
        if let Some(x) = touch_x(&e) {
            begin(x);
        }
    });
    let ontouchmove = Callback::from(move |e: TouchEvent| {
        if let Some(x) = touch_x(&e) {
            track(x);
        }
    });
    let ontouchend = Callback::from(move |_: TouchEvent| release());

    let onscroll = {
        let strip = strip.clone();
        let visible = visible.clone();
        let card_width = card_width.clone();
        Callback::from(move |_: Event| {
            if let Some(el) = strip.cast::<Element>() {
                visible.set(visible_index(f64::from(el.scroll_left()), card_width(), count));
            }
        })
    };

    let go_to = |index: usize| {
        let strip = strip.clone();
        let card_width = card_width.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = strip.cast::<Element>() {
                let options = ScrollToOptions::new();
                options.set_left(index as f64 * card_width());
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    html! {
      <section id="rooms" class="bg-[#161616] py-20">
        <div class="max-w-[1300px] mx-auto px-4">
          <p class="text-[#d1a163] uppercase tracking-[0.3em] text-sm font-jost mb-4 text-center">{ "Hébergement" }</p>
          <h2 class="text-white text-3xl md:text-5xl font-gilda text-center mb-12">{ "Chambres & Suites" }</h2>

          <div ref={strip.clone()}
               class="flex overflow-x-auto snap-x snap-mandatory gap-6 cursor-grab active:cursor-grabbing select-none scrollbar-none touch-pan-y"
               {onscroll} {onmousedown} {onmousemove} {onmouseup} {onmouseleave}
               {ontouchstart} {ontouchmove} {ontouchend}>
            { for props.rooms.iter().map(|room| html! {
                <RoomCard key={room.id.clone()} room={room.clone()} />
            }) }
          </div>

          <div class="flex md:hidden justify-center gap-2 mt-6">
            { for (0..count).map(|i| html! {
                <button key={i} aria-label={format!("Chambre {}", i + 1)} onclick={go_to(i)}
                        class={classes!("h-2", "rounded-full", "transition-all",
                            if i == *visible { "w-8 bg-[#d1a163]" } else { "w-2 bg-white/40" })}>
                </button>
            }) }
          </div>

          <p class="md:hidden text-center text-white/50 text-sm font-jost mt-4">
            <span>{ "← Glissez pour voir plus →" }</span>
          </p>

          <div class="text-center mt-10">
            <a href="/rooms"
               class="inline-flex items-center gap-2 border border-[#d1a163] text-white px-8 py-3 hover:bg-[#d1a163] transition-colors font-jost">
              <span>{ "Voir toutes nos chambres" }</span><span aria-hidden="true">{ "→" }</span>
            </a>
          </div>
        </div>
      </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub room: Room,
}

#[function_component(RoomCard)]
pub fn room_card(props: &RoomCardProps) -> Html {
    let hovered = use_state(|| false);
    let room = &props.room;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
      <article class="relative shrink-0 w-full md:w-[calc(50%-12px)] lg:w-[calc(33.333%-16px)] snap-start group"
               {onmouseenter} {onmouseleave}>
        <div class="relative h-[420px] overflow-hidden">
          <img src={room.image.clone()} alt={room.name.clone()} draggable="false" loading="lazy"
               class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105" />
          <div class="absolute top-4 left-4 bg-[#d1a163] text-white px-4 py-2 font-jost">
            { &room.price_per_night }<span class="text-sm">{ " / nuit" }</span>
          </div>
        </div>
        <div class="pt-6">
          <h3 class="text-white text-2xl font-gilda mb-3">{ &room.name }</h3>
          <div class="flex gap-6 text-[#adaaa4] font-jost text-sm">
            <span>{ format!("{} adultes", room.adults) }</span>
            <span>{ format!("Taille: {}", room.size) }</span>
          </div>
          <a href={format!("/reservation?room={}", room.id)}
             class="block w-full mt-5 bg-[#d1a163] hover:bg-[#c09253] text-white py-3 text-center font-jost font-medium transition-colors">
            { "Réserver" }
          </a>
        </div>

        if *hovered && !room.equipment.is_empty() {
          <div class="absolute top-20 right-4 z-10 bg-black/90 border border-white/10 p-4 min-w-[200px]" role="tooltip">
            <p class="text-[#d1a163] text-xs uppercase tracking-widest mb-2 font-jost">{ "Équipements" }</p>
            <ul class="space-y-1">
              { for room.equipment.iter().map(|item| html! {
                  <li key={item.name.clone()} class="text-white text-sm font-jost">
                    <span class="mr-2">{ &item.icon }</span>{ &item.name }
                  </li>
              }) }
            </ul>
          </div>
        }
      </article>
    }
}
