use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::content::Service;

/// How long a tapped card stays lifted on touch screens.
const TOUCH_HOVER_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    pub services: Vec<Service>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    html! {
      <section id="services" class="bg-[#161616] py-20 md:py-28">
        <div class="max-w-[1300px] mx-auto px-4">
          <p class="text-[#d1a163] uppercase tracking-[0.3em] text-sm font-jost mb-4 text-center">{ "Nos services" }</p>
          <h2 class="text-white text-3xl md:text-5xl font-gilda text-center mb-14">{ "Une expérience authentique" }</h2>
          <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
            { for props.services.iter().map(|service| html! {
                <ServiceCard key={service.title.clone()} service={service.clone()} />
            }) }
          </div>
        </div>
      </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state(|| false);
    // Dropping the handle cancels the pending un-hover, including on unmount.
    let touch_timeout = use_mut_ref(|| None::<Timeout>);
    let service = &props.service;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let ontouchstart = {
        let hovered = hovered.clone();
        let touch_timeout = touch_timeout.clone();
        Callback::from(move |_: TouchEvent| {
            touch_timeout.borrow_mut().take();
            hovered.set(true);
        })
    };
    let ontouchend = {
        let hovered = hovered.clone();
        Callback::from(move |_: TouchEvent| {
            let hovered = hovered.clone();
            *touch_timeout.borrow_mut() =
                Some(Timeout::new(TOUCH_HOVER_MS, move || hovered.set(false)));
        })
    };

    let lifted = *hovered;

    html! {
      <article class="relative h-[380px] overflow-hidden group"
               {onmouseenter} {onmouseleave} {ontouchstart} {ontouchend}>
        <img src={service.image.clone()} alt={service.title.clone()} loading="lazy"
             class={classes!("absolute", "inset-0", "w-full", "h-full", "object-cover", "transition-transform", "duration-700",
                 lifted.then_some("scale-110"))} />
        <div class={classes!("absolute", "inset-0", "transition-colors", "duration-500",
             if lifted { "bg-black/75" } else { "bg-black/50" })}></div>

        <div class={classes!("relative", "h-full", "flex", "flex-col", "justify-end", "p-8", "transition-transform", "duration-500",
             if lifted { "-translate-y-4" } else { "translate-y-0" })}>
          <span class="text-4xl mb-4">{ &service.icon }</span>
          <h3 class="text-white text-2xl font-gilda mb-3">{ &service.title }</h3>
          <p class={classes!("text-white/80", "font-jost", "text-sm", "leading-relaxed", "transition-all", "duration-500",
               if lifted { "opacity-100 max-h-40" } else { "opacity-0 max-h-0" })}>
            { &service.description }
          </p>
          <a href={service.href.clone()}
             class="mt-4 text-[#d1a163] font-jost uppercase tracking-widest text-xs hover:text-white transition-colors">
            { &service.link_text }
          </a>
        </div>
      </article>
    }
}
