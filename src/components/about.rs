use yew::prelude::*;

use crate::content::About;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub about: About,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let about = &props.about;

    html! {
      <section id="about" class="bg-[#0e0e0e] py-20 md:py-28">
        <div class="max-w-[1300px] mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
          <div>
            <p class="text-[#d1a163] uppercase tracking-[0.3em] text-sm font-jost mb-4">{ &about.subtitle }</p>
            <h2 class="text-white text-3xl md:text-5xl font-gilda leading-tight mb-6">{ &about.title }</h2>
            <p class="text-[#adaaa4] font-jost leading-relaxed mb-8">{ &about.body }</p>
            <a href={about.cta_href.clone()}
               class="inline-block border border-[#d1a163] text-white px-8 py-3 hover:bg-[#d1a163] transition-colors font-jost">
              { &about.cta_label }
            </a>
          </div>
          <div class="grid grid-cols-2 gap-4">
            { for about.images.iter().enumerate().map(|(i, image)| html! {
                <img key={i} src={image.src.clone()} alt={image.alt.clone()} loading="lazy"
                     class={classes!("w-full", "h-80", "object-cover", (i % 2 == 1).then_some("mt-12"))} />
            }) }
          </div>
        </div>
      </section>
    }
}
