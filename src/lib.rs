//! Landing page for the Riad Emberiza Sahari, Marrakech.
//!
//! Client-side Yew app built with Trunk. Page sections live in
//! [`components`]; the interaction logic they share (slides, gestures,
//! the carousel state machine, header visibility, the booking draft) sits
//! in plain modules that run without a browser.

pub mod booking;
pub mod carousel;
pub mod components;
pub mod content;
pub mod error;
pub mod gesture;
pub mod header;
pub mod projector;
pub mod slides;
pub mod viewport;

use yew::prelude::*;

use components::{AboutSection, Footer, Gallery, HeroCarousel, RoomStrip, ServicesSection};
use header::Header;
use viewport::use_is_mobile;

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| content::load());
    let is_mobile = use_is_mobile();

    html! {
      <div class="min-h-screen bg-[#0e0e0e]">
        <Header nav={content.nav.clone()} />
        <main>
          <HeroCarousel slides={content.hero_slides.clone()} reduced_motion={is_mobile} />
          <AboutSection about={content.about.clone()} />
          <RoomStrip rooms={content.rooms.clone()} />
          <Gallery slides={content.gallery.clone()} mobile_optimized={true} {is_mobile} />
          <ServicesSection services={content.services.clone()} />
        </main>
        <Footer contact={content.contact.clone()} />
      </div>
    }
}
