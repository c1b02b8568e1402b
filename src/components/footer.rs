use gloo::console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::content::Contact;

const ACCOMMODATION_LINKS: [(&str, &str); 4] = [
    ("Suite Royale", "/rooms#suite-royale"),
    ("Chambre Deluxe", "/rooms#chambre-deluxe"),
    ("Suite Familiale", "/rooms#suite-familiale"),
    ("Suite avec Terrasse", "/rooms#suite-terrasse"),
];

const SERVICE_LINKS: [(&str, &str); 4] = [
    ("Restaurant", "/restaurant"),
    ("Spa & Hammam", "/spa"),
    ("Excursions", "/excursions"),
    ("Transferts", "/transfers"),
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("Pinterest", "https://pinterest.com"),
];

const LEGAL_LINKS: [(&str, &str); 4] = [
    ("Politique de confidentialité", "/privacy"),
    ("Conditions générales", "/terms"),
    ("Plan du site", "/sitemap"),
    ("Cookies", "/cookies"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact: Contact,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email_ref = use_node_ref();
    let year = use_memo((), |_| js_sys::Date::new_0().get_full_year());
    let contact = &props.contact;

    let on_newsletter = {
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                log!("newsletter signup", input.value());
                input.set_value("");
            }
        })
    };

    let link_column = |title: &str, links: &[(&str, &str)]| {
        html! {
          <div>
            <h4 class="text-white text-xl font-gilda mb-6">{ title.to_string() }</h4>
            <ul class="space-y-3">
              { for links.iter().map(|(label, href)| html! {
                  <li><a href={href.to_string()} class="text-[#adaaa4] hover:text-[#d1a163] transition-colors font-jost">{ label.to_string() }</a></li>
              }) }
            </ul>
          </div>
        }
    };

    html! {
      <footer class="bg-[#0e0e0e] border-t border-white/10 pt-20 pb-8">
        <div class="max-w-[1300px] mx-auto px-4">
          <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
            <div>
              <img src="/images/logo.png" alt="Riad Emberiza Sahari" class="h-8 w-auto mb-6" />
              <p class="text-[#adaaa4] font-jost leading-relaxed mb-6">
                { "Un havre de paix au cœur de la médina de Marrakech." }
              </p>
              <form onsubmit={on_newsletter} class="flex">
                <input ref={email_ref} type="email" required={true} placeholder="Votre e-mail"
                       class="flex-1 min-w-0 h-12 px-4 bg-[#161616] border border-[#2e2e2e] text-white font-jost" />
                <button type="submit" class="h-12 px-5 bg-[#d1a163] text-white font-jost hover:brightness-110">
                  { "OK" }
                </button>
              </form>
              <div class="flex gap-4 mt-6">
                { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                    <a href={href.to_string()} target="_blank" rel="noreferrer" aria-label={name.to_string()}
                       class="text-white/60 hover:text-[#d1a163] transition-colors text-sm font-jost">
                      { name.to_string() }
                    </a>
                }) }
              </div>
            </div>

            { link_column("Hébergement", &ACCOMMODATION_LINKS) }
            { link_column("Services", &SERVICE_LINKS) }

            <div>
              <h4 class="text-white text-xl font-gilda mb-6">{ "Contact" }</h4>
              <address class="not-italic text-[#adaaa4] font-jost space-y-3">
                <p>{ &contact.address }</p>
                if let Some(note) = &contact.address_note {
                  <p class="text-sm">{ note }</p>
                }
                <p><a href={format!("tel:{}", contact.phone.replace(' ', ""))} class="hover:text-[#d1a163]">{ &contact.phone }</a></p>
                <p><a href={format!("mailto:{}", contact.email)} class="hover:text-[#d1a163]">{ &contact.email }</a></p>
              </address>
            </div>
          </div>

          <div class="border-t border-white/10 pt-8 flex flex-col md:flex-row justify-between items-center gap-4 font-jost">
            <p class="text-[#adaaa4] text-sm">
              { format!("© {} Riad Emberiza Sahari. Tous droits réservés.", *year) }
            </p>
            <nav class="flex flex-wrap justify-center gap-6">
              { for LEGAL_LINKS.iter().map(|(label, href)| html! {
                  <a href={href.to_string()} class="text-white/50 hover:text-white/80 text-xs transition-colors">{ label.to_string() }</a>
              }) }
            </nav>
          </div>
        </div>
      </footer>
    }
}
