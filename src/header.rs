use std::rc::Rc;

use gloo::console::warn;
use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::content::NavItem;

/// Past this the header gets its solid background.
pub const SCROLLED_AFTER_PX: f64 = 100.0;
/// Scrolling down beyond this slides the header out.
pub const HIDE_AFTER_PX: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    pub scroll_y: f64,
    pub last_scroll_y: f64,
    pub is_scrolled: bool,
    pub is_visible: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            last_scroll_y: 0.0,
            is_scrolled: false,
            is_visible: true,
        }
    }
}

impl HeaderState {
    pub fn at(scroll_y: f64) -> Self {
        let mut state = Self::default();
        state.on_scroll(scroll_y);
        state
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.last_scroll_y = self.scroll_y;
        self.scroll_y = scroll_y;
        self.is_scrolled = scroll_y > SCROLLED_AFTER_PX;

        if scroll_y <= HIDE_AFTER_PX || scroll_y < self.last_scroll_y {
            self.is_visible = true;
        } else if scroll_y > self.last_scroll_y {
            self.is_visible = false;
        }
    }
}

impl Reducible for HeaderState {
    type Action = f64;

    fn reduce(self: Rc<Self>, scroll_y: f64) -> Rc<Self> {
        let mut next = *self;
        next.on_scroll(scroll_y);
        Rc::new(next)
    }
}

fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Body scroll lock for the full-screen menu.
fn lock_page_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("header: could not toggle page scroll lock", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav: Vec<NavItem>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let state = use_reducer(|| HeaderState::at(scroll_y()));
    let menu_open = use_state(|| false);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "scroll", move |_| dispatcher.dispatch(scroll_y()))
            });
            move || drop(listener)
        });
    }

    use_effect_with(*menu_open, |open| {
        lock_page_scroll(*open);
        || lock_page_scroll(false)
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let bar = if state.is_scrolled {
        "bg-black/90 backdrop-blur-sm border-b border-white/10"
    } else {
        "bg-transparent"
    };
    let slide = if state.is_visible { "translate-y-0" } else { "-translate-y-full" };
    let open = *menu_open;

    html! {
      <header class={classes!("fixed", "top-0", "w-full", "z-50", "transition-all", "duration-300", bar, slide)}>
        <div class="max-w-[1300px] mx-auto px-4 py-5">
          <div class="flex justify-between items-center">
            <button onclick={toggle_menu} class="md:hidden text-white" aria-label="Menu">
              <div class="w-8 h-6 relative">
                <span class={classes!("absolute", "left-0", "w-full", "h-0.5", "bg-white", "transition-transform",
                    if open { "rotate-45 top-3" } else { "top-0" })}></span>
                <span class={classes!("absolute", "left-0", "w-full", "h-0.5", "bg-white", "transition-opacity",
                    if open { "opacity-0" } else { "top-3" })}></span>
                <span class={classes!("absolute", "left-0", "w-full", "h-0.5", "bg-white", "transition-transform",
                    if open { "-rotate-45 top-3" } else { "top-6" })}></span>
              </div>
            </button>

            <div class="flex-1 md:flex-none md:w-1/4 flex justify-center md:justify-start">
              <a href="/">
                <img src="/images/logo.png" alt="Riad Emberiza Sahari" width="264" height="37" class="h-8 w-auto" />
              </a>
            </div>

            <nav class="hidden md:flex flex-1 justify-center space-x-8">
              { for props.nav.iter().map(|item| html! {
                  <a key={item.name.clone()} href={item.href.clone()}
                     class="text-white hover:text-[#d1a163] transition-colors font-jost font-medium text-lg relative group">
                    { &item.name }
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-[#d1a163] transition-all duration-300 group-hover:w-full"></span>
                  </a>
              }) }
            </nav>

            <div class="flex items-center space-x-6 md:w-1/4 justify-end">
              <a href="/reservation" class="hidden md:flex items-center bg-[#d1a163] text-white px-6 py-3 hover:bg-amber-700 transition-colors font-jost">
                { "Réservation" }
              </a>
            </div>
          </div>

          <div class={classes!("md:hidden", "fixed", "top-0", "left-0", "w-full", "h-full", "bg-black/90",
              "backdrop-blur-sm", "transition-opacity", "duration-300",
              if open { "opacity-100 pointer-events-auto" } else { "opacity-0 pointer-events-none" })}>
            <div class="container mx-auto px-4 h-full flex items-center justify-center">
              <nav class="text-center">
                <ul class="space-y-8">
                  { for props.nav.iter().map(|item| html! {
                      <li key={item.name.clone()} class="relative group">
                        <a href={item.href.clone()} onclick={close_menu.clone()}
                           class="text-4xl text-white hover:text-[#d1a163] font-jost transition-colors">
                          { &item.name }
                        </a>
                      </li>
                  }) }
                  <li class="relative group">
                    <a href="/reservation" onclick={close_menu.clone()}
                       class="inline-block mt-8 text-lg text-[#d1a163] transition-colors hover:text-amber-300">
                      { "Réservation" }
                    </a>
                  </li>
                </ul>
              </nav>
            </div>
          </div>
        </div>
      </header>
    }
}
