//! DOM helpers shared by the browser tests.

#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlInputElement, MouseEvent, MouseEventInit};

/// Fresh `<div>` attached to the body to mount a component into.
pub fn mount_root() -> Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document should exist in the browser");
    let root = document
        .create_element("div")
        .expect("div should be creatable");
    document
        .body()
        .expect("body should exist")
        .append_child(&root)
        .expect("root should attach");
    root
}

/// Lets the scheduler flush pending renders and effects.
pub async fn rendered() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

pub async fn wait_ms(ms: u64) {
    yew::platform::time::sleep(Duration::from_millis(ms)).await;
}

pub fn query(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("selector should be valid")
        .unwrap_or_else(|| panic!("{selector} should be rendered"))
}

pub fn input(root: &Element, selector: &str) -> HtmlInputElement {
    query(root, selector)
        .dyn_into::<HtmlInputElement>()
        .expect("element should be an <input>")
}

/// Dispatches a bubbling, cancelable event of `kind` on `target`.
pub fn fire(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("event should be creatable");
    target.dispatch_event(&event).expect("event should dispatch");
}

/// Types `value` into the input and commits it the way a blur would.
pub fn change(root: &Element, selector: &str, value: &str) -> HtmlInputElement {
    let field = input(root, selector);
    field.set_value(value);
    fire(&field, "change");
    field
}

pub fn mouse(target: &Element, kind: &str, client_x: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    let event =
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("event should be creatable");
    target.dispatch_event(&event).expect("event should dispatch");
}

pub fn text(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}
