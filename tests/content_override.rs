#![cfg(target_arch = "wasm32")]

use riad_emberiza::content::{self, embedded_json, SiteContent};
use riad_emberiza::error::ContentError;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn inject_script(id: &str, text: &str) -> Element {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document should exist in the browser");
    let script = document
        .create_element("script")
        .expect("script element should be creatable");
    script.set_id(id);
    script
        .set_attribute("type", "application/json")
        .expect("type attribute should be settable");
    script.set_text_content(Some(text));
    document
        .body()
        .expect("body should exist")
        .append_child(&script)
        .expect("script should attach");
    script
}

#[wasm_bindgen_test]
fn missing_script_reads_as_no_override() {
    assert!(matches!(embedded_json("no-such-script"), Ok(None)));
}

#[wasm_bindgen_test]
fn blank_script_reads_as_no_override() {
    let script = inject_script("blank-content", "   \n ");
    assert!(matches!(embedded_json("blank-content"), Ok(None)));
    script.remove();
}

#[wasm_bindgen_test]
fn embedded_script_text_parses_as_content() {
    let script = inject_script(
        "test-content",
        r#"{ "nav": [{ "name": "Accueil", "href": "/" }], "heroSlides": [{ "src": "/a.jpg", "alt": "A" }] }"#,
    );
    let json = embedded_json("test-content")
        .expect("document should be reachable")
        .expect("script text should be found");
    let parsed = SiteContent::from_json(&json).expect("override should parse");
    assert_eq!(parsed.hero_slides.len(), 1);
    assert!(parsed.rooms.is_empty());
    script.remove();
}

#[wasm_bindgen_test]
fn load_prefers_override_and_falls_back_when_invalid() {
    let bundled = content::load();
    assert!(!bundled.rooms.is_empty());

    let script = inject_script(
        content::CONTENT_SCRIPT_ID,
        r#"{ "gallery": [{ "src": "/g.jpg", "alt": "G", "title": "Override" }] }"#,
    );
    let overridden = content::load();
    assert_eq!(overridden.gallery.len(), 1);
    assert_eq!(overridden.gallery[0].title.as_deref(), Some("Override"));
    assert!(overridden.rooms.is_empty());

    script.set_text_content(Some("{ not json"));
    assert!(matches!(
        embedded_json(content::CONTENT_SCRIPT_ID)
            .map(|json| json.map(|j| SiteContent::from_json(&j))),
        Ok(Some(Err(ContentError::Parse(_))))
    ));
    assert_eq!(content::load(), bundled);
    script.remove();
}
