//! Browser checks against the fully mounted page.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use std::sync::Once;

use optimized_landing::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

static MOUNT: Once = Once::new();

/// Mount the page once; every test inspects the same document.
fn page() -> Document {
    MOUNT.call_once(|| leptos::mount::mount_to_body(App));
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn all(document: &Document, selector: &str) -> Vec<Element> {
    let list = document.query_selector_all(selector).expect("valid selector");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html_element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("{selector} is rendered"))
}

fn menu_toggle(document: &Document) -> HtmlElement {
    html_element(document, "header button[aria-expanded]")
}

fn expanded(document: &Document) -> Option<String> {
    menu_toggle(document).get_attribute("aria-expanded")
}

fn menu_panel_open(document: &Document) -> bool {
    document.get_element_by_id("mobile-menu").is_some()
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    web_sys::window()
        .expect("window")
        .dispatch_event(&escape)
        .expect("dispatch");
}

#[wasm_bindgen_test]
fn page_has_a_single_h1_about_landing_pages() {
    let document = page();
    let headings = all(&document, "h1");
    assert_eq!(headings.len(), 1);
    let text = headings[0].text_content().unwrap_or_default();
    assert!(text.contains("Landing Pages"), "{text}");
}

#[wasm_bindgen_test]
fn skip_link_is_the_first_focusable_element() {
    let document = page();
    // the test runner owns part of <body>; only look at the mounted page
    let first = all(&document, "a[href], button")
        .into_iter()
        .find(|el| {
            el.closest("#skip-nav, header, main, footer")
                .ok()
                .flatten()
                .is_some()
        })
        .expect("focusable element");
    assert!(first.closest("#skip-nav").ok().flatten().is_some());
    assert_eq!(first.get_attribute("href").as_deref(), Some("#main-content"));
    assert!(document.get_element_by_id("main-content").is_some());
}

#[wasm_bindgen_test]
fn every_button_on_the_page_has_a_name() {
    let document = page();
    let buttons = all(&document, "header button, main button, footer button");
    // hero, features, cta and footer each add their own
    assert!(buttons.len() >= 8, "only {} buttons", buttons.len());
    for button in buttons {
        let label = button.get_attribute("aria-label").unwrap_or_default();
        let text = button.text_content().unwrap_or_default();
        assert!(
            !label.trim().is_empty() || !text.trim().is_empty(),
            "unnamed button: {}",
            button.outer_html()
        );
    }
}

#[wasm_bindgen_test]
fn every_nav_anchor_lands_on_a_section() {
    let document = page();
    for link in all(&document, "header .desktop-nav a[href^='#']") {
        let href = link.get_attribute("href").unwrap_or_default();
        let id = href.trim_start_matches('#');
        assert!(document.get_element_by_id(id).is_some(), "{href} points nowhere");
    }
}

#[wasm_bindgen_test]
async fn menu_toggle_escape_and_link_choice_all_close_the_menu() {
    let document = page();
    assert_eq!(expanded(&document).as_deref(), Some("false"));
    assert!(!menu_panel_open(&document));

    // click twice: open, then closed again
    menu_toggle(&document).click();
    leptos::task::tick().await;
    assert_eq!(expanded(&document).as_deref(), Some("true"));
    assert_eq!(
        menu_toggle(&document).get_attribute("aria-label").as_deref(),
        Some("Close menu")
    );
    assert!(menu_panel_open(&document));
    menu_toggle(&document).click();
    leptos::task::tick().await;
    assert_eq!(expanded(&document).as_deref(), Some("false"));
    assert!(!menu_panel_open(&document));

    // Escape
    menu_toggle(&document).click();
    leptos::task::tick().await;
    assert_eq!(expanded(&document).as_deref(), Some("true"));
    press_escape();
    leptos::task::tick().await;
    assert_eq!(expanded(&document).as_deref(), Some("false"));
    assert!(!menu_panel_open(&document));

    // choosing a destination
    menu_toggle(&document).click();
    leptos::task::tick().await;
    let controls = menu_toggle(&document).get_attribute("aria-controls");
    assert_eq!(controls.as_deref(), Some("mobile-menu"));
    html_element(&document, "#mobile-menu .mobile-nav-link").click();
    leptos::task::tick().await;
    assert_eq!(expanded(&document).as_deref(), Some("false"));
    assert!(!menu_panel_open(&document));
    assert!(menu_toggle(&document).get_attribute("aria-controls").is_none());
}
