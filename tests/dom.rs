//! Browser tests for DOM wiring. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::mount::mount_to;
use leptos::prelude::Signal;
use pagekit::components::{contact, gallery, lightbox, nav, news};
use pagekit::config::messages;
use pagekit::models::{SubmitMode, Viewport};
use pagekit::utils::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) {
    let body = dom::document().unwrap().body().unwrap();
    body.set_inner_html(html);
    dom::set_scroll_lock(false);
}

/// Run a controller's setup inside a mounted view, as `App` does, so its
/// effects have an owner and an executor. Returns whether it activated.
fn mount(init: impl FnOnce() -> bool + 'static) -> bool {
    let host = dom::document()
        .unwrap()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    let active = Rc::new(Cell::new(false));
    let flag = active.clone();
    mount_to(host, move || flag.set(init())).forget();
    active.get()
}

/// Let scheduled effects and timers run.
async fn settle(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    dom::window().unwrap().dispatch_event(&event).unwrap();
}

fn click(id: &str) {
    dom::by_id::<HtmlElement>(id).unwrap().click();
}

fn transform(selector: &str) -> String {
    dom::query::<HtmlElement>(selector)
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap()
}

fn click_first(selector: &str) {
    dom::query::<HtmlElement>(selector).unwrap().click();
}

fn has_class(id: &str, class: &str) -> bool {
    dom::by_id::<Element>(id).unwrap().class_list().contains(class)
}

const NEWS: &str = r#"
    <div class="news-track" style="display: flex; gap: 20px">
        <article class="news-item" style="flex: none; width: 100px">A</article>
        <article class="news-item" style="flex: none; width: 100px">B</article>
        <article class="news-item" style="flex: none; width: 100px">C</article>
    </div>
    <button id="prevNewsSlide">prev</button>
    <button id="nextNewsSlide">next</button>
"#;

#[wasm_bindgen_test]
fn test_lookup_helpers() {
    fixture(r#"<ul id="list"><li class="x">1</li><li class="x">2</li></ul>"#);

    assert!(dom::by_id::<Element>("list").is_ok());
    assert!(dom::by_id::<Element>("missing").is_err());
    assert!(dom::by_id::<web_sys::HtmlFormElement>("list").is_err());
    assert_eq!(dom::query_all::<Element>(".x").len(), 2);
    assert!(dom::query_all::<Element>(".none").is_empty());
}

#[wasm_bindgen_test]
fn test_field_value_reads_inputs() {
    fixture(
        r#"
        <input id="name" value="Ada">
        <select id="inquiry-type"><option value="booking" selected>Booking</option></select>
        <textarea id="message">Hello</textarea>
        "#,
    );
    assert_eq!(dom::field_value("name"), "Ada");
    assert_eq!(dom::field_value("inquiry-type"), "booking");
    assert_eq!(dom::field_value("message"), "Hello");
    assert_eq!(dom::field_value("phone"), "");
}

#[wasm_bindgen_test]
fn test_scroll_lock_is_idempotent() {
    fixture("");
    dom::set_scroll_lock(true);
    dom::set_scroll_lock(true);
    assert!(dom::is_scroll_locked());
    dom::set_scroll_lock(false);
    dom::set_scroll_lock(false);
    assert!(!dom::is_scroll_locked());
}

#[wasm_bindgen_test]
fn test_computed_gap() {
    fixture(r#"<div id="track" style="display: flex; gap: 24px"></div>"#);
    let track = dom::by_id::<Element>("track").unwrap();
    assert_eq!(dom::computed_px(&track, "gap"), 24.0);
}

#[wasm_bindgen_test]
fn test_nav_toggle() {
    fixture(
        r##"
        <button id="navToggle">menu</button>
        <ul class="nav-menu"><li><a id="link" href="#about">About</a></li></ul>
        <section id="about">About</section>
        "##,
    );
    assert!(mount(nav::init_nav_toggle));

    let menu = dom::query::<Element>(".nav-menu").unwrap();
    click("navToggle");
    assert!(menu.class_list().contains("active"));
    click("navToggle");
    assert!(!menu.class_list().contains("active"));

    click("navToggle");
    click("link");
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_nav_toggle_without_markup() {
    fixture("<p>no nav here</p>");
    assert!(!mount(nav::init_nav_toggle));
}

#[wasm_bindgen_test]
fn test_news_clones_and_moves() {
    fixture(NEWS);
    assert!(mount(|| news::init(Signal::stored(Viewport::Desktop))));

    assert_eq!(dom::query_all::<Element>(".news-item").len(), 6);
    assert_eq!(transform(".news-track"), "translateX(0px)");

    click("nextNewsSlide");
    assert_eq!(transform(".news-track"), "translateX(-120px)");

    click("prevNewsSlide");
    assert_eq!(transform(".news-track"), "translateX(0px)");

    // Backwards from the first card goes through the copied block.
    click("prevNewsSlide");
    assert_eq!(transform(".news-track"), "translateX(-240px)");
}

#[wasm_bindgen_test]
fn test_news_without_cards_is_inert() {
    fixture(
        r#"
        <div class="news-track"></div>
        <button id="prevNewsSlide"></button>
        <button id="nextNewsSlide"></button>
        "#,
    );
    assert!(!mount(|| news::init(Signal::stored(Viewport::Mobile))));
    let track = dom::query::<Element>(".news-track").unwrap();
    assert_eq!(track.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn test_news_wraps_back_to_start() {
    fixture(NEWS);
    assert!(mount(|| news::init(Signal::stored(Viewport::Desktop))));

    click("nextNewsSlide");
    click("nextNewsSlide");
    click("nextNewsSlide");
    assert_eq!(transform(".news-track"), "translateX(-360px)");

    // Either transitionend or the backstop timer snaps back to the originals.
    settle(700).await;
    assert_eq!(transform(".news-track"), "translateX(0px)");

    click("nextNewsSlide");
    assert_eq!(transform(".news-track"), "translateX(-120px)");
}

const GALLERY: &str = r#"
    <div class="gallery-track">
        <div class="gallery-item" data-fullsize="/full/0.jpg"><img src="/thumb/0.jpg" alt="Zero"></div>
        <div class="gallery-item"><img src="/thumb/1.jpg" alt="One"></div>
        <div class="gallery-item" data-fullsize="/full/2.jpg"><img src="/thumb/2.jpg" alt="Two"></div>
        <div class="gallery-item"><img src="/thumb/3.jpg" alt="Three"></div>
        <div class="gallery-item"><img src="/thumb/4.jpg" alt="Four"></div>
        <div class="gallery-item"><img src="/thumb/5.jpg" alt="Five"></div>
        <div class="gallery-item"><img src="/thumb/6.jpg" alt="Six"></div>
        <div class="gallery-item"><img src="/thumb/7.jpg" alt="Seven"></div>
    </div>
    <button id="prevSlide">prev</button>
    <button id="nextSlide">next</button>
    <div id="lightbox" class="lightbox">
        <button id="lightboxClose">x</button>
        <button id="lightboxPrev">prev</button>
        <img id="lightboxImage" src="" alt="">
        <button id="lightboxNext">next</button>
    </div>
"#;

#[wasm_bindgen_test]
async fn test_gallery_moves_by_one_item() {
    fixture(GALLERY);
    assert!(mount(|| gallery::init(Signal::stored(Viewport::Desktop))));
    settle(10).await;

    click("nextSlide");
    settle(10).await;
    assert_eq!(transform(".gallery-track"), "translateX(-25%)");

    // Back from the start wraps to the last full view.
    click("prevSlide");
    click("prevSlide");
    settle(10).await;
    assert_eq!(transform(".gallery-track"), "translateX(-100%)");
}

#[wasm_bindgen_test]
async fn test_lightbox_locks_scroll_while_open() {
    fixture(GALLERY);
    assert!(mount(lightbox::init));
    settle(10).await;
    assert!(!has_class("lightbox", "active"));
    assert!(!dom::is_scroll_locked());

    click_first(".gallery-item");
    settle(10).await;
    assert!(has_class("lightbox", "active"));
    assert!(dom::is_scroll_locked());
    let image = dom::by_id::<HtmlImageElement>("lightboxImage").unwrap();
    assert!(image.src().ends_with("/full/0.jpg"));
    assert_eq!(image.alt(), "Zero");

    // Items without data-fullsize fall back to the thumbnail.
    click("lightboxNext");
    settle(10).await;
    assert!(image.src().ends_with("/thumb/1.jpg"));
    press("ArrowLeft");
    press("ArrowLeft");
    settle(10).await;
    assert_eq!(image.alt(), "Seven");

    click("lightboxClose");
    click("lightboxClose");
    settle(10).await;
    assert!(!has_class("lightbox", "active"));
    assert!(!dom::is_scroll_locked());

    // Keys do nothing while closed.
    press("Escape");
    press("ArrowRight");
    settle(10).await;
    assert!(!has_class("lightbox", "active"));
    assert!(!dom::is_scroll_locked());
    assert_eq!(image.alt(), "Seven");

    click_first(".gallery-item");
    settle(10).await;
    assert!(dom::is_scroll_locked());
    press("Escape");
    settle(10).await;
    assert!(!has_class("lightbox", "active"));
    assert!(!dom::is_scroll_locked());
}

#[wasm_bindgen_test]
async fn test_simulated_contact_submission() {
    fixture(
        r#"
        <form id="contactForm">
            <input id="name" name="name">
            <input id="email" name="email" value="ada@example.com">
            <input id="phone" name="phone">
            <select id="inquiry-type" name="inquiry_type"><option value="general">General</option></select>
            <textarea id="message" name="message">Hello</textarea>
        </form>
        <div id="formMessage" class="form-message"></div>
        "#,
    );
    assert!(mount(|| contact::init(SubmitMode::Simulated)));
    settle(10).await;
    dom::by_id::<HtmlInputElement>("name").unwrap().set_value("Ada");

    let message = dom::by_id::<HtmlElement>("formMessage").unwrap();
    assert_eq!(message.text_content().unwrap_or_default(), "");

    let form = dom::by_id::<Element>("contactForm").unwrap();
    let submit = Event::new("submit").unwrap();
    form.dispatch_event(&submit).unwrap();
    settle(10).await;

    assert_eq!(
        message.text_content().unwrap_or_default(),
        messages::SIMULATED_SUCCESS
    );
    assert!(message.class_list().contains("success"));
    assert_eq!(message.style().get_property_value("display").unwrap(), "block");
    assert_eq!(dom::field_value("name"), "");
}
