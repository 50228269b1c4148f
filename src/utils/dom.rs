//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! `Option`/`Result` so controllers can switch themselves off when the page
//! lacks their markup.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::error::DomError;
use crate::core::news::parse_css_px;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

// =============================================================================
// Lookup
// =============================================================================

/// Find an element by id and cast it to `T`.
pub fn by_id<T: JsCast>(id: &str) -> Result<T, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(format!("#{id}")))
}

/// Find the first element matching a CSS selector and cast it to `T`.
pub fn query<T: JsCast>(selector: &str) -> Result<T, DomError> {
    let document = document().ok_or(DomError::NoDocument)?;
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(selector.to_string()))
}

/// Find the first descendant of `parent` matching a CSS selector.
pub fn query_in<T: JsCast>(parent: &Element, selector: &str) -> Option<T> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching a CSS selector, in document order.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

// =============================================================================
// Events
// =============================================================================

/// Attach an event listener for the lifetime of the page.
///
/// The closure is leaked with `forget()`: the controllers are wired once at
/// startup and live until the page unloads.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::debug_warn!("failed to attach {event} listener");
    }
    closure.forget();
}

/// Whether an event was dispatched on `element` itself rather than a descendant.
pub fn is_own_target(event: &Event, element: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|target| &target == element)
}

// =============================================================================
// Styling
// =============================================================================

/// Set an inline style property, ignoring failures.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Remove an inline style property, ignoring failures.
pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Force a synchronous layout so the next style change starts a new transition.
pub fn force_reflow(element: &HtmlElement) {
    let _ = element.offset_width();
}

/// Read a computed style length in pixels (0 when unset or not a length).
pub fn computed_px(element: &Element, property: &str) -> f64 {
    window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .map_or(0.0, |value| parse_css_px(&value))
}

/// Lock or unlock page scrolling behind an overlay.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    if locked {
        set_style(&body, "overflow", "hidden");
    } else {
        clear_style(&body, "overflow");
    }
}

/// Whether page scrolling is currently locked.
pub fn is_scroll_locked() -> bool {
    document()
        .and_then(|d| d.body())
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .is_some_and(|value| value == "hidden")
}

// =============================================================================
// Scrolling
// =============================================================================

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the page to a vertical offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Current value of an `<input>`, `<select>` or `<textarea>` by id.
///
/// Missing fields read as empty.
pub fn field_value(id: &str) -> String {
    let Ok(element) = by_id::<Element>(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
