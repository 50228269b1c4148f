//! Navigation controllers: mobile menu, smooth anchors, navbar shadow.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::config::selectors;
use crate::core::navigation::{anchor_target, scroll_target_top};
use crate::core::{NavMenu, NavbarShadow};
use crate::utils::dom;

/// Wire the hamburger toggle to the mobile menu.
///
/// Clicking the toggle flips the menu; clicking any menu link closes it.
pub fn init_nav_toggle() -> bool {
    let (Ok(toggle), Ok(menu)) = (
        dom::by_id::<HtmlElement>(selectors::NAV_TOGGLE),
        dom::query::<Element>(selectors::NAV_MENU),
    ) else {
        leptos::logging::debug_warn!("nav toggle: markup not found, skipping");
        return false;
    };

    let state = StoredValue::new(NavMenu::default());

    let toggle_menu = menu.clone();
    dom::listen(&toggle, "click", move |_| {
        let open = state.try_update_value(NavMenu::toggle).unwrap_or(false);
        dom::set_class(&toggle_menu, selectors::ACTIVE_CLASS, open);
    });

    for link in dom::query_all::<Element>(selectors::NAV_LINKS) {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| {
            state.update_value(NavMenu::close);
            dom::set_class(&menu, selectors::ACTIVE_CLASS, false);
        });
    }
    true
}

/// Make same-page anchors scroll smoothly, stopping below the fixed navbar.
///
/// Returns the number of anchors wired.
pub fn init_smooth_scroll() -> usize {
    let anchors = dom::query_all::<Element>(selectors::ANCHOR_LINKS);
    for anchor in &anchors {
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            event.prevent_default();

            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Ok(target) = dom::by_id::<HtmlElement>(id) else {
                return;
            };

            let navbar_height = dom::query::<HtmlElement>(selectors::NAVBAR)
                .map_or(0.0, |navbar| f64::from(navbar.offset_height()));
            let top = scroll_target_top(f64::from(target.offset_top()), navbar_height);
            dom::smooth_scroll_to(top);
        });
    }
    anchors.len()
}

/// Deepen the navbar shadow once the page is scrolled.
pub fn init_scroll_shadow() -> bool {
    let Ok(navbar) = dom::query::<HtmlElement>(selectors::NAVBAR) else {
        leptos::logging::debug_warn!("navbar shadow: .navbar not found, skipping");
        return false;
    };

    let shadow = RwSignal::new(NavbarShadow::for_scroll(dom::scroll_y()));

    Effect::new(move |_| {
        dom::set_style(&navbar, "box-shadow", shadow.get().css());
    });

    let _ = window_event_listener(ev::scroll, move |_| {
        let next = NavbarShadow::for_scroll(dom::scroll_y());
        if shadow.get_untracked() != next {
            shadow.set(next);
        }
    });
    true
}
