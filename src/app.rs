//! Root application module.
//!
//! The page markup is static HTML; `App` renders nothing and instead wires
//! every controller onto the existing document once, at mount.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::{contact, gallery, lightbox, nav, news};
use crate::config::{SiteConfig, breakpoints};
use crate::models::Viewport;

/// Reactive viewport size class, driven by the breakpoint media queries.
pub fn use_viewport() -> Signal<Viewport> {
    let is_mobile = use_media_query(breakpoints::MOBILE_QUERY);
    let is_tablet_or_smaller = use_media_query(breakpoints::TABLET_QUERY);
    Signal::derive(move || Viewport::from_queries(is_mobile.get(), is_tablet_or_smaller.get()))
}

/// Root component.
///
/// Loads the site settings and starts each controller. Controllers are
/// independent: one missing section of markup never affects the others.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let viewport = use_viewport();

    let active = [
        nav::init_nav_toggle(),
        nav::init_smooth_scroll() > 0,
        nav::init_scroll_shadow(),
        contact::init(config.contact),
        gallery::init(viewport),
        news::init(viewport),
        lightbox::init(),
    ];
    leptos::logging::log!(
        "pagekit: {}/{} controllers active",
        active.iter().filter(|on| **on).count(),
        active.len()
    );
}
