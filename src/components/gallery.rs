//! Gallery strip controller.

use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::config::selectors;
use crate::core::GalleryCarousel;
use crate::models::Viewport;
use crate::utils::dom;

/// Wire the gallery strip's prev/next buttons.
///
/// Items per view follow the viewport breakpoints; the track is re-positioned
/// whenever either the position or the breakpoint changes.
pub fn init(viewport: Signal<Viewport>) -> bool {
    let (Ok(track), Ok(prev), Ok(next)) = (
        dom::query::<HtmlElement>(selectors::GALLERY_TRACK),
        dom::by_id::<Element>(selectors::GALLERY_PREV),
        dom::by_id::<Element>(selectors::GALLERY_NEXT),
    ) else {
        leptos::logging::debug_warn!("gallery: track or buttons not found, skipping");
        return false;
    };

    let item_count = dom::query_all::<Element>(selectors::GALLERY_ITEMS).len();
    let carousel = RwSignal::new(GalleryCarousel::new(
        item_count,
        viewport.get_untracked().gallery_items_per_view(),
    ));

    // Breakpoint changes re-clamp the position.
    Effect::new(move |_| {
        let per_view = viewport.get().gallery_items_per_view();
        if carousel.with_untracked(|c| c.items_per_view()) != per_view {
            carousel.update(|c| c.set_items_per_view(per_view));
        }
    });

    Effect::new(move |_| {
        let transform = carousel.with(GalleryCarousel::transform);
        dom::set_style(&track, "transform", &transform);
    });

    dom::listen(&next, "click", move |_| carousel.update(GalleryCarousel::next));
    dom::listen(&prev, "click", move |_| carousel.update(GalleryCarousel::prev));

    leptos::logging::log!("gallery: {item_count} items");
    true
}
