//! Lightbox overlay controller.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::config::selectors;
use crate::core::{Lightbox, LightboxKey};
use crate::models::LightboxItem;
use crate::utils::dom;

/// Describe a gallery item for the lightbox.
///
/// The full-size URL comes from the item's `data-fullsize`; the thumbnail
/// `<img>` supplies the fallback source and the alt text.
fn lightbox_item(item: &Element) -> LightboxItem {
    let thumbnail = dom::query_in::<HtmlImageElement>(item, "img");
    LightboxItem::from_thumbnail(
        item.get_attribute(selectors::FULLSIZE_ATTR),
        thumbnail.as_ref().map(HtmlImageElement::src).unwrap_or_default(),
        thumbnail.as_ref().map(HtmlImageElement::alt).unwrap_or_default(),
    )
}

/// Wire gallery thumbnails to the lightbox overlay.
///
/// Needs `#lightbox` and `#lightboxImage`; the close and arrow buttons are
/// optional.
pub fn init() -> bool {
    let (Ok(overlay), Ok(image)) = (
        dom::by_id::<HtmlElement>(selectors::LIGHTBOX),
        dom::by_id::<HtmlImageElement>(selectors::LIGHTBOX_IMAGE),
    ) else {
        leptos::logging::debug_warn!("lightbox: overlay or image not found, skipping");
        return false;
    };

    let thumbnails = dom::query_all::<Element>(selectors::GALLERY_ITEMS);
    let lightbox = RwSignal::new(Lightbox::new(thumbnails.iter().map(lightbox_item).collect()));

    let effect_overlay = overlay.clone();
    Effect::new(move |was_open: Option<bool>| {
        let open = lightbox.with(|lb| {
            if let Some(item) = lb.current_item().filter(|_| lb.is_open()) {
                image.set_src(&item.src);
                image.set_alt(&item.alt);
            }
            lb.is_open()
        });
        dom::set_class(&effect_overlay, selectors::ACTIVE_CLASS, open);
        // Leave the page's own overflow alone until the lightbox is first used.
        let changed = match was_open {
            Some(was) => was != open,
            None => open,
        };
        if changed {
            dom::set_scroll_lock(open);
        }
        open
    });

    for (index, thumbnail) in thumbnails.iter().enumerate() {
        dom::listen(thumbnail, "click", move |_| {
            let has_image = lightbox.with_untracked(|lb| {
                lb.item(index).is_some_and(|item| !item.src.is_empty())
            });
            if has_image {
                lightbox.update(|lb| {
                    lb.open(index);
                });
            }
        });
    }

    if let Ok(close) = dom::by_id::<Element>(selectors::LIGHTBOX_CLOSE) {
        dom::listen(&close, "click", move |event| {
            event.stop_propagation();
            lightbox.update(|lb| {
                lb.close();
            });
        });
    }

    if let Ok(prev) = dom::by_id::<Element>(selectors::LIGHTBOX_PREV) {
        dom::listen(&prev, "click", move |event| {
            event.stop_propagation();
            lightbox.update(Lightbox::show_prev);
        });
    }

    if let Ok(next) = dom::by_id::<Element>(selectors::LIGHTBOX_NEXT) {
        dom::listen(&next, "click", move |event| {
            event.stop_propagation();
            lightbox.update(Lightbox::show_next);
        });
    }

    // Background clicks close; clicks on the image or controls do not.
    let backdrop = overlay.clone();
    dom::listen(&overlay, "click", move |event| {
        if dom::is_own_target(&event, &backdrop) && lightbox.with_untracked(Lightbox::is_open) {
            lightbox.update(|lb| {
                lb.close();
            });
        }
    });

    let _ = window_event_listener(ev::keydown, move |event| {
        if !lightbox.try_with_untracked(Lightbox::is_open).unwrap_or(false) {
            return;
        }
        if let Some(key) = LightboxKey::from_key(&event.key()) {
            event.prevent_default();
            lightbox.update(|lb| {
                lb.handle_key(key);
            });
        }
    });

    leptos::logging::log!("lightbox: {} images", thumbnails.len());
    true
}
