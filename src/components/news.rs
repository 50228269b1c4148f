//! Looping news carousel controller.
//!
//! Clones every card once onto the end of the track at startup, then drives
//! the track from [`NewsCarousel`] frames. Slide completion comes from the
//! track's `transitionend`, with a timer as backstop for when the browser
//! skips the transition entirely.

use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::config::{selectors, timing};
use crate::core::{NewsCarousel, SlideMetrics, TrackFrame};
use crate::models::Viewport;
use crate::utils::{Debouncer, dom, timer};

/// The news track and the card its geometry is measured from.
#[derive(Clone)]
struct NewsTrack {
    track: HtmlElement,
    first_card: HtmlElement,
}

impl NewsTrack {
    fn metrics(&self) -> SlideMetrics {
        SlideMetrics {
            slide_width: f64::from(self.first_card.offset_width()),
            gap: dom::computed_px(&self.track, "gap"),
        }
    }

    /// Apply frames in order, flushing layout after every instant jump so the
    /// following animated frame transitions from the new position.
    fn apply(&self, frames: &[TrackFrame]) {
        let metrics = self.metrics();
        for frame in frames {
            let transition = if frame.animate {
                format!("transform {}ms ease", timing::NEWS_TRANSITION_MS)
            } else {
                "none".to_string()
            };
            dom::set_style(&self.track, "transition", &transition);
            dom::set_style(&self.track, "transform", &metrics.transform(frame.index));
            if !frame.animate {
                dom::force_reflow(&self.track);
            }
        }
    }
}

/// Wire the news carousel. Does nothing without cards, track or buttons.
pub fn init(viewport: Signal<Viewport>) -> bool {
    let (Ok(track), Ok(prev), Ok(next)) = (
        dom::query::<HtmlElement>(selectors::NEWS_TRACK),
        dom::by_id::<Element>(selectors::NEWS_PREV),
        dom::by_id::<Element>(selectors::NEWS_NEXT),
    ) else {
        leptos::logging::debug_warn!("news: track or buttons not found, skipping");
        return false;
    };

    let cards = dom::query_all::<HtmlElement>(selectors::NEWS_ITEMS);
    let Some(first_card) = cards.first().cloned() else {
        leptos::logging::debug_warn!("news: no cards, skipping");
        return false;
    };

    for card in &cards {
        if let Ok(copy) = card.clone_node_with_deep(true) {
            let _ = track.append_child(&copy);
        }
    }

    let carousel = StoredValue::new(NewsCarousel::new(cards.len()));
    let view = NewsTrack { track, first_card };
    view.apply(&[carousel.with_value(NewsCarousel::current_frame)]);

    let next_view = view.clone();
    dom::listen(&next, "click", move |_| {
        let before = carousel.with_value(NewsCarousel::pending_reset);
        let frames = carousel
            .try_update_value(NewsCarousel::next)
            .unwrap_or_default();
        next_view.apply(&frames);

        let armed = carousel.with_value(NewsCarousel::pending_reset);
        if let Some(ticket) = armed.filter(|_| armed != before) {
            let view = next_view.clone();
            timer::after(timing::TRANSITION_FALLBACK_MS, move || {
                if let Some(frame) = carousel
                    .try_update_value(|c| c.transition_finished(ticket))
                    .flatten()
                {
                    view.apply(&[frame]);
                }
            });
        }
    });

    let prev_view = view.clone();
    dom::listen(&prev, "click", move |_| {
        let frames = carousel
            .try_update_value(NewsCarousel::prev)
            .unwrap_or_default();
        prev_view.apply(&frames);
    });

    let end_view = view.clone();
    dom::listen(&view.track, "transitionend", move |event| {
        // Cards may run their own transitions (hover effects); only the
        // track's transform counts.
        if !dom::is_own_target(&event, &end_view.track) {
            return;
        }
        if let Some(frame) = carousel.try_update_value(NewsCarousel::settle).flatten() {
            end_view.apply(&[frame]);
        }
    });

    if let Some(window) = dom::window() {
        let debouncer = Debouncer::new(timing::RESIZE_DEBOUNCE_MS);
        let resize_view = view.clone();
        dom::listen(&window, "resize", move |_| {
            let view = resize_view.clone();
            debouncer.call(move || {
                if let Some(frame) = carousel.try_update_value(NewsCarousel::resize) {
                    view.apply(&[frame]);
                }
            });
        });
    }

    leptos::logging::log!(
        "news: {} cards ({} slots)",
        cards.len(),
        carousel.with_value(NewsCarousel::physical_len)
    );
    // The breakpoint queries settle after mount, so report from an effect.
    Effect::new(move |_| {
        leptos::logging::log!("news: {} per view", viewport.get().news_items_per_view());
    });
    true
}
