//! Contact form controller.
//!
//! Submits through the configured [`SubmitMode`] and shows a status line
//! that hides itself after [`timing::STATUS_MESSAGE_MS`].

use std::time::Duration;

use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::config::{contact_fields, selectors, timing};
use crate::core::ContactFormState;
use crate::core::contact::check_response;
use crate::core::error::ContactError;
use crate::models::{ContactSubmission, SubmitMode};
use crate::utils::{dom, post_form};

/// Read the named contact fields.
fn read_submission() -> ContactSubmission {
    ContactSubmission {
        name: dom::field_value(contact_fields::NAME),
        email: dom::field_value(contact_fields::EMAIL),
        phone: dom::field_value(contact_fields::PHONE),
        inquiry_type: dom::field_value(contact_fields::INQUIRY_TYPE),
        message: dom::field_value(contact_fields::MESSAGE),
    }
}

async fn deliver(mode: &SubmitMode, form: &HtmlFormElement) -> Result<(), ContactError> {
    match mode {
        SubmitMode::Relay {
            endpoint,
            access_key,
        } => post_form(endpoint, form, access_key.as_deref())
            .await
            .and_then(check_response),
        SubmitMode::Simulated => {
            let submission = read_submission();
            let json = serde_json::to_string(&submission).unwrap_or_default();
            leptos::logging::log!("Form submitted: {json}");
            Ok(())
        }
    }
}

/// Wire the contact form. Needs both `#contactForm` and `#formMessage`.
pub fn init(mode: SubmitMode) -> bool {
    let (Ok(form), Ok(message)) = (
        dom::by_id::<HtmlFormElement>(selectors::CONTACT_FORM),
        dom::by_id::<HtmlElement>(selectors::FORM_MESSAGE),
    ) else {
        leptos::logging::debug_warn!("contact: form or message element not found, skipping");
        return false;
    };

    let state = RwSignal::new(ContactFormState::new());

    Effect::new(move |rendered: Option<()>| {
        let status = state.with(|s| s.status().clone());
        // Leave the markup untouched until there is something to show.
        if rendered.is_none() && !status.is_visible() {
            return;
        }
        message.set_text_content(status.text());
        message.set_class_name(status.class_name());
        dom::set_style(
            &message,
            "display",
            if status.is_visible() { "block" } else { "none" },
        );
    });

    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();

        if !state.try_update(ContactFormState::begin).unwrap_or(false) {
            leptos::logging::debug_warn!("contact: submission already in flight");
            return;
        }

        let form = form.clone();
        let mode = mode.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = deliver(&mode, &form).await;
            match &result {
                Ok(()) => form.reset(),
                Err(e) => leptos::logging::warn!("contact form submission failed: {e}"),
            }

            let Some(token) = state.try_update(|s| s.finish(&mode, &result)) else {
                return;
            };
            gloo_timers::future::sleep(Duration::from_millis(u64::from(
                timing::STATUS_MESSAGE_MS,
            )))
            .await;
            state.update(|s| {
                s.expire(token);
            });
        });
    });
    true
}
