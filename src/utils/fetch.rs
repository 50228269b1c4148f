//! Network submission utilities.
//!
//! Posts the contact form to a third-party form relay. The request is sent
//! once: no timeout, no retry.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::core::error::ContactError;
use crate::models::RelayResponse;

/// POST a form as multipart data and parse the relay's JSON acknowledgement.
///
/// `access_key` is added to the payload when given, overriding any hidden
/// field of the same name.
pub async fn post_form(
    endpoint: &str,
    form: &HtmlFormElement,
    access_key: Option<&str>,
) -> Result<RelayResponse, ContactError> {
    let data = FormData::new_with_form(form)
        .map_err(|e| ContactError::RequestBuild(js_message(&e)))?;

    if let Some(key) = access_key {
        data.set_with_str("access_key", key)
            .map_err(|e| ContactError::RequestBuild(js_message(&e)))?;
    }

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .map_err(|e| ContactError::RequestBuild(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    response
        .json::<RelayResponse>()
        .await
        .map_err(|e| ContactError::InvalidResponse(e.to_string()))
}

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
