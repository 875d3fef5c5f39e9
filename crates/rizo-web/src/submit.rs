//! Lead Submitter
//!
//! Best-effort, fire-and-forget delivery of the form payload to the lead
//! webhook. Runs exactly once per successful confirm click, just before the
//! browser follows the payment link, so it must survive the page being torn
//! down: `navigator.sendBeacon` is preferred, with a keepalive `fetch` as
//! the fallback. Delivery failures are swallowed; nothing is surfaced to
//! the user and nothing is retried.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Blob, BlobPropertyBag, Headers, RequestInit, RequestMode};

use rizo_core::{BillingPeriod, FormValues, SubmissionPayload, WEBHOOK_URL};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Dispatch the payload to the webhook without blocking navigation.
pub fn submit_lead(values: &FormValues, period: BillingPeriod) {
    let body = match SubmissionPayload::new(values, period).encode() {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(%err, "lead payload could not be encoded");
            return;
        }
    };

    if !send_beacon(&body) {
        fetch_keepalive(body);
    }
}

/// Queue the body via `navigator.sendBeacon`, which the browser completes
/// even after navigation replaces this page. Returns false when the beacon
/// API is unavailable or refused the payload.
fn send_beacon(body: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let options = BlobPropertyBag::new();
    options.set_type(FORM_CONTENT_TYPE);
    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return false;
    };

    window
        .navigator()
        .send_beacon_with_opt_blob(WEBHOOK_URL, Some(&blob))
        .unwrap_or(false)
}

/// Fallback POST with `keepalive: true` so the request may outlive the
/// page. `no-cors` yields an opaque response, which is fine: it is never
/// inspected.
fn fetch_keepalive(body: String) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::NoCors);
    // web-sys has no `set_keepalive` binding, so set the property directly.
    let _ = js_sys::Reflect::set(init.as_ref(), &JsValue::from_str("keepalive"), &JsValue::TRUE);
    init.set_body(&JsValue::from_str(&body));
    if let Ok(headers) = Headers::new() {
        let _ = headers.set("Content-Type", FORM_CONTENT_TYPE);
        init.set_headers(&headers);
    }

    let request = window.fetch_with_str_and_init(WEBHOOK_URL, &init);
    spawn_local(async move {
        if JsFuture::from(request).await.is_err() {
            tracing::debug!("lead webhook fallback request failed");
        }
    });
}
