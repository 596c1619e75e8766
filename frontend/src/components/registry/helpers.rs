//! Utility functions for the debtor registry component.
//!
//! Responsibilities:
//! - **Creation instants**: capturing the epoch-millis id seed and the
//!   locale-formatted date text for new records.
//! - **File download**: offering the exported JSON as a browser download via
//!   an object URL and a synthetic anchor click.
//! - **User feedback**: temporary toast notifications for import/export
//!   failures.

use common::store::Moment;
use js_sys::Date;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

/// Captures the creation instant for a new record.
///
/// `epoch_millis` seeds the record id; `local_text` becomes the immutable
/// `date` column.
pub fn current_moment() -> Moment {
    Moment {
        epoch_millis: Date::now() as i64,
        local_text: Date::new_0()
            .to_locale_string("en-US", &JsValue::UNDEFINED)
            .into(),
    }
}

/// Offers `contents` as a downloadable file named `file_name`.
///
/// Builds a Blob, wraps it in an object URL, clicks a detached anchor, and
/// revokes the URL again. Nothing here mutates application state.
pub fn download_json(file_name: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();
        }
    }
    let _ = Url::revoke_object_url(&url);
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is injected straight into the document body and removes itself
/// after a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.85)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
