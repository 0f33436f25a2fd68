//! Browser-side export and sharing.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Offer `contents` as a file download.
pub fn download_csv(filename: &str, contents: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to create blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create download URL".to_string())?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Created element is not a link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Hand `text` to the system share sheet, or copy it when sharing is not
/// available. Returns `Ok(true)` when it went to the clipboard.
pub async fn share_or_copy(title: &str, text: &str) -> Result<bool, String> {
    let navigator = web_sys::window().ok_or("No window")?.navigator();
    let navigator: &JsValue = navigator.as_ref();

    if let Some(share) = method(navigator, "share") {
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &"title".into(), &title.into());
        let _ = js_sys::Reflect::set(&data, &"text".into(), &text.into());
        // A dismissed share sheet rejects; that is not an error for us.
        if let Ok(promise) = share.call1(navigator, &data) {
            let _ = JsFuture::from(js_sys::Promise::from(promise)).await;
        }
        return Ok(false);
    }

    let clipboard = js_sys::Reflect::get(navigator, &"clipboard".into())
        .map_err(|_| "Clipboard unavailable".to_string())?;
    let write_text = method(&clipboard, "writeText").ok_or("Clipboard unavailable")?;
    let promise = write_text
        .call1(&clipboard, &text.into())
        .map_err(|_| "Clipboard write failed".to_string())?;
    JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(|_| "Clipboard write failed".to_string())?;
    Ok(true)
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
}
