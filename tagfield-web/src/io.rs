//! Browser-based file I/O using Web APIs

use wasm_bindgen::prelude::*;
use web_sys::{Blob, HtmlAnchorElement, Storage, Url};

use tagfield_core::Tag;

/// Download JSON as a file
pub fn download_json(filename: &str, json: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(json));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type("application/json");

    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    // Temporary anchor triggers the download
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;

    Ok(())
}

fn storage() -> Result<Storage, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let storage = window.local_storage()?.ok_or("No localStorage")?;
    Ok(storage)
}

/// Save tags to localStorage
pub fn save_tags(key: &str, tags: &[Tag]) -> Result<(), JsValue> {
    let json = tagfield_core::to_json(tags).map_err(|e| JsValue::from_str(&e.to_string()))?;
    storage()?.set_item(key, &json)
}

/// Load tags from localStorage; an empty list when nothing was saved
pub fn load_tags(key: &str) -> Result<Vec<Tag>, JsValue> {
    match storage()?.get_item(key)? {
        Some(json) => serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(Vec::new()),
    }
}
