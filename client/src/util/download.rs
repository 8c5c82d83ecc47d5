//! Client-side file downloads.
//!
//! Bytes are wrapped in a `Blob`, exposed through an object URL, clicked via
//! a detached anchor, and the URL is revoked straight after.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

pub const PDF_MIME: &str = "application/pdf";
pub const JSON_MIME: &str = "application/json";
pub const GRADED_RESULTS_FILE: &str = "graded_results.json";
pub const GRADING_REPORT_FILE: &str = "graded_assignments.pdf";

/// `Photosynthesis 101` -> `photosynthesis_101_lesson_plan.pdf`
pub fn lesson_plan_file_name(title: &str) -> String {
    let stem: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect();
    format!("{stem}_lesson_plan.pdf")
}

/// Offer `bytes` to the user as a file named `file_name`.
///
/// # Errors
///
/// Returns a description of the failing browser call.
pub fn save_bytes(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, mime, file_name);
        Err("downloads require a browser".to_owned())
    }
}

/// Serialize `value` as pretty JSON and download it.
///
/// # Errors
///
/// Returns a description of the serialization or browser failure.
pub fn save_json<T: serde::Serialize>(value: &T, file_name: &str) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    save_bytes(text.as_bytes(), JSON_MIME, file_name)
}
