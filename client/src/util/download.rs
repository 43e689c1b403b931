//! Save generated text (CSV exports) as a browser download.

/// Trigger a download of `contents` named `filename`.
///
/// Returns `false` when no browser document is available.
pub fn save_text(filename: &str, mime: &str, contents: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Ok(element) = document.create_element("a") else {
            return false;
        };
        let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
            return false;
        };
        let encoded = String::from(js_sys::encode_uri_component(contents));
        anchor.set_href(&format!("data:{mime};charset=utf-8,{encoded}"));
        anchor.set_download(filename);
        anchor.click();
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        false
    }
}
