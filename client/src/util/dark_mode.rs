//! Light/dark theme switching.
//!
//! The theme lives only in `UiState` for the lifetime of the page; nothing is
//! written to storage. Applying it toggles the `dark` class on `<html>`.
//! Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme and apply it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
