//! Document-level presentation attributes.
//!
//! Mirrors accessibility settings onto the `<html>` element as `data-contrast`,
//! `data-font`, `data-font-size` and `lang`; the stylesheet keys off these.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Applying is best-effort browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic, so the first paint uses default styling.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::accessibility::AccessibilitySettings;

/// Attribute name/value pairs for the document root.
pub fn root_attributes(settings: &AccessibilitySettings) -> [(&'static str, &'static str); 4] {
    [
        ("data-contrast", if settings.high_contrast { "high" } else { "normal" }),
        ("data-font", if settings.dyslexia_font { "dyslexic" } else { "default" }),
        ("data-font-size", settings.font_size.as_str()),
        ("lang", settings.language.code()),
    ]
}

/// Apply `settings` to the `<html>` element.
pub fn apply(settings: &AccessibilitySettings) {
    let attrs = root_attributes(settings);
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            for (name, value) in attrs {
                let _ = el.set_attribute(name, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = attrs;
    }
}
