use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub dark: ReadSignal<bool>,
    pub set_dark: WriteSignal<bool>,
}

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
pub fn apply_theme(dark: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                if dark {
                    let _ = html.set_attribute("data-theme", "dark");
                } else {
                    let _ = html.remove_attribute("data-theme");
                }
            }
        }
    }
}

/// Reflect the language on `<html lang>` for screen readers and hyphenation.
pub fn apply_language(tag: &str) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("lang", tag);
    }
}
