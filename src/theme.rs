//! Theme Application
//!
//! Applies a `Theme` by toggling the `dark` class on `<html>`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;

use crate::models::Theme;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

fn dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Whether the OS / browser asks for a dark scheme
pub fn prefers_dark() -> bool {
    dark_query().map(|mql| mql.matches()).unwrap_or(false)
}

pub fn apply(theme: Theme) {
    let dark = theme.resolve(prefers_dark());
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
        log::warn!("[THEME] failed to toggle class: {:?}", e);
    }
}

/// Keeps a `change` listener on the dark-scheme media query alive
pub struct SystemThemeWatcher {
    query: MediaQueryList,
    closure: Closure<dyn FnMut()>,
}

impl SystemThemeWatcher {
    /// Call `on_change` whenever the system scheme flips
    pub fn new(on_change: impl Fn() + 'static) -> Option<Self> {
        let query = dark_query()?;
        let closure = Closure::<dyn FnMut()>::new(move || on_change());
        query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, closure })
    }
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}
