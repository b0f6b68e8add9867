//! Event-tracking stub. Logs to the console for now; the real analytics
//! backend plugs in here without touching call sites.

use log::info;
use wasm_bindgen::prelude::wasm_bindgen;

pub fn track_event(category: &str, action: &str, label: &str) {
    info!("event: {category} - {action} - {label}");
}

/// JS-visible wrapper for external wiring (tag managers, inline snippets).
#[wasm_bindgen(js_name = trackEvent)]
pub fn track_event_js(category: String, action: String, label: String) {
    track_event(&category, &action, &label);
}
