//! Smooth scrolling for in-page anchor links, offset by the fixed nav's
//! height so section headings don't hide under it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

fn nav_height(document: &web_sys::Document) -> f64 {
    document
        .get_element_by_id("nav")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn init_smooth_scroll() -> Box<dyn FnOnce()> {
    let noop: Box<dyn FnOnce()> = Box::new(|| ());

    let Some(window) = web_sys::window() else {
        return noop;
    };
    let Some(document) = window.document() else {
        return noop;
    };
    let Ok(anchors) = document.query_selector_all("a[href^='#']") else {
        return noop;
    };

    let mut listeners: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)> = Vec::new();
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new({
            let window = window.clone();
            let document = document.clone();
            let anchor = anchor.clone();
            move |e: MouseEvent| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                if href == "#" {
                    return;
                }
                let Some(target) = document.query_selector(&href).ok().flatten() else {
                    return;
                };
                e.prevent_default();

                let top = target.get_bounding_client_rect().top()
                    + window.page_y_offset().unwrap_or(0.0)
                    - nav_height(&document);
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        listeners.push((anchor, on_click));
    }

    Box::new(move || {
        for (anchor, on_click) in &listeners {
            let _ = anchor
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    })
}
