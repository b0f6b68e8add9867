//! Reveal-on-scroll for `.scroll-reveal` elements, built on
//! IntersectionObserver with a staggered delay per batch. Browsers without
//! the observer just get everything revealed up front.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

const STAGGER_STEP_MS: u32 = 50;

fn has_intersection_observer(window: &Window) -> bool {
    Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub fn init_scroll_reveal() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elements) = document.query_selector_all(".scroll-reveal") else {
        return;
    };
    if elements.length() == 0 {
        return;
    }

    if !has_intersection_observer(&window) {
        for i in 0..elements.length() {
            if let Some(element) = elements
                .item(i)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            {
                let _ = element.class_list().add_1("visible");
            }
        }
        return;
    }

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                // Elements entering in the same batch reveal 50ms apart.
                let delay = index as u32 * STAGGER_STEP_MS;
                observer.unobserve(&target);
                Timeout::new(delay, move || {
                    let _ = target.class_list().add_1("visible");
                })
                .forget();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for i in 0..elements.length() {
        if let Some(element) = elements
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            observer.observe(&element);
        }
    }

    // The observer outlives the initializer; it stops itself element by
    // element via unobserve above.
    on_intersect.forget();
}

/// JS-visible entry point so external scripts can re-run the reveal pass
/// after injecting content.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = initScrollReveal)]
pub fn init_scroll_reveal_js() {
    init_scroll_reveal();
}
