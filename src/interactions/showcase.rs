//! Views showcase: three presentation modes of the editor (card, normal,
//! minimal) cross-faded inside a sticky section.
//!
//! On wide viewports the active view is a pure function of how far the
//! visitor has scrolled through the section; at or below the breakpoint the
//! section is not sticky and the views auto-cycle on a timer instead.
//! Exactly one of the two modes is active at a time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Document, HtmlElement, Window};

use crate::config;

pub const AUTO_PLAY_INTERVAL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewName {
    Card,
    Normal,
    Minimal,
}

impl ViewName {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewName::Card => "card",
            ViewName::Normal => "normal",
            ViewName::Minimal => "minimal",
        }
    }

    /// Parse a `data-view` attribute value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "card" => Some(ViewName::Card),
            "normal" => Some(ViewName::Normal),
            "minimal" => Some(ViewName::Minimal),
            _ => None,
        }
    }
}

/// Progression order, used both for the scroll mapping and for auto-play
/// cycling. This is intentionally NOT the order the switcher buttons are
/// laid out in; see `indicator_slot`.
pub const SCROLL_ORDER: [ViewName; 3] = [ViewName::Card, ViewName::Normal, ViewName::Minimal];

/// Slot of a view's button in the switcher, left to right. The buttons are
/// rendered minimal / normal / card, so this table is independent of
/// `SCROLL_ORDER` and must stay that way: one encodes progression, the
/// other encodes layout.
pub fn indicator_slot(view: ViewName) -> usize {
    match view {
        ViewName::Minimal => 0,
        ViewName::Normal => 1,
        ViewName::Card => 2,
    }
}

pub fn next_in_cycle(view: ViewName) -> ViewName {
    let index = SCROLL_ORDER.iter().position(|v| *v == view).unwrap_or(0);
    SCROLL_ORDER[(index + 1) % SCROLL_ORDER.len()]
}

/// Normalized progress through the sticky section: 0 when it has just
/// pinned, 1 when it is about to unpin.
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    ((-section_top) / scrollable).clamp(0.0, 1.0)
}

pub fn view_at_progress(progress: f64) -> ViewName {
    if progress < 0.33 {
        ViewName::Card
    } else if progress < 0.66 {
        ViewName::Normal
    } else {
        ViewName::Minimal
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseMode {
    ScrollDriven,
    AutoPlay,
}

pub fn mode_for_width(viewport_width: f64) -> ShowcaseMode {
    if viewport_width > config::DESKTOP_BREAKPOINT_PX {
        ShowcaseMode::ScrollDriven
    } else {
        ShowcaseMode::AutoPlay
    }
}

pub struct ShowcaseState {
    current: ViewName,
    paused: bool,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self {
            current: ViewName::Card,
            paused: false,
        }
    }

    pub fn current(&self) -> ViewName {
        self.current
    }

    /// Returns false (and mutates nothing) when the target is already
    /// current, which absorbs the redundant calls the scroll handler makes
    /// on every frame.
    pub fn switch(&mut self, target: ViewName) -> bool {
        if target == self.current {
            return false;
        }
        self.current = target;
        true
    }

    /// One auto-play tick. Skipped entirely while paused.
    pub fn advance(&mut self) -> Option<ViewName> {
        if self.paused {
            return None;
        }
        self.current = next_in_cycle(self.current);
        Some(self.current)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

fn set_active_for(document: &Document, selector: &str, view: ViewName) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        let Some(element) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if element.dataset().get("view").as_deref() == Some(view.as_str()) {
            let _ = element.class_list().add_1("active");
        } else {
            let _ = element.class_list().remove_1("active");
        }
    }
}

fn apply_view(document: &Document, view: ViewName) {
    set_active_for(document, ".view-btn", view);
    set_active_for(document, ".view-image", view);

    if let Some(indicator) = document
        .query_selector(".view-btn-indicator")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let slot = indicator_slot(view);
        // 4px is the gap between switcher buttons.
        let _ = indicator.style().set_property(
            "transform",
            &format!("translateX(calc({}% + {}px))", slot * 100, slot * 4),
        );
    }
}

/// Everything the cleanup closure has to tear down.
struct ShowcaseListeners {
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
    buttons: Vec<(HtmlElement, Closure<dyn FnMut()>)>,
    hover: Option<(HtmlElement, Closure<dyn FnMut()>, Closure<dyn FnMut()>)>,
}

/// Wire the showcase to the page. Returns a cleanup closure; missing
/// markup disables the feature without touching anything else.
pub fn init_views_showcase() -> Box<dyn FnOnce()> {
    let noop: Box<dyn FnOnce()> = Box::new(|| ());

    let Some(window) = web_sys::window() else {
        return noop;
    };
    let Some(document) = window.document() else {
        return noop;
    };

    let Ok(buttons) = document.query_selector_all(".view-btn") else {
        return noop;
    };
    let Ok(images) = document.query_selector_all(".view-image") else {
        return noop;
    };
    let Some(section) = document
        .query_selector(".feature-views")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return noop;
    };
    if buttons.length() == 0 || images.length() == 0 {
        return noop;
    }
    let showcase = document
        .query_selector(".views-showcase")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    let state = Rc::new(RefCell::new(ShowcaseState::new()));
    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let switch_view: Rc<dyn Fn(ViewName)> = {
        let state = state.clone();
        let document = document.clone();
        Rc::new(move |target: ViewName| {
            if state.borrow_mut().switch(target) {
                apply_view(&document, target);
            }
        })
    };

    let start_auto_play: Rc<dyn Fn()> = {
        let state = state.clone();
        let document = document.clone();
        let interval = interval.clone();
        Rc::new(move || {
            let tick = {
                let state = state.clone();
                let document = document.clone();
                move || {
                    let advanced = state.borrow_mut().advance();
                    if let Some(view) = advanced {
                        apply_view(&document, view);
                    }
                }
            };
            // Replacing the handle drops (and cancels) any previous timer,
            // so two intervals can never run at once.
            *interval.borrow_mut() = Some(Interval::new(AUTO_PLAY_INTERVAL_MS, tick));
        })
    };

    let stop_auto_play: Rc<dyn Fn()> = {
        let interval = interval.clone();
        Rc::new(move || {
            interval.borrow_mut().take();
        })
    };

    let handle_scroll: Rc<dyn Fn()> = {
        let window = window.clone();
        let section = section.clone();
        let switch_view = switch_view.clone();
        Rc::new(move || {
            if mode_for_width(config::viewport_width(&window)) != ShowcaseMode::ScrollDriven {
                return;
            }
            let rect = section.get_bounding_client_rect();
            let progress = scroll_progress(
                rect.top(),
                section.offset_height() as f64,
                config::viewport_height(&window),
            );
            switch_view(view_at_progress(progress));
        })
    };

    // Scroll events collapse to one handler run per animation frame.
    let ticking = Rc::new(Cell::new(false));
    let scroll = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        let ticking = ticking.clone();
        let handle_scroll = handle_scroll.clone();
        move || {
            if ticking.get() {
                return;
            }
            ticking.set(true);
            let frame = Closure::once_into_js({
                let ticking = ticking.clone();
                let handle_scroll = handle_scroll.clone();
                move || {
                    handle_scroll();
                    ticking.set(false);
                }
            });
            let _ = window.request_animation_frame(frame.unchecked_ref::<Function>());
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());

    // Manual selection: switch immediately, and push the next auto-advance
    // a full interval away if auto-play is running.
    let mut button_listeners = Vec::new();
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(view) = button
            .dataset()
            .get("view")
            .and_then(|name| ViewName::from_name(&name))
        else {
            continue;
        };
        let on_click = Closure::<dyn FnMut()>::new({
            let switch_view = switch_view.clone();
            let start_auto_play = start_auto_play.clone();
            let interval = interval.clone();
            move || {
                switch_view(view);
                let auto_playing = interval.borrow().is_some();
                if auto_playing {
                    start_auto_play();
                }
            }
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        button_listeners.push((button, on_click));
    }

    // Pause auto-play while the pointer rests on the showcase.
    let hover = showcase.map(|container| {
        let enter = Closure::<dyn FnMut()>::new({
            let state = state.clone();
            move || {
                state.borrow_mut().set_paused(true);
            }
        });
        let leave = Closure::<dyn FnMut()>::new({
            let state = state.clone();
            move || {
                state.borrow_mut().set_paused(false);
            }
        });
        let _ = container
            .add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        let _ = container
            .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        (container, enter, leave)
    });

    // Pick the mode for the current viewport; the other one is fully
    // stopped so the two can never fight over the current view.
    let apply_mode: Rc<dyn Fn()> = {
        let window = window.clone();
        let start_auto_play = start_auto_play.clone();
        let stop_auto_play = stop_auto_play.clone();
        let handle_scroll = handle_scroll.clone();
        Rc::new(move || match mode_for_width(config::viewport_width(&window)) {
            ShowcaseMode::AutoPlay => start_auto_play(),
            ShowcaseMode::ScrollDriven => {
                stop_auto_play();
                // Recompute right away so the view is never stale after a
                // resize across the breakpoint.
                handle_scroll();
            }
        })
    };

    let resize = Closure::<dyn FnMut()>::new({
        let apply_mode = apply_mode.clone();
        move || {
            apply_mode();
        }
    });
    let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

    apply_mode();

    let listeners = ShowcaseListeners {
        scroll,
        resize,
        buttons: button_listeners,
        hover,
    };

    Box::new(move || {
        let _ = window
            .remove_event_listener_with_callback("scroll", listeners.scroll.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("resize", listeners.resize.as_ref().unchecked_ref());
        for (button, on_click) in &listeners.buttons {
            let _ = button
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
        if let Some((container, enter, leave)) = &listeners.hover {
            let _ = container
                .remove_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
            let _ = container
                .remove_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        }
        interval.borrow_mut().take();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_to_current_view_is_a_no_op() {
        let mut state = ShowcaseState::new();
        assert_eq!(state.current(), ViewName::Card);
        assert!(!state.switch(ViewName::Card));
        assert_eq!(state.current(), ViewName::Card);
    }

    #[test]
    fn switch_changes_exactly_the_current_view() {
        let mut state = ShowcaseState::new();
        assert!(state.switch(ViewName::Minimal));
        assert_eq!(state.current(), ViewName::Minimal);
        assert!(state.switch(ViewName::Normal));
        assert_eq!(state.current(), ViewName::Normal);
    }

    #[test]
    fn progress_thresholds_map_deterministically() {
        let cases = [
            (0.0, ViewName::Card),
            (0.32, ViewName::Card),
            (0.33, ViewName::Normal),
            (0.65, ViewName::Normal),
            (0.66, ViewName::Minimal),
            (1.0, ViewName::Minimal),
        ];
        for (progress, expected) in cases {
            assert_eq!(view_at_progress(progress), expected, "at p={progress}");
        }
    }

    #[test]
    fn scroll_progress_clamps_to_unit_range() {
        // Section not yet reached: top is positive, progress pins at 0.
        assert_eq!(scroll_progress(400.0, 2000.0, 800.0), 0.0);
        // Scrolled far past the section.
        assert_eq!(scroll_progress(-5000.0, 2000.0, 800.0), 1.0);
        // Halfway through the scrollable range.
        assert_eq!(scroll_progress(-600.0, 2000.0, 800.0), 0.5);
        // Degenerate layout (section shorter than viewport) never divides
        // by zero or goes negative.
        assert_eq!(scroll_progress(-100.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn cycle_order_wraps_around() {
        assert_eq!(next_in_cycle(ViewName::Card), ViewName::Normal);
        assert_eq!(next_in_cycle(ViewName::Normal), ViewName::Minimal);
        assert_eq!(next_in_cycle(ViewName::Minimal), ViewName::Card);
    }

    #[test]
    fn indicator_slots_follow_display_order_not_cycle_order() {
        assert_eq!(indicator_slot(ViewName::Minimal), 0);
        assert_eq!(indicator_slot(ViewName::Normal), 1);
        assert_eq!(indicator_slot(ViewName::Card), 2);
        // First in scroll order sits in the last display slot; the two
        // orderings genuinely differ.
        assert_eq!(indicator_slot(SCROLL_ORDER[0]), 2);
    }

    #[test]
    fn advance_skips_while_paused() {
        let mut state = ShowcaseState::new();
        state.set_paused(true);
        assert_eq!(state.advance(), None);
        assert_eq!(state.current(), ViewName::Card);

        state.set_paused(false);
        assert_eq!(state.advance(), Some(ViewName::Normal));
        assert_eq!(state.advance(), Some(ViewName::Minimal));
        assert_eq!(state.advance(), Some(ViewName::Card));
    }

    #[test]
    fn mode_is_exclusive_at_the_breakpoint() {
        assert_eq!(mode_for_width(1024.0), ShowcaseMode::AutoPlay);
        assert_eq!(mode_for_width(375.0), ShowcaseMode::AutoPlay);
        assert_eq!(mode_for_width(1025.0), ShowcaseMode::ScrollDriven);
        assert_eq!(mode_for_width(1920.0), ShowcaseMode::ScrollDriven);
    }

    #[test]
    fn view_names_round_trip_through_data_attributes() {
        for view in SCROLL_ORDER {
            assert_eq!(ViewName::from_name(view.as_str()), Some(view));
        }
        assert_eq!(ViewName::from_name("compact"), None);
    }
}
