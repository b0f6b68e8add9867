//! Hero intro sequence: a full-screen screenshot that zooms out to reveal
//! the device mockups, then the hero content.
//!
//! The sequence gates page scrolling until the visitor nudges it forward
//! (wheel, swipe, key, click) or a fallback timer fires, then plays a fixed
//! choreography and detaches all of its listeners. The phase machine itself
//! is plain Rust so the timing and input rules can be unit tested without a
//! browser; `init_hero_intro` is the DOM wiring around it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent, Window};

use crate::config;

pub const REVEAL_DELAY_MS: u32 = 500;
pub const FALLBACK_START_MS: u32 = 2_500;
pub const DEVICES_AT_MS: u32 = 1_200;
pub const CONTENT_AT_MS: u32 = 1_800;
pub const DONE_AT_MS: u32 = 3_000;
pub const SWIPE_THRESHOLD_PX: f64 = 30.0;

/// Where the intro currently is. Phases only ever move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroPhase {
    /// Waiting behind the white veil.
    Idle,
    /// Screenshot faded in, waiting for the visitor (or the fallback timer).
    Revealed,
    /// Zoom-out animation running.
    ZoomingOut,
    /// Device mockups visible, content still fading in.
    DevicesRevealed,
    /// Overlay hidden, scrolling unlocked, listeners detached.
    Done,
}

/// One of the five channels that can kick off the zoom-out.
#[derive(Clone, Copy, Debug)]
pub enum IntroInput {
    WheelDown { delta_y: f64 },
    SwipeUp { distance: f64 },
    AdvanceKey,
    OverlayClick,
    FallbackTimeout,
}

pub struct IntroSequence {
    phase: IntroPhase,
}

impl IntroSequence {
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::Idle,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// The unconditional reveal tick. Only meaningful from `Idle`; once the
    /// sequence has started the tick is stale and ignored.
    pub fn mark_revealed(&mut self) -> bool {
        if self.phase == IntroPhase::Idle {
            self.phase = IntroPhase::Revealed;
            true
        } else {
            false
        }
    }

    /// Attempt the start transition. Accepted at most once, from `Idle` or
    /// `Revealed`; every later call is a no-op so the five input channels
    /// can all stay armed without coordination.
    pub fn try_start(&mut self, input: &IntroInput) -> bool {
        if self.phase > IntroPhase::Revealed {
            return false;
        }
        let wants_start = match input {
            IntroInput::WheelDown { delta_y } => *delta_y > 0.0,
            IntroInput::SwipeUp { distance } => *distance > SWIPE_THRESHOLD_PX,
            IntroInput::AdvanceKey | IntroInput::OverlayClick | IntroInput::FallbackTimeout => true,
        };
        if wants_start {
            self.phase = IntroPhase::ZoomingOut;
        }
        wants_start
    }

    pub fn devices_revealed(&mut self) -> bool {
        if self.phase == IntroPhase::ZoomingOut {
            self.phase = IntroPhase::DevicesRevealed;
            true
        } else {
            false
        }
    }

    pub fn finish(&mut self) -> bool {
        if self.phase == IntroPhase::DevicesRevealed {
            self.phase = IntroPhase::Done;
            true
        } else {
            false
        }
    }

    /// Wheel and touch-move are swallowed while the choreography plays so
    /// the page cannot be scrolled out from under it.
    pub fn suppress_scroll(&self) -> bool {
        matches!(
            self.phase,
            IntroPhase::ZoomingOut | IntroPhase::DevicesRevealed
        )
    }
}

pub fn is_advance_key(key: &str) -> bool {
    matches!(key, "ArrowDown" | " " | "PageDown" | "Enter")
}

/// The intro is skipped outright on small viewports (the device mockups are
/// hidden there) and when the visitor asks for reduced motion.
pub fn should_bypass(viewport_width: f64, reduced_motion: bool) -> bool {
    viewport_width <= config::DESKTOP_BREAKPOINT_PX || reduced_motion
}

fn set_scroll_lock(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        if locked {
            let _ = body.style().set_property("overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}

fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

/// The five armed listeners plus the element the click handler hangs off.
/// Detached as a unit once the sequence completes.
struct IntroListeners {
    wheel: Closure<dyn FnMut(WheelEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
    overlay: Element,
}

impl IntroListeners {
    fn detach(&self, window: &Window) {
        let _ = window
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .overlay
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
    }
}

/// Wire the intro to the page. Returns a cleanup closure for the caller's
/// effect destructor; if the overlay markup is missing the whole feature
/// quietly disables itself.
pub fn init_hero_intro() -> Box<dyn FnOnce()> {
    let noop: Box<dyn FnOnce()> = Box::new(|| ());

    let Some(window) = web_sys::window() else {
        return noop;
    };
    let Some(document) = window.document() else {
        return noop;
    };

    let Some(overlay) = document.get_element_by_id("intro-overlay") else {
        return noop;
    };
    let Some(devices) = document.query_selector(".hero-devices").ok().flatten() else {
        return noop;
    };
    let intro_white = document.get_element_by_id("intro-white");
    let screenshot = document.query_selector(".intro-screenshot").ok().flatten();
    let hero_content = document.query_selector(".hero-content").ok().flatten();

    if should_bypass(
        config::viewport_width(&window),
        config::prefers_reduced_motion(&window),
    ) {
        add_class(&overlay, "hidden");
        add_class(&devices, "revealed");
        if let Some(content) = &hero_content {
            add_class(content, "visible");
        }
        return noop;
    }

    let seq = Rc::new(RefCell::new(IntroSequence::new()));
    let listeners: Rc<RefCell<Option<IntroListeners>>> = Rc::new(RefCell::new(None));

    set_scroll_lock(&document, true);

    // Unconditional reveal: white veil out, screenshot in.
    {
        let seq = seq.clone();
        let intro_white = intro_white.clone();
        let screenshot = screenshot.clone();
        Timeout::new(REVEAL_DELAY_MS, move || {
            if seq.borrow_mut().mark_revealed() {
                if let Some(white) = &intro_white {
                    add_class(white, "fade-out");
                }
                if let Some(shot) = &screenshot {
                    add_class(shot, "visible");
                }
            }
        })
        .forget();
    }

    // Shared start transition: first accepted input wins, the rest hit the
    // phase guard inside `try_start`.
    let start: Rc<dyn Fn(&IntroInput)> = {
        let seq = seq.clone();
        let listeners = listeners.clone();
        let window = window.clone();
        let document = document.clone();
        let overlay = overlay.clone();
        let devices = devices.clone();
        let hero_content = hero_content.clone();
        Rc::new(move |input: &IntroInput| {
            if !seq.borrow_mut().try_start(input) {
                return;
            }
            add_class(&overlay, "zoom-out");

            {
                let seq = seq.clone();
                let devices = devices.clone();
                Timeout::new(DEVICES_AT_MS, move || {
                    if seq.borrow_mut().devices_revealed() {
                        add_class(&devices, "revealed");
                    }
                })
                .forget();
            }

            if let Some(content) = hero_content.clone() {
                Timeout::new(CONTENT_AT_MS, move || {
                    add_class(&content, "visible");
                })
                .forget();
            }

            {
                let seq = seq.clone();
                let listeners = listeners.clone();
                let window = window.clone();
                let document = document.clone();
                let overlay = overlay.clone();
                Timeout::new(DONE_AT_MS, move || {
                    if seq.borrow_mut().finish() {
                        add_class(&overlay, "hidden");
                        set_scroll_lock(&document, false);
                        if let Some(armed) = listeners.borrow_mut().take() {
                            armed.detach(&window);
                        }
                    }
                })
                .forget();
            }
        })
    };

    let wheel = Closure::<dyn FnMut(WheelEvent)>::new({
        let seq = seq.clone();
        let start = start.clone();
        move |e: WheelEvent| {
            let phase = seq.borrow().phase();
            if phase <= IntroPhase::Revealed {
                if e.delta_y() > 0.0 {
                    e.prevent_default();
                    start(&IntroInput::WheelDown {
                        delta_y: e.delta_y(),
                    });
                }
            } else if seq.borrow().suppress_scroll() {
                e.prevent_default();
            }
        }
    });

    let touch_start_y = Rc::new(Cell::new(0.0f64));
    let touch_start = Closure::<dyn FnMut(TouchEvent)>::new({
        let touch_start_y = touch_start_y.clone();
        move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                touch_start_y.set(touch.client_y() as f64);
            }
        }
    });

    let touch_move = Closure::<dyn FnMut(TouchEvent)>::new({
        let seq = seq.clone();
        let start = start.clone();
        let touch_start_y = touch_start_y.clone();
        move |e: TouchEvent| {
            let phase = seq.borrow().phase();
            if phase <= IntroPhase::Revealed {
                if let Some(touch) = e.touches().get(0) {
                    let distance = touch_start_y.get() - touch.client_y() as f64;
                    if distance > SWIPE_THRESHOLD_PX {
                        e.prevent_default();
                        start(&IntroInput::SwipeUp { distance });
                    }
                }
            } else if seq.borrow().suppress_scroll() {
                e.prevent_default();
            }
        }
    });

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new({
        let seq = seq.clone();
        let start = start.clone();
        move |e: KeyboardEvent| {
            let phase = seq.borrow().phase();
            if phase <= IntroPhase::Revealed && is_advance_key(&e.key()) {
                e.prevent_default();
                start(&IntroInput::AdvanceKey);
            }
        }
    });

    let click = Closure::<dyn FnMut(MouseEvent)>::new({
        let start = start.clone();
        move |_: MouseEvent| {
            start(&IntroInput::OverlayClick);
        }
    });

    // Wheel and touch-move must be non-passive so the preventDefault calls
    // above actually hold the page still.
    let non_passive = web_sys::AddEventListenerOptions::new();
    non_passive.set_passive(false);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        wheel.as_ref().unchecked_ref(),
        &non_passive,
    );
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        touch_move.as_ref().unchecked_ref(),
        &non_passive,
    );
    let _ = window
        .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    let _ = overlay.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

    *listeners.borrow_mut() = Some(IntroListeners {
        wheel,
        touch_start,
        touch_move,
        keydown,
        click,
        overlay,
    });

    // Fallback: the sequence never waits forever for input.
    {
        let start = start.clone();
        Timeout::new(FALLBACK_START_MS, move || {
            start(&IntroInput::FallbackTimeout);
        })
        .forget();
    }

    Box::new(move || {
        // Unmounted mid-sequence: drop the listeners and give scrolling back.
        if let Some(armed) = listeners.borrow_mut().take() {
            armed.detach(&window);
        }
        set_scroll_lock(&document, false);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> IntroSequence {
        let mut seq = IntroSequence::new();
        seq.mark_revealed();
        assert!(seq.try_start(&IntroInput::FallbackTimeout));
        seq
    }

    #[test]
    fn reveal_tick_only_applies_from_idle() {
        let mut seq = IntroSequence::new();
        assert!(seq.mark_revealed());
        assert_eq!(seq.phase(), IntroPhase::Revealed);
        assert!(!seq.mark_revealed());

        // A late tick after the start must not drag the phase backwards.
        let mut seq = IntroSequence::new();
        assert!(seq.try_start(&IntroInput::OverlayClick));
        assert!(!seq.mark_revealed());
        assert_eq!(seq.phase(), IntroPhase::ZoomingOut);
    }

    #[test]
    fn start_is_accepted_exactly_once() {
        let mut seq = IntroSequence::new();
        seq.mark_revealed();
        assert!(seq.try_start(&IntroInput::WheelDown { delta_y: 12.0 }));
        assert_eq!(seq.phase(), IntroPhase::ZoomingOut);

        // Every remaining channel fires and none of them move the phase.
        assert!(!seq.try_start(&IntroInput::SwipeUp { distance: 80.0 }));
        assert!(!seq.try_start(&IntroInput::AdvanceKey));
        assert!(!seq.try_start(&IntroInput::OverlayClick));
        assert!(!seq.try_start(&IntroInput::FallbackTimeout));
        assert_eq!(seq.phase(), IntroPhase::ZoomingOut);
    }

    #[test]
    fn upward_wheel_does_not_start() {
        let mut seq = IntroSequence::new();
        seq.mark_revealed();
        assert!(!seq.try_start(&IntroInput::WheelDown { delta_y: -5.0 }));
        assert!(!seq.try_start(&IntroInput::WheelDown { delta_y: 0.0 }));
        assert_eq!(seq.phase(), IntroPhase::Revealed);
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        let mut seq = IntroSequence::new();
        seq.mark_revealed();
        assert!(!seq.try_start(&IntroInput::SwipeUp { distance: 30.0 }));
        assert!(seq.try_start(&IntroInput::SwipeUp { distance: 30.5 }));
    }

    #[test]
    fn staged_transitions_reach_done() {
        let mut seq = started();
        assert!(seq.devices_revealed());
        assert_eq!(seq.phase(), IntroPhase::DevicesRevealed);
        assert!(seq.finish());
        assert_eq!(seq.phase(), IntroPhase::Done);

        // Replayed timers are ignored once the sequence is over.
        assert!(!seq.devices_revealed());
        assert!(!seq.finish());
        assert_eq!(seq.phase(), IntroPhase::Done);
    }

    #[test]
    fn stage_timers_are_ordered_without_input() {
        // With zero input the fallback starts the sequence; the staged
        // delays then bound the time to Done.
        assert!(FALLBACK_START_MS > REVEAL_DELAY_MS);
        assert!(DEVICES_AT_MS < CONTENT_AT_MS && CONTENT_AT_MS < DONE_AT_MS);

        let mut seq = IntroSequence::new();
        seq.mark_revealed();
        assert!(seq.try_start(&IntroInput::FallbackTimeout));
        assert!(seq.devices_revealed());
        assert!(seq.finish());
        assert_eq!(seq.phase(), IntroPhase::Done);
    }

    #[test]
    fn suppression_covers_only_the_running_choreography() {
        let mut seq = IntroSequence::new();
        assert!(!seq.suppress_scroll());
        seq.mark_revealed();
        assert!(!seq.suppress_scroll());
        seq.try_start(&IntroInput::AdvanceKey);
        assert!(seq.suppress_scroll());
        seq.devices_revealed();
        assert!(seq.suppress_scroll());
        seq.finish();
        assert!(!seq.suppress_scroll());
    }

    #[test]
    fn phases_are_monotonic_under_arbitrary_input() {
        let mut seq = IntroSequence::new();
        let mut last = seq.phase();
        let inputs = [
            IntroInput::WheelDown { delta_y: 3.0 },
            IntroInput::SwipeUp { distance: 45.0 },
            IntroInput::AdvanceKey,
            IntroInput::OverlayClick,
            IntroInput::FallbackTimeout,
        ];
        seq.mark_revealed();
        for input in &inputs {
            seq.try_start(input);
            assert!(seq.phase() >= last);
            last = seq.phase();
        }
        seq.devices_revealed();
        assert!(seq.phase() >= last);
        seq.mark_revealed();
        assert_eq!(seq.phase(), IntroPhase::DevicesRevealed);
    }

    #[test]
    fn bypass_on_small_viewport_or_reduced_motion() {
        assert!(should_bypass(800.0, false));
        assert!(should_bypass(1024.0, false));
        assert!(should_bypass(1400.0, true));
        assert!(!should_bypass(1025.0, false));
    }

    #[test]
    fn advance_keys_match_the_documented_set() {
        for key in ["ArrowDown", " ", "PageDown", "Enter"] {
            assert!(is_advance_key(key), "{key:?} should advance");
        }
        for key in ["ArrowUp", "Escape", "a", "PageUp", "Tab"] {
            assert!(!is_advance_key(key), "{key:?} should not advance");
        }
    }
}
