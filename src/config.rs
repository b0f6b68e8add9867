use web_sys::Window;

/// Width at or below which the page runs its small-screen behavior:
/// the hero intro is skipped and the views showcase auto-plays instead
/// of tracking scroll position.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
