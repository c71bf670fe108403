//! Lightbox input mapping: DOM events to `lightbox` engine inputs.

#[cfg(test)]
#[path = "viewer_input_test.rs"]
mod viewer_input_test;

use lightbox::engine::Action;
use lightbox::input::PointerKind;

/// Only mouse pointer events drive the engine; fingers arrive as touch events.
#[must_use]
pub fn map_pointer_kind(pointer_type: &str) -> Option<PointerKind> {
    (pointer_type == "mouse").then_some(PointerKind::Mouse)
}

/// Whether the engine asked for the triggering event's default to be suppressed.
#[must_use]
pub fn wants_prevent_default(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::PreventDefault))
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> lightbox::transform::Point {
    lightbox::transform::Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Position of the first active finger, if any.
#[cfg(feature = "csr")]
pub fn touch_point(ev: &leptos::ev::TouchEvent) -> Option<lightbox::transform::Point> {
    let touch = ev.touches().get(0)?;
    Some(lightbox::transform::Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}
