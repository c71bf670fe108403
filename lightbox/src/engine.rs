use web_sys::HtmlImageElement;

use crate::consts::ZOOMED_CLASS;
use crate::input::{ClickTarget, Key, PointerKind, ViewerState};
use crate::transform::{Point, Transform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The modal became visible showing this image source.
    Opened(String),
    /// The modal was hidden.
    Closed,
    /// The image transform changed.
    TransformChanged(Transform),
    /// The image cursor changed.
    SetCursor(&'static str),
    /// The host should call `preventDefault()` on the triggering event.
    PreventDefault,
}

/// Core viewer state: all logic that doesn't depend on the image element.
///
/// Separated from `Viewer` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct ViewerCore {
    pub state: ViewerState,
    source: Option<String>,
    /// One-shot: the next click ends a drag instead of acting.
    suppress_click: bool,
}

impl ViewerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Open / close ---

    /// Show `src` in the modal, discarding any previous zoom, pan, or drag.
    pub fn open(&mut self, src: &str) -> Vec<Action> {
        log::debug!("lightbox: open {src}");
        self.state = ViewerState::Flat;
        self.source = Some(src.to_owned());
        self.suppress_click = false;
        vec![
            Action::Opened(src.to_owned()),
            Action::TransformChanged(Transform::identity()),
            Action::SetCursor(self.state.cursor()),
        ]
    }

    /// Hide the modal and reset all interaction state. No-op when closed.
    pub fn close(&mut self) -> Vec<Action> {
        if !self.state.is_open() {
            return Vec::new();
        }
        log::debug!("lightbox: close from {:?}", self.state);
        self.state = ViewerState::Closed;
        self.suppress_click = false;
        vec![
            Action::Closed,
            Action::TransformChanged(Transform::identity()),
            Action::SetCursor(self.state.cursor()),
        ]
    }

    // --- Input events ---

    /// A click on the image or on the modal background.
    pub fn on_click(&mut self, target: ClickTarget) -> Vec<Action> {
        let suppressed = std::mem::take(&mut self.suppress_click);
        match self.state {
            ViewerState::Closed => Vec::new(),
            ViewerState::Dragging { pan, .. } => {
                // Release was never delivered; the click closes the drag.
                self.state = ViewerState::Zoomed { pan };
                vec![Action::SetCursor(self.state.cursor())]
            }
            _ if suppressed => {
                log::debug!("lightbox: click after drag ignored");
                Vec::new()
            }
            _ if target == ClickTarget::Backdrop => self.close(),
            ViewerState::Flat => {
                self.state = ViewerState::Zoomed { pan: Point::default() };
                vec![
                    Action::TransformChanged(self.state.transform()),
                    Action::SetCursor(self.state.cursor()),
                ]
            }
            ViewerState::Zoomed { .. } => {
                self.state = ViewerState::Flat;
                vec![
                    Action::TransformChanged(Transform::identity()),
                    Action::SetCursor(self.state.cursor()),
                ]
            }
        }
    }

    /// Mouse button or finger pressed on the image.
    pub fn on_pointer_down(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        self.suppress_click = false;
        let ViewerState::Zoomed { pan } = self.state else {
            return Vec::new();
        };
        self.state = ViewerState::Dragging { pan, origin: screen_pt - pan, moved: false };
        let mut actions = vec![Action::SetCursor(self.state.cursor())];
        if kind == PointerKind::Mouse {
            // Keeps the browser from starting a native image drag.
            actions.push(Action::PreventDefault);
        }
        actions
    }

    /// Mouse button or finger pressed on the modal background.
    ///
    /// Starts a fresh gesture: any pending drag-release suppression is
    /// dropped even when the release never reached the page.
    pub fn on_backdrop_pointer_down(&mut self) -> Vec<Action> {
        self.suppress_click = false;
        Vec::new()
    }

    /// Pointer or finger moved over the image.
    pub fn on_pointer_move(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        let ViewerState::Dragging { pan, origin, moved } = self.state else {
            return Vec::new();
        };
        let next = screen_pt - origin;
        self.state = ViewerState::Dragging { pan: next, origin, moved: moved || next != pan };
        let mut actions = vec![Action::TransformChanged(self.state.transform())];
        if kind == PointerKind::Touch {
            actions.push(Action::PreventDefault);
        }
        actions
    }

    /// Mouse button released or finger lifted.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Mouse left the image while possibly dragging.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() {
            return self.close();
        }
        Vec::new()
    }

    fn end_drag(&mut self) -> Vec<Action> {
        let ViewerState::Dragging { pan, moved, .. } = self.state else {
            return Vec::new();
        };
        self.state = ViewerState::Zoomed { pan };
        self.suppress_click = moved;
        vec![Action::SetCursor(self.state.cursor())]
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ViewerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.is_zoomed()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.state.pan()
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.state.cursor()
    }

    /// Source of the most recently opened image.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// The full viewer. Wraps `ViewerCore` and owns the modal `<img>` element.
pub struct Viewer {
    image: HtmlImageElement,
    pub core: ViewerCore,
}

impl Viewer {
    /// Create a viewer bound to the given image element.
    #[must_use]
    pub fn new(image: HtmlImageElement) -> Self {
        Self { image, core: ViewerCore::new() }
    }

    // --- Delegated transitions ---

    pub fn open(&mut self, src: &str) -> Vec<Action> {
        let actions = self.core.open(src);
        self.apply(&actions);
        actions
    }

    pub fn close(&mut self) -> Vec<Action> {
        let actions = self.core.close();
        self.apply(&actions);
        actions
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Vec<Action> {
        let actions = self.core.on_click(target);
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        let actions = self.core.on_pointer_down(screen_pt, kind);
        self.apply(&actions);
        actions
    }

    pub fn on_backdrop_pointer_down(&mut self) -> Vec<Action> {
        let actions = self.core.on_backdrop_pointer_down();
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, kind: PointerKind) -> Vec<Action> {
        let actions = self.core.on_pointer_move(screen_pt, kind);
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_up();
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_leave();
        self.apply(&actions);
        actions
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let actions = self.core.on_key_down(key);
        self.apply(&actions);
        actions
    }

    // --- DOM ---

    fn apply(&self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::Opened(src) => self.image.set_src(src),
                Action::TransformChanged(transform) => self.apply_transform(*transform),
                Action::SetCursor(cursor) => self.set_style("cursor", cursor),
                Action::Closed | Action::PreventDefault => {}
            }
        }
    }

    fn apply_transform(&self, transform: Transform) {
        match transform.to_css() {
            Some(css) => self.set_style("transform", &css),
            None => {
                if let Err(err) = self.image.style().remove_property("transform") {
                    log::warn!("lightbox: clearing transform failed: {err:?}");
                }
            }
        }
        if let Err(err) = self
            .image
            .class_list()
            .toggle_with_force(ZOOMED_CLASS, !transform.is_identity())
        {
            log::warn!("lightbox: toggling {ZOOMED_CLASS} failed: {err:?}");
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.image.style().set_property(property, value) {
            log::warn!("lightbox: setting {property} failed: {err:?}");
        }
    }
}
