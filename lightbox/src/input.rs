//! Input model: pointer kinds, click targets, keys, and the viewer state machine.
//!
//! `ViewerState` is the single source of truth for what the lightbox is
//! doing. Each variant carries exactly the context it needs, so combinations
//! like "dragging while not zoomed" cannot be represented.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{CURSOR_GRAB, CURSOR_GRABBING, CURSOR_ZOOM_IN, ESCAPE_KEY};
use crate::transform::{Point, Transform};

/// Which kind of device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse (delivered as pointer events).
    Mouse,
    /// Finger on a touch screen (delivered as touch events).
    Touch,
}

/// Where a click landed inside the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Directly on the enlarged image.
    Image,
    /// On the modal background, outside the image.
    Backdrop,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == ESCAPE_KEY
    }
}

/// The lightbox state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewerState {
    /// Modal hidden.
    #[default]
    Closed,
    /// Modal shown at natural size.
    Flat,
    /// Modal shown at zoom scale, not dragging.
    Zoomed {
        /// Current pan offset in screen pixels.
        pan: Point,
    },
    /// Zoomed and actively panning.
    Dragging {
        /// Current pan offset in screen pixels.
        pan: Point,
        /// Pointer position minus pan at drag start, so `pan = pointer - origin`.
        origin: Point,
        /// Whether the pan has changed since the drag started.
        moved: bool,
    },
}

impl ViewerState {
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        matches!(self, Self::Zoomed { .. } | Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Current pan offset; always the origin when not zoomed.
    #[must_use]
    pub fn pan(self) -> Point {
        match self {
            Self::Zoomed { pan } | Self::Dragging { pan, .. } => pan,
            Self::Closed | Self::Flat => Point::default(),
        }
    }

    /// The image transform implied by this state.
    #[must_use]
    pub fn transform(self) -> Transform {
        if self.is_zoomed() {
            Transform::zoomed(self.pan())
        } else {
            Transform::identity()
        }
    }

    /// CSS cursor shown over the image; empty means the stylesheet default.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Flat => CURSOR_ZOOM_IN,
            Self::Zoomed { .. } => CURSOR_GRAB,
            Self::Dragging { .. } => CURSOR_GRABBING,
        }
    }
}
