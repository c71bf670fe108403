//! Shared constants for the lightbox crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Scale factor applied while the image is zoomed in.
pub const ZOOM_SCALE: f64 = 2.0;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor over an open, unzoomed image (click zooms in).
pub const CURSOR_ZOOM_IN: &str = "zoom-in";

/// Cursor over a zoomed image that can be dragged.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor while a pan drag is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

// ── DOM ─────────────────────────────────────────────────────────

/// Class toggled on the image element while zoomed.
pub const ZOOMED_CLASS: &str = "zoomed";

/// Key name reported by the browser for the close key.
pub const ESCAPE_KEY: &str = "Escape";
