//! Image viewer engine for the card gallery lightbox.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction state of the enlarged card image: open/close, click-to-zoom,
//! and drag-to-pan for mouse and touch input. The host UI layer is only
//! responsible for wiring DOM events to the engine and reflecting the
//! resulting [`engine::Action`]s (modal visibility, scroll suppression).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Viewer`] and testable [`engine::ViewerCore`] |
//! | [`transform`] | Zoom/pan transform and its CSS form |
//! | [`input`] | Input event types and the viewer state machine |
//! | [`consts`] | Scale factor and cursor names |

pub mod consts;
pub mod engine;
pub mod input;
pub mod transform;
