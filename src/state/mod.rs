//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `nav`, `viewer`) so each component
//! depends on a small focused model. All of it lives in `RwSignal`s provided
//! through context by `App`; there are no ambient globals.

pub mod gallery;
pub mod nav;
pub mod viewer;
