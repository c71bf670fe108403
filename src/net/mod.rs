//! Networking modules for loading the card list.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one-shot HTTP fetch and `types` defines the JSON
//! schema of the static card file.

pub mod api;
pub mod types;
