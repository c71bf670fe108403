//! Browser helpers shared by components.

pub mod viewer_input;
pub mod year;
