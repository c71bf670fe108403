#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use lightbox::engine::ViewerCore;

/// Reactive snapshot of the lightbox for components that only display it.
///
/// The engine itself lives in `LightboxHost`; this is republished after
/// every handled event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerView {
    pub open: bool,
    pub zoomed: bool,
    pub dragging: bool,
    pub source: Option<String>,
}

impl ViewerView {
    #[must_use]
    pub fn from_core(core: &ViewerCore) -> Self {
        Self {
            open: core.is_open(),
            zoomed: core.is_zoomed(),
            dragging: core.is_dragging(),
            source: core.source().map(str::to_owned),
        }
    }
}
