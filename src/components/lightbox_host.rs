//! Bridge component between Leptos and the imperative `lightbox::Viewer`.
//!
//! ARCHITECTURE
//! ============
//! The viewer engine owns all zoom/pan/drag decisions and the image styling.
//! This host only translates DOM events (mouse pointer events, touch events,
//! clicks, and a window-level `keydown`) into engine calls, honours the
//! engine's `PreventDefault` requests, and republishes a [`ViewerView`]
//! snapshot so the modal's `show` class can follow it.

use leptos::prelude::*;
use lightbox::engine::{Action, Viewer};
use lightbox::input::ClickTarget;
#[cfg(feature = "csr")]
use lightbox::input::{Key, PointerKind};

use crate::state::viewer::ViewerView;
#[cfg(feature = "csr")]
use crate::util::viewer_input::{map_pointer_kind, pointer_point, touch_point, wants_prevent_default};

/// Copyable handle to the page's single lightbox.
///
/// The engine holds DOM nodes, so it lives in thread-local arena storage;
/// the handle itself is `Copy` and can be passed around through context.
#[derive(Clone, Copy)]
pub struct LightboxHandle {
    engine: StoredValue<Option<Viewer>, LocalStorage>,
    view: RwSignal<ViewerView>,
}

impl Default for LightboxHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LightboxHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { engine: StoredValue::new_local(None), view: RwSignal::new(ViewerView::default()) }
    }

    /// Bind the engine to the modal `<img>` once it is mounted.
    #[cfg(feature = "csr")]
    pub fn attach(&self, image: web_sys::HtmlImageElement) {
        self.engine.set_value(Some(Viewer::new(image)));
        self.view.set(ViewerView::default());
    }

    /// Show `src` enlarged; zoom and pan always start from scratch.
    pub fn open(&self, src: &str) {
        self.dispatch(|viewer| viewer.open(src));
    }

    /// Current snapshot for display-only consumers.
    #[must_use]
    pub fn view(&self) -> RwSignal<ViewerView> {
        self.view
    }

    /// Run one engine transition and republish the snapshot.
    ///
    /// Returns no actions when the image has not been mounted yet.
    pub fn dispatch(&self, handler: impl FnOnce(&mut Viewer) -> Vec<Action>) -> Vec<Action> {
        let Some((actions, snapshot)) = self
            .engine
            .try_update_value(|slot| {
                slot.as_mut().map(|viewer| {
                    let actions = handler(viewer);
                    (actions, ViewerView::from_core(&viewer.core))
                })
            })
            .flatten()
        else {
            log::debug!("lightbox event before image mounted");
            return Vec::new();
        };
        if !actions.is_empty() {
            self.view.set(snapshot);
        }
        actions
    }
}

/// `#image-modal` overlay holding the enlarged `#modal-image`.
#[component]
pub fn LightboxHost() -> impl IntoView {
    let lightbox = expect_context::<LightboxHandle>();
    let snapshot = lightbox.view();
    let image_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if let Some(image) = image_ref.get() {
                lightbox.attach(image);
            }
        });

        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            let actions = lightbox.dispatch(|viewer| viewer.on_key_down(&Key(ev.key())));
            if wants_prevent_default(&actions) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || keydown.remove());
    }

    let on_backdrop_click = move |_: leptos::ev::MouseEvent| {
        lightbox.dispatch(|viewer| viewer.on_click(ClickTarget::Backdrop));
    };

    // Image presses bubble here too.
    let on_backdrop_pointer_down = move |_: leptos::ev::PointerEvent| {
        lightbox.dispatch(Viewer::on_backdrop_pointer_down);
    };

    let on_image_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        lightbox.dispatch(|viewer| viewer.on_click(ClickTarget::Image));
    };

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(kind) = map_pointer_kind(&ev.pointer_type()) else {
                    return;
                };
                let point = pointer_point(&ev);
                let actions = lightbox.dispatch(|viewer| viewer.on_pointer_down(point, kind));
                if wants_prevent_default(&actions) {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(kind) = map_pointer_kind(&ev.pointer_type()) else {
                    return;
                };
                let point = pointer_point(&ev);
                let actions = lightbox.dispatch(|viewer| viewer.on_pointer_move(point, kind));
                if wants_prevent_default(&actions) {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if map_pointer_kind(&ev.pointer_type()).is_some() {
                    lightbox.dispatch(Viewer::on_pointer_up);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if map_pointer_kind(&ev.pointer_type()).is_some() {
                    lightbox.dispatch(Viewer::on_pointer_leave);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::TouchEvent| {
                if let Some(point) = touch_point(&ev) {
                    lightbox.dispatch(|viewer| viewer.on_pointer_down(point, PointerKind::Touch));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::TouchEvent| {
                let Some(point) = touch_point(&ev) else {
                    return;
                };
                let actions = lightbox.dispatch(|viewer| viewer.on_pointer_move(point, PointerKind::Touch));
                if wants_prevent_default(&actions) {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = move |_: leptos::ev::TouchEvent| {
        lightbox.dispatch(Viewer::on_pointer_up);
    };

    view! {
        <div id="image-modal" class="image-modal" class:show=move || snapshot.get().open on:click=on_backdrop_click on:pointerdown=on_backdrop_pointer_down>
            <img
                id="modal-image"
                class="image-modal__image"
                alt="Enlarged card"
                node_ref=image_ref
                on:click=on_image_click
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_end
            />
        </div>
    }
}
