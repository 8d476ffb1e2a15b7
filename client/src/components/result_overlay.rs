//! Recognized expressions laid over the canvas as draggable labels.
//!
//! Every label is drawn at the one shared overlay position. While a label is
//! dragged only that label follows the pointer; on release the session anchor
//! moves, which re-anchors every label.

use leptos::prelude::*;

use crate::state::overlay::{LabelDrag, label_style};
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::util::typeset;
use canvas::geom::Point;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
pub fn ResultOverlay() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let drag = RwSignal::new(None::<LabelDrag>);

    let entries = Memo::new(move |_| session.with(|s| s.overlay.clone()));
    let anchor = Memo::new(move |_| session.with(|s| s.overlay_position));

    Effect::new(move || {
        entries.track();
        #[cfg(feature = "csr")]
        typeset::schedule_typeset();
    });

    let labels = move || {
        entries
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, markup)| {
                let style = move || {
                    let position = match drag.get() {
                        Some(d) if d.index == index => d.position,
                        _ => anchor.get(),
                    };
                    label_style(position)
                };
                let is_dragging = move || drag.with(|d| d.is_some_and(|d| d.index == index));

                let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
                    #[cfg(feature = "csr")]
                    {
                        ev.prevent_default();
                        if let Some(label) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            let _ = label.set_pointer_capture(ev.pointer_id());
                        }
                        drag.set(Some(LabelDrag::begin(index, client_point(&ev), anchor.get_untracked())));
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        let _ = (ev, index);
                    }
                };

                let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
                    #[cfg(feature = "csr")]
                    {
                        if drag.with_untracked(Option::is_none) {
                            return;
                        }
                        drag.update(|d| {
                            if let Some(d) = d.as_mut() {
                                d.move_to(client_point(&ev));
                            }
                        });
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        let _ = ev;
                    }
                };

                let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
                    #[cfg(feature = "csr")]
                    {
                        if let Some(label) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            let _ = label.release_pointer_capture(ev.pointer_id());
                        }
                    }
                    #[cfg(not(feature = "csr"))]
                    {
                        let _ = ev;
                    }
                    if let Some(done) = drag.get_untracked() {
                        drag.set(None);
                        session.update(|s| s.on_drag(done.index, done.position));
                    }
                };

                view! {
                    <div
                        class="result-label"
                        class:result-label--dragging=is_dragging
                        style=style
                        on:pointerdown=on_pointer_down
                        on:pointermove=on_pointer_move
                        on:pointerup=on_pointer_up.clone()
                        on:pointercancel=on_pointer_up
                    >
                        {markup}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <div class="result-overlay">{labels}</div> }
}

