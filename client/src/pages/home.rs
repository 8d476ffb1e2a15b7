//! Home page: the drawing surface, its toolbar, and the result overlay.
//!
//! ARCHITECTURE
//! ============
//! The page consumes the edge-triggered reset flag. Consuming it wipes the
//! session and bumps the clear sequence the canvas host watches, so the
//! raster and the session are cleared in the same reactive flush.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::result_overlay::ResultOverlay;
use crate::components::toolbar::Toolbar;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let reset_requested = Memo::new(move |_| session.with(|s| s.reset_requested));

    Effect::new(move || {
        if !reset_requested.get() {
            return;
        }
        let mut cleared = false;
        session.update(|s| cleared = s.take_reset());
        if cleared {
            leptos::logging::log!("session reset");
        }
    });

    view! {
        <div class="home">
            <Toolbar/>
            <CanvasHost/>
            <ResultOverlay/>
        </div>
    }
}
