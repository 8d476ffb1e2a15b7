//! Top bar: Reset, pen swatches, eraser toggle, and Calculate.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::palette::SWATCHES;

/// Toolbar over the canvas.
///
/// Every control only edits `SessionState`; the canvas host reacts to it.
#[component]
pub fn Toolbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let swatches = SWATCHES
        .iter()
        .map(|&swatch| {
            let is_active = move || session.with(|s| !s.eraser && s.color == swatch);
            let on_click = move |_| session.update(|s| s.set_tool(swatch));
            view! {
                <button
                    class="toolbar__swatch"
                    class:toolbar__swatch--active=is_active
                    title=swatch
                    style=format!("background-color: {swatch};")
                    on:click=on_click
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let eraser_active = move || session.with(|s| s.eraser);

    view! {
        <div class="toolbar">
            <button class="btn toolbar__reset" on:click=move |_| session.update(SessionState::trigger_reset)>
                "Reset"
            </button>
            <div class="toolbar__swatches">{swatches}</div>
            <button
                class="btn toolbar__eraser"
                class:btn--active=eraser_active
                on:click=move |_| session.update(SessionState::toggle_eraser)
            >
                "Eraser"
            </button>
            <button class="btn toolbar__calculate" on:click=move |_| session.update(SessionState::request_calculation)>
                "Calculate"
            </button>
        </div>
    }
}
