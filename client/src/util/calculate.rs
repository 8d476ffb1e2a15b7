//! The Calculate round trip: export, submit, apply, reveal.
//!
//! Runs as a local task so drawing continues while a request is in flight.
//! Presses are neither debounced nor cancelled; overlapping requests complete
//! in whatever order the network returns them and each applies in turn.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::engine::Engine;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api;
use crate::state::session::SessionState;
use crate::util::reveal::{Reveal, reveal_plan};

/// Snapshot the canvas and variables now, then submit in the background.
pub fn spawn_calculation(engine: &Rc<RefCell<Option<Engine>>>, session: RwSignal<SessionState>, config: &ClientConfig) {
    let image = {
        let engine_ref = engine.borrow();
        let Some(engine) = engine_ref.as_ref() else {
            log::warn!("calculate pressed before the canvas mounted");
            return;
        };
        match engine.export_data_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("canvas export failed: {e:?}");
                return;
            }
        }
    };
    let (variables, generation) = session.with_untracked(|s| (s.current_variables().clone(), s.clear_seq));
    let base_url = config.api_base_url.clone();
    let delay_ms = config.reveal_delay_ms;
    let engine = Rc::clone(engine);

    leptos::task::spawn_local(async move {
        let entries = match api::calculate(&base_url, &image, &variables).await {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("error sending data: {e}");
                return;
            }
        };
        let bounds = engine.borrow().as_ref().and_then(Engine::scan_drawn_bounds);
        let mut shown = None;
        session.update(|s| {
            shown = s.apply_response_from(generation, entries);
            if shown.is_some() {
                s.set_overlay_from_bounds(bounds);
            }
        });
        let Some(shown) = shown else {
            log::info!("dropping calculate response that arrived after a reset");
            return;
        };
        arm_timers(session, reveal_plan(shown, delay_ms, generation));
    });
}

fn arm_timers(session: RwSignal<SessionState>, plan: Vec<Reveal>) {
    for Reveal { delay_ms, generation, result } in plan {
        Timeout::new(delay_ms, move || {
            session.update(|s| {
                s.reveal(generation, result);
            });
        })
        .forget();
    }
}
