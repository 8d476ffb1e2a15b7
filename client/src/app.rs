//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config;
use crate::pages::home::HomePage;
use crate::state::session::SessionState;

/// Root application component.
///
/// Resolves configuration, starts loading the typesetter, provides the shared
/// session context, and sets up the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();

    #[cfg(feature = "csr")]
    {
        if let Err(e) = crate::util::typeset::load(&config.typesetter_src) {
            log::warn!("typesetter script could not be injected: {e:?}");
        }
    }

    provide_context(config);
    provide_context(RwSignal::new(SessionState::default()));

    view! {
        <Title text="Calculator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
