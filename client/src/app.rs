//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use timeline::routes::{REALM_PARAM, REALMS_SEGMENT};

use crate::pages::{main_page::MainPage, realm::RealmPage};
use crate::state::auth::AuthState;
use crate::util::scroll::ScrollRestoration;

/// Root application component.
///
/// Restores the session from storage, provides it to the tree, and maps
/// `/` and `/realms/:uri` to their pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore_from_storage());
    provide_context(auth);

    view! {
        <Title text="Timeline Wiki"/>

        <Router>
            <ScrollRestoration/>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=MainPage/>
                    <Route path=(StaticSegment(REALMS_SEGMENT), ParamSegment(REALM_PARAM)) view=RealmPage/>
                </Routes>
            </main>
        </Router>
    }
}
