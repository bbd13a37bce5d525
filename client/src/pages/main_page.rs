//! Main page listing realms, with the sign-in panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route (`/`). The realm list is fetched with whatever client the
//! session currently holds and refetched whenever that client changes, so
//! logging in or out refreshes the listing.

#[cfg(test)]
#[path = "main_page_test.rs"]
mod main_page_test;

use leptos::prelude::*;
use timeline::{ApiClient, Realm, Route};

use crate::components::login_panel::LoginPanel;
use crate::state::auth::AuthState;
use crate::state::realms::RealmsState;

pub(crate) fn realm_href(realm: &Realm) -> String {
    Route::Realm { uri: realm.uri.clone() }.href()
}

fn load_realms(client: ApiClient, realms: RwSignal<RealmsState>) {
    let Some(generation) = realms.try_update(RealmsState::start) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = timeline::api::list_realms(&crate::net::api::GlooTransport, &client).await;
        if let Err(error) = &result {
            log::warn!("failed to load realms: {error}");
        }
        realms.update(|s| s.apply(generation, result));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        let unavailable = timeline::ApiError::Transport(crate::net::api::UNAVAILABLE.to_owned());
        realms.update(|s| s.apply(generation, Err(unavailable)));
    }
}

#[component]
pub fn MainPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let realms = RwSignal::new(RealmsState::default());
    let client = Memo::new(move |_| auth.with(|a| a.store.client().clone()));

    Effect::new(move || load_realms(client.get(), realms));

    view! {
        <div class="main-page">
            <header class="main-page__header">
                <h1>"Timeline Wiki"</h1>
                <LoginPanel/>
            </header>
            <Show when=move || realms.with(|s| s.loading)>
                <p class="main-page__loading">"Loading realms..."</p>
            </Show>
            <Show when=move || realms.with(|s| s.error.is_some())>
                <p class="main-page__error">{move || realms.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="realm-list">
                {move || {
                    realms
                        .get()
                        .realms
                        .into_iter()
                        .map(|realm| {
                            let href = realm_href(&realm);
                            view! {
                                <li class="realm-list__item">
                                    <a href=href>{realm.name}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
