//! Realm detail page: one realm's timeline with a header index.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/realms/:uri`. Route changes do not unmount this component, so the
//! fetch is keyed by the `uri` parameter and results for a previous uri are
//! discarded by `RealmState::apply`.

#[cfg(test)]
#[path = "realm_test.rs"]
mod realm_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use timeline::routes::REALM_PARAM;
use timeline::{ApiClient, Event, EventKind};

use crate::state::auth::AuthState;
use crate::state::realms::{RealmState, event_anchor};

/// Fragment link to an event on the current page.
pub(crate) fn anchor_href(event: &Event) -> String {
    format!("#{}", event_anchor(event))
}

fn load_realm(client: ApiClient, uri: String, state: RwSignal<RealmState>) {
    state.update(|s| s.start(uri.clone()));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::api::GlooTransport;
        let result = async {
            let realm = timeline::api::get_realm(&transport, &client, &uri).await?;
            let events = timeline::api::list_events(&transport, &client, &uri, None).await?;
            Ok((realm, events))
        }
        .await;
        if let Err(error) = &result {
            log::warn!("failed to load realm {uri}: {error}");
        }
        state.update(|s| s.apply(&uri, result));
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        let unavailable = timeline::ApiError::Transport(crate::net::api::UNAVAILABLE.to_owned());
        state.update(|s| s.apply(&uri, Err(unavailable)));
    }
}

fn render_event(event: Event) -> AnyView {
    let id = event_anchor(&event);
    match event.kind {
        EventKind::Header => view! { <h2 class="timeline__header" id=id>{event.value}</h2> }.into_any(),
        EventKind::Text => view! { <p class="timeline__text" id=id>{event.value}</p> }.into_any(),
    }
}

#[component]
pub fn RealmPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let state = RwSignal::new(RealmState::default());
    let client = Memo::new(move |_| auth.with(|a| a.store.client().clone()));
    let uri = Memo::new(move |_| params.read().get(REALM_PARAM));

    Effect::new(move || {
        if let Some(uri) = uri.get() {
            load_realm(client.get(), uri, state);
        }
    });

    view! {
        <div class="realm-page">
            <nav class="realm-page__nav">
                <a href="/">"← All realms"</a>
            </nav>
            <h1>{move || state.with(|s| s.realm.as_ref().map(|r| r.name.clone()).unwrap_or_default())}</h1>
            <Show when=move || state.with(|s| s.loading)>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="realm-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ol class="realm-page__toc">
                {move || {
                    state
                        .with(RealmState::headers)
                        .into_iter()
                        .map(|header| {
                            let href = anchor_href(&header);
                            view! {
                                <li>
                                    <a href=href>{header.value}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
            <section class="timeline">
                {move || state.get().events.into_iter().map(render_event).collect_view()}
            </section>
        </div>
    }
}
