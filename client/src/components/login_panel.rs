//! Sign-in form and session badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the main page. Shows the form while signed out, the user name
//! with a logout button while signed in, and the last login failure.

#[cfg(test)]
#[path = "login_panel_test.rs"]
mod login_panel_test;

use leptos::prelude::*;
use timeline::{AuthStatus, Credentials};

use crate::state::auth::{AuthState, logout, spawn_login};

/// Trim inputs and build credentials, or explain what is missing.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials::new(email, password))
}

pub(crate) fn status_label(status: AuthStatus) -> &'static str {
    match status {
        AuthStatus::Idle => "Signed out",
        AuthStatus::Started => "Signing in...",
        AuthStatus::Success => "Signed in",
        AuthStatus::Error => "Sign-in failed",
    }
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let pending = move || auth.with(|a| a.store.is_login_pending());
    let signed_in = move || auth.with(|a| a.store.is_authenticated());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => {
                form_error.set(None);
                password.set(String::new());
                spawn_login(auth, credentials);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <section class="login-panel">
            <p class="login-panel__status">{move || status_label(auth.with(|a| a.store.status()))}</p>
            <Show
                when=signed_in
                fallback=move || {
                    view! {
                        <form class="login-form" on:submit=on_submit>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=pending>
                                "Sign in"
                            </button>
                        </form>
                    }
                }
            >
                <span class="login-panel__user">{move || auth.with(AuthState::display_name)}</span>
                <Show when=move || auth.with(|a| a.store.is_admin())>
                    <span class="login-panel__badge">"admin"</span>
                </Show>
                <button class="login-button" on:click=move |_| logout(auth)>
                    "Sign out"
                </button>
            </Show>
            <Show when=move || form_error.get().is_some()>
                <p class="login-message">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || auth.with(|a| a.last_error.is_some())>
                <p class="login-message login-message--error">
                    {move || auth.with(|a| a.last_error.clone().unwrap_or_default())}
                </p>
            </Show>
        </section>
    }
}
