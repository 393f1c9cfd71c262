//! Login page exchanging username + password for a token pair.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::TODOS_ROUTE;
use crate::state::auth::AuthState;

const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";

/// Require both fields; values are sent exactly as typed.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_signed_in_redirect(auth, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user, &pass).await {
                Ok(()) => {
                    auth.set(AuthState::signed_in(&user));
                    navigate(TODOS_ROUTE, NavigateOptions::default());
                }
                Err(message) => error.set(message.to_owned()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="ui container login-page">
            <h2 class="ui center aligned header">"Login"</h2>
            <form class="ui form login-form" on:submit=on_submit>
                <div class="field">
                    <label>"Username"</label>
                    <input
                        type="text"
                        placeholder="Enter username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="Enter password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button class="ui blue button" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-error">{move || error.get()}</p>
                </Show>
            </form>
        </div>
    }
}
