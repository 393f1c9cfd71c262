//! Todo list page: header, create form and item list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the list and the profile
//! image once on mount, and after every successful mutation replaces the whole
//! list with the server's copy.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_menu::ProfileMenu;
use crate::components::todo_form::TodoForm;
use crate::components::todo_item::TodoItem;
use crate::state::auth::AuthState;
use crate::state::todos::TodosState;

/// Todo list page. Redirects to login if no session is stored.
#[component]
pub fn TodosPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let todos = expect_context::<RwSignal<TodosState>>();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    if auth.get_untracked().authenticated {
        todos.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_todos().await {
                Ok(items) => todos.update(|s| s.replace(items)),
                Err(err) => todos.update(|s| {
                    s.loading = false;
                    s.error = Some(err.to_string());
                }),
            }
        });
        leptos::task::spawn_local(async move {
            let image = crate::net::api::fetch_profile_image().await;
            todos.update(|s| s.profile_image = image);
        });
    }

    let on_logout = Callback::new(move |()| {
        crate::net::api::logout();
        todos.set(TodosState::default());
        auth.set(AuthState::default());
    });

    let on_toggle = Callback::new(move |(id, current): (i64, bool)| {
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::net::api::toggle_todo(id, current).await {
                todos.update(|s| s.replace(items));
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::net::api::delete_todo(id).await {
                todos.update(|s| s.replace(items));
            }
        });
    });

    view! {
        <Show
            when=move || auth.get().authenticated
            fallback=|| view! { <div class="ui container"><p>"Redirecting to login..."</p></div> }
        >
            <div class="ui container todos-page">
                <ProfileMenu auth=auth todos=todos on_logout=on_logout/>

                <h1 class="ui center aligned header">"Todo App"</h1>
                <TodoForm todos=todos/>

                <Show when=move || todos.get().error.is_some()>
                    <p class="todos-page__error">{move || todos.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || todos.get().loading>
                    <p>"Loading todos..."</p>
                </Show>

                <For
                    each=move || todos.get().items.into_iter().enumerate()
                    key=|(index, todo)| (*index, todo.clone())
                    children=move |(index, todo)| {
                        view! { <TodoItem index=index todo=todo on_toggle=on_toggle on_delete=on_delete/> }
                    }
                />
            </div>
        </Show>
    }
}
