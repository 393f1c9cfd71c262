//! Header menu with logout, username and the clickable profile avatar.
//!
//! Clicking the avatar opens a hidden file picker; the chosen image is
//! uploaded immediately and the avatar switches to the server's copy.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::todos::TodosState;

#[component]
pub fn ProfileMenu(auth: RwSignal<AuthState>, todos: RwSignal<TodosState>, on_logout: Callback<()>) -> impl IntoView {
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_avatar_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let upload = match crate::util::upload::read_file(&file).await {
                    Ok(upload) => upload,
                    Err(e) => {
                        leptos::logging::warn!("reading profile photo failed: {e}");
                        todos.update(|s| s.error = Some(crate::net::api::UPLOAD_FAILED_MESSAGE.to_owned()));
                        return;
                    }
                };
                match crate::net::api::upload_photo(upload).await {
                    Ok(url) => todos.update(|s| s.profile_image = Some(url)),
                    Err(message) => todos.update(|s| s.error = Some(message.to_owned())),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="ui secondary menu">
            <div class="item">
                <button class="ui red button" on:click=move |_| on_logout.run(())>
                    <i class="sign-out icon"></i>
                    " Logout"
                </button>
            </div>
            <div class="right menu">
                <div class="item profile-menu">
                    <span class="profile-menu__name">{move || auth.get().display_name()}</span>
                    <input
                        type="file"
                        accept="image/*"
                        class="profile-menu__file"
                        style="display: none"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <img
                        class="ui circular image profile-menu__avatar"
                        alt="Profile"
                        src=move || todos.get().avatar_src()
                        on:click=on_avatar_click
                    />
                </div>
            </div>
        </div>
    }
}
