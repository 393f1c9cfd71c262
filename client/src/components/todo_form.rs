//! New-todo form.

use leptos::prelude::*;

use crate::state::todos::TodosState;

#[component]
pub fn TodoForm(todos: RwSignal<TodosState>) -> impl IntoView {
    let title = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = title.get();
        if todo_api::todos::normalize_title(&draft).is_none() {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::net::api::add_todo(&draft).await {
                title.set(String::new());
                todos.update(|s| s.replace(items));
            }
        });
    };

    view! {
        <form class="ui form todo-form" on:submit=on_submit>
            <div class="field">
                <label>"Todo Title"</label>
                <input
                    type="text"
                    placeholder="Enter Todo..."
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <button class="ui blue button" type="submit">
                    "Add"
                </button>
            </div>
        </form>
    }
}
