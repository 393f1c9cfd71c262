//! One row of the todo list.

use leptos::prelude::*;
use todo_api::Todo;

use crate::state::todos::{item_heading, status_class, status_label};

/// Renders a todo with its position, completion badge and actions.
///
/// `on_toggle` receives `(id, current_complete)`; `on_delete` receives the id.
#[component]
pub fn TodoItem(
    index: usize,
    todo: Todo,
    on_toggle: Callback<(i64, bool)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let Todo { id, title, complete } = todo;

    view! {
        <div class="ui segment todo-item">
            <p class="ui big header">{item_heading(index, &title)}</p>
            <span class=status_class(complete)>{status_label(complete)}</span>
            <button class="ui blue button" on:click=move |_| on_toggle.run((id, complete))>
                "Update"
            </button>
            <button class="ui red button" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </div>
    }
}
