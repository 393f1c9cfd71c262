//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, todos::TodosPage};
use crate::state::{auth::AuthState, todos::TodosState};

/// Route of the login screen.
pub const LOGIN_ROUTE: &str = "/";
/// Route of the todo list screen.
pub const TODOS_ROUTE: &str = "/todos";

/// Root application component.
///
/// Seeds auth state from session storage so a reload keeps the user signed in
/// for the lifetime of the tab.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_store(&crate::util::session_storage::BrowserSessionStore));
    let todos = RwSignal::new(TodosState::default());

    provide_context(auth);
    provide_context(todos);

    view! {
        <Title text="Todo App"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("todos") view=TodosPage/>
            </Routes>
        </Router>
    }
}
