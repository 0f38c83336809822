//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::ChatWidget;
use crate::pages::{HomePage, LoginPage};

/// Root application component.
///
/// The chat widget mounts beside the route outlet so it floats over every
/// page; it never navigates.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Página no encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
            <ChatWidget />
        </Router>
    }
}
