//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::pages::{Home, Login, Protected, UserSelect};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/user-select" view=UserSelect />
                    <Route path="/login" view=Login />
                    <Route path="/protected" view=Protected />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium
                       transition-colors"
            >
                "Back to VisageAuth"
            </A>
        </div>
    }
}
