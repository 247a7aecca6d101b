//! Loading Component
//!
//! Loading spinners for view transitions.

use leptos::*;

/// Full-page loading spinner with a caption.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="loading-spinner w-16 h-16" />
            <p class="mt-4 text-xl font-semibold">"Loading..."</p>
        </div>
    }
}

/// Inline loading spinner.
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
