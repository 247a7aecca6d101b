//! User Card Component
//!
//! Radio-style card for one selectable identity.

use leptos::*;

use crate::state::session::Account;

/// A single identity in the selection list. Clicking the card makes it the
/// current selection; the selected card gets a highlight ring.
#[component]
pub fn UserCard(
    account: Account,
    #[prop(into)] selected: Signal<bool>,
    /// Entrance animation offset for staggered lists.
    #[prop(default = 0)]
    delay_ms: u32,
    on_select: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let picture = account.picture_url();
    let full_name = account.full_name.clone();

    view! {
        <div
            on:click=on_select
            class=move || {
                let base = "fade-up flex items-center space-x-4 p-3 rounded-xl cursor-pointer \
                            transition duration-300 hover:scale-105 border";
                if selected.get() {
                    format!("{} bg-indigo-600/40 border-indigo-400", base)
                } else {
                    format!("{} bg-gray-700/40 border-transparent hover:bg-gray-700/70", base)
                }
            }
            style=format!("animation-delay: {}ms", delay_ms)
        >
            <img
                src=picture
                alt=full_name.clone()
                class="w-12 h-12 rounded-full object-cover border-2 border-blue-400"
            />
            <span class="font-semibold">{full_name}</span>

            // Check mark on the selected card
            {move || {
                if selected.get() {
                    view! {
                        <span class="ml-auto text-indigo-300">"✓"</span>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
