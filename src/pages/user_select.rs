//! User Select Page
//!
//! Selection view: pick one of the preset identities or upload a referral
//! image, then continue to the login flow with the choice as route state.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, State};

use crate::components::{Dropzone, Loading, UserCard};
use crate::state::selection::{preset_accounts, SelectionState};
use crate::state::session::{self, AccountKind};

/// Selection page component.
#[component]
pub fn UserSelect() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let selection = create_rw_signal(SelectionState::new());
    let error = create_rw_signal(None::<String>);

    // Brief simulated load before the list appears
    Timeout::new(1500, move || {
        set_loading.try_set(false);
    })
    .forget();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-900 via-gray-800 to-black text-white
                    flex flex-col items-center justify-center gap-6 relative overflow-hidden">
            <div class="absolute inset-0 bg-grid-pattern opacity-10" />
            <div class="absolute inset-0 bg-noise-pattern opacity-5" />

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! { <SelectionPanel selection=selection error=error /> }.into_view()
                }
            }}
        </div>
    }
}

/// The identity list, upload dropzone and continue button.
#[component]
fn SelectionPanel(
    selection: RwSignal<SelectionState>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let navigate = use_navigate();

    let on_continue = move |_| {
        let account = selection.with(|state| state.selected().clone());
        navigate(
            "/login",
            NavigateOptions {
                state: State(session::account_to_nav_state(&account)),
                ..Default::default()
            },
        );
    };

    view! {
        <div class="fade-up w-full max-w-md p-6 bg-gray-800 bg-opacity-50 backdrop-blur-lg
                    rounded-2xl shadow-xl z-10">
            <h1 class="gradient-flow text-4xl font-bold mb-6 leading-tight bg-clip-text
                       text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500
                       text-center">
                "Select a User to Log In"
            </h1>

            // Preset identities
            <div class="space-y-2">
                {preset_accounts().into_iter().enumerate().map(|(idx, account)| {
                    let id = account.id.clone();
                    let is_selected = create_memo(move |_| {
                        selection.with(|state| state.selected().id == id)
                    });
                    let to_select = account.clone();

                    view! {
                        <UserCard
                            account=account
                            selected=is_selected
                            delay_ms=(idx as u32) * 150
                            on_select=move |_| selection.update(|state| state.select(to_select.clone()))
                        />
                    }
                }).collect_view()}

                // The custom identity, when one has been uploaded
                {move || {
                    selection.with(|state| state.custom().cloned()).map(|custom| {
                        let is_selected = Signal::derive(move || {
                            selection.with(|state| state.selected().kind == AccountKind::Custom)
                        });

                        view! {
                            <div class="relative">
                                <UserCard
                                    account=custom
                                    selected=is_selected
                                    on_select=move |_| selection.update(|state| {
                                        if let Some(account) = state.custom().cloned() {
                                            state.select(account);
                                        }
                                    })
                                />
                                <button
                                    on:click=move |_| selection.update(|state| state.clear_custom())
                                    class="absolute top-1/2 -translate-y-1/2 -right-8 text-indigo-400
                                           hover:text-indigo-200 text-xl transition hover:rotate-90"
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                }}
            </div>

            // Dropzone is offered until an upload is held
            {move || {
                if selection.with(|state| state.custom().is_none()) {
                    view! { <Dropzone selection=selection error=error /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="mt-4 flex justify-center">
                <button
                    on:click=on_continue
                    class="inline-flex items-center rounded-md bg-gradient-to-r from-blue-600
                           to-indigo-600 px-6 py-3 text-sm font-semibold text-white shadow-sm
                           transition duration-300 hover:scale-105"
                >
                    "Continue"
                    <span class="ml-1.5">"→"</span>
                </button>
            </div>
        </div>
    }
}
