//! Login Page
//!
//! Mock login flow: receives the chosen identity as route state, plays a
//! timed scan sequence, then writes the session flag and enters the
//! dashboard. The real biometric match lives outside this demo.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::components::Loading;
use crate::state::session;

const SCAN_PHASES: [&str; 4] = [
    "Capturing image...",
    "Analyzing facial geometry...",
    "Matching identity...",
    "Access granted",
];

/// Milliseconds per scan phase.
const PHASE_MS: u32 = 800;

/// Login simulation component.
#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    let account = location
        .state
        .get_untracked()
        .0
        .as_ref()
        .and_then(session::account_from_nav_state);

    let Some(account) = account else {
        // No identity in the navigation state: back to the selection view
        let navigate = navigate.clone();
        create_effect(move |_| {
            navigate("/user-select", Default::default());
        });
        return view! { <Loading /> }.into_view();
    };

    let (phase, set_phase) = create_signal(0usize);

    // Timeouts outlive the view; a flag flipped on cleanup keeps a stale
    // scan from logging the user in after they navigated away.
    let cancelled = Rc::new(Cell::new(false));
    on_cleanup({
        let cancelled = Rc::clone(&cancelled);
        move || cancelled.set(true)
    });

    for step in 1..SCAN_PHASES.len() {
        let cancelled = Rc::clone(&cancelled);
        Timeout::new(step as u32 * PHASE_MS, move || {
            if !cancelled.get() {
                set_phase.try_set(step);
            }
        })
        .forget();
    }

    {
        let account = account.clone();
        let cancelled = Rc::clone(&cancelled);
        let navigate = navigate.clone();
        Timeout::new(SCAN_PHASES.len() as u32 * PHASE_MS, move || {
            if cancelled.get() {
                return;
            }
            session::write_session(&account);
            navigate("/protected", Default::default());
        })
        .forget();
    }

    let picture = account.picture_url();
    let full_name = account.full_name.clone();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-900 via-gray-800 to-black text-white
                    flex flex-col items-center justify-center gap-6 relative overflow-hidden">
            <div class="absolute inset-0 bg-grid-pattern opacity-10" />
            <div class="absolute inset-0 bg-noise-pattern opacity-5" />

            <div class="fade-up w-full max-w-md p-8 bg-gray-800 bg-opacity-50 backdrop-blur-lg
                        rounded-2xl shadow-xl z-10 flex flex-col items-center">
                <h1 class="gradient-flow text-3xl font-bold mb-8 bg-clip-text text-transparent
                           bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                    "Verifying Identity"
                </h1>

                <img
                    src=picture
                    alt=full_name.clone()
                    class="scan-ring w-28 h-28 rounded-full object-cover border-2 border-blue-400 mb-6"
                />
                <p class="text-xl font-semibold mb-2">{full_name}</p>

                <p class="text-blue-400 text-sm h-5">
                    {move || SCAN_PHASES[phase.get().min(SCAN_PHASES.len() - 1)]}
                </p>

                // Phase progress dots
                <div class="flex space-x-2 mt-6">
                    {(0..SCAN_PHASES.len()).map(|step| view! {
                        <span class=move || {
                            if phase.get() >= step {
                                "w-2 h-2 rounded-full bg-blue-400"
                            } else {
                                "w-2 h-2 rounded-full bg-gray-600"
                            }
                        } />
                    }).collect_view()}
                </div>

                <A
                    href="/user-select"
                    class="mt-8 text-sm text-gray-400 hover:text-white transition-colors"
                >
                    "Cancel"
                </A>
            </div>
        </div>
    }
    .into_view()
}
