//! Protected Page
//!
//! Session guard plus the mock analytics dashboard behind it.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{AnimatedCounter, BarChart, LineChart, SeriesPoint, StatCard};
use crate::state::session::{self, Account};

/// Six months of mock figures feeding both dashboard charts.
const MONTHLY_SERIES: [SeriesPoint; 6] = [
    SeriesPoint { label: "Jan", value: 4000.0 },
    SeriesPoint { label: "Feb", value: 3000.0 },
    SeriesPoint { label: "Mar", value: 5000.0 },
    SeriesPoint { label: "Apr", value: 4500.0 },
    SeriesPoint { label: "May", value: 6000.0 },
    SeriesPoint { label: "Jun", value: 5500.0 },
];

const TRANSACTIONS: [(&str, i64, &str); 5] = [
    ("John Doe", 2, "$250.00"),
    ("Jane Miller", 9, "$125.50"),
    ("Sam Carter", 17, "$890.00"),
    ("Priya Nair", 26, "$64.20"),
    ("Diego Ortiz", 41, "$412.75"),
];

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("📊", "Analytics"),
    ("🥧", "Reports"),
    ("👥", "Team"),
    ("📅", "Schedule"),
];

/// Authenticated view: guard on activation, dashboard once the session
/// flag checks out.
#[component]
pub fn Protected() -> impl IntoView {
    let (account, set_account) = create_signal(None::<Account>);

    // Session guard. Runs on activation; nothing below renders until an
    // account has been read back from the flag.
    let navigate = use_navigate();
    create_effect(move |_| match session::read_session() {
        Some(account) => set_account.set(Some(account)),
        None => navigate("/login", Default::default()),
    });

    view! {
        {move || account.get().map(|account| view! { <Dashboard account=account /> })}
    }
}

/// The mock analytics dashboard.
#[component]
fn Dashboard(account: Account) -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| {
        session::clear_session();
        navigate("/", Default::default());
    };

    let today = chrono::Local::now().format("%A, %B %e, %Y").to_string();
    let picture = account.picture_url();
    let full_name = account.full_name.clone();

    view! {
        <div class="fade-in min-h-screen bg-gradient-to-br from-gray-900 via-blue-900
                    to-indigo-900 text-white overflow-x-hidden">
            <div class="relative z-10 container mx-auto px-4 py-16">
                // Header with account identity and logout
                <header class="fade-up flex justify-between items-center mb-16">
                    <div class="flex items-center space-x-4">
                        <img
                            src=picture
                            alt=full_name.clone()
                            class="w-16 h-16 rounded-full object-cover border-2 border-blue-400
                                   transition duration-300 hover:scale-110"
                        />
                        <div>
                            <h2 class="text-2xl font-bold">{full_name}</h2>
                            <p class="text-blue-400">"Dashboard"</p>
                            <p class="text-gray-400 text-sm">{today}</p>
                        </div>
                    </div>
                    <button
                        on:click=on_logout
                        class="bg-red-500 hover:bg-red-600 text-white px-4 py-2 rounded-lg
                               flex items-center space-x-2 transition hover:scale-105"
                    >
                        <span>"⏻"</span>
                        <span>"Logout"</span>
                    </button>
                </header>

                // Stat cards
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    <StatCard title="Active Users" icon="📈" trend=2.5>
                        <AnimatedCounter target=15234 />
                    </StatCard>
                    <StatCard title="Revenue" icon="💵" trend={-1.8}>
                        "$"
                        <AnimatedCounter target=684250 />
                    </StatCard>
                    <StatCard title="New Clients" icon="👥" trend=5.2>
                        <AnimatedCounter target=384 />
                    </StatCard>
                    <StatCard title="Growth" icon="🚀" trend=3.1>
                        "12.5%"
                    </StatCard>
                </div>

                // Charts
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-12">
                    <section class="fade-up bg-white/10 backdrop-blur-lg rounded-xl p-6"
                             style="animation-delay: 200ms">
                        <h3 class="text-xl font-bold mb-4">"Revenue Overview"</h3>
                        <BarChart series=MONTHLY_SERIES.to_vec() />
                    </section>
                    <section class="fade-up bg-white/10 backdrop-blur-lg rounded-xl p-6"
                             style="animation-delay: 200ms">
                        <h3 class="text-xl font-bold mb-4">"User Activity"</h3>
                        <LineChart series=MONTHLY_SERIES.to_vec() />
                    </section>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <RecentTransactions />
                    <QuickActions />
                </div>
            </div>
        </div>
    }
}

/// Mock transaction feed.
#[component]
fn RecentTransactions() -> impl IntoView {
    view! {
        <section class="fade-up bg-white/10 backdrop-blur-lg rounded-xl p-6 md:col-span-2"
                 style="animation-delay: 400ms">
            <h3 class="text-xl font-bold mb-4">"Recent Transactions"</h3>
            <div class="space-y-4">
                {TRANSACTIONS.into_iter().enumerate().map(|(idx, (name, minutes_ago, amount))| view! {
                    <div
                        class="fade-up flex items-center justify-between bg-white/5 p-3 rounded-lg"
                        style=format!("animation-delay: {}ms", 400 + idx * 100)
                    >
                        <div class="flex items-center space-x-3">
                            <div class="w-10 h-10 bg-blue-500 rounded-full flex items-center
                                        justify-center">
                                "👤"
                            </div>
                            <div>
                                <p class="font-semibold">{name}</p>
                                <p class="text-sm text-gray-400">
                                    {format!("{} minutes ago", minutes_ago)}
                                </p>
                            </div>
                        </div>
                        <p class="font-bold">{amount}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Quick-action tiles. Decorative on this demo.
#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <section class="fade-up bg-white/10 backdrop-blur-lg rounded-xl p-6"
                 style="animation-delay: 400ms">
            <h3 class="text-xl font-bold mb-4">"Quick Actions"</h3>
            <div class="grid grid-cols-2 gap-4">
                {QUICK_ACTIONS.into_iter().map(|(icon, label)| view! {
                    <button class="flex flex-col items-center justify-center bg-white/5 p-4
                                   rounded-lg transition hover:scale-105 hover:bg-white/10">
                        <span class="text-2xl mb-2">{icon}</span>
                        <span>{label}</span>
                    </button>
                }).collect_view()}
            </div>
        </section>
    }
}
