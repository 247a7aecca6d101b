//! Home Page
//!
//! Landing view: marketing sections with scroll- and mouse-driven parallax
//! on the hero showcase.

use leptos::*;
use leptos_router::*;

const KEY_FEATURES: [&str; 3] = [
    "Facial Recognition",
    "Voice Authentication",
    "Multi-Factor Security",
];

const WHY_CHOOSE: [(&str, &str); 6] = [
    (
        "High Accuracy",
        "Achieve 99%+ accuracy with advanced AI-driven algorithms for real-time identification.",
    ),
    (
        "Fast Processing",
        "Instant verification under 1 second, ensuring seamless access control.",
    ),
    (
        "Secure and Private",
        "Compliant with international data privacy standards to keep your information safe.",
    ),
    (
        "Versatile Integration",
        "Easily integrate into your existing security system without hassle.",
    ),
    (
        "Enhanced Scalability",
        "Scalable to fit any system size. Maintain top performance as your security needs expand.",
    ),
    (
        "Robust AI Training",
        "Trained on diverse datasets for consistent accuracy across different lighting and angles.",
    ),
];

const HOW_IT_WORKS: [(&str, &str); 4] = [
    (
        "Capture Image",
        "The system captures a high-quality image of the user's face.",
    ),
    (
        "Analyze Features",
        "Advanced AI algorithms analyze facial features for identification.",
    ),
    (
        "Match Data",
        "The system matches the analyzed data with stored records.",
    ),
    (
        "Authenticate Access",
        "Access is granted or denied based on the match result.",
    ),
];

/// Perspective tilt for the hero showcase, following the pointer.
fn tilt_transform(mouse: (f64, f64), viewport: (f64, f64)) -> String {
    let rot_y = (mouse.0 - viewport.0 / 2.0) / 50.0;
    let rot_x = -(mouse.1 - viewport.1 / 2.0) / 50.0;
    format!("perspective(1000px) rotateY({rot_y:.2}deg) rotateX({rot_x:.2}deg)")
}

/// Vertical drift of the showcase backdrop as the page scrolls.
fn parallax_shift(scroll_y: f64) -> String {
    format!("translateY({:.1}px)", scroll_y * 0.2)
}

fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some((width, height))
        })
        .unwrap_or((1280.0, 720.0))
}

/// Landing page component.
#[component]
pub fn Home() -> impl IntoView {
    let (scroll_y, set_scroll_y) = create_signal(0.0f64);
    let (mouse, set_mouse) = create_signal((0.0f64, 0.0f64));

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(y) = window.scroll_y() {
                set_scroll_y.try_set(y);
            }
        }
    });
    let mouse_handle = window_event_listener(ev::mousemove, move |e| {
        set_mouse.try_set((f64::from(e.client_x()), f64::from(e.client_y())));
    });
    on_cleanup(move || {
        scroll_handle.remove();
        mouse_handle.remove();
    });

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-900 via-gray-800 to-black text-white overflow-y-auto">
            <div class="absolute inset-0 bg-grid-pattern opacity-10" />
            <div class="absolute inset-0 bg-noise-pattern opacity-5" />

            // Fixed header with brand and login entry point
            <header class="fixed w-full bg-gray-900 bg-opacity-80 backdrop-blur-lg z-10">
                <nav class="container mx-auto px-6 py-4">
                    <div class="flex justify-between items-center">
                        <span class="fade-in text-2xl font-bold bg-clip-text text-transparent
                                     bg-gradient-to-r from-blue-400 to-purple-600">
                            "VisageAuth"
                        </span>

                        <span class="fade-in text-xl font-medium bg-clip-text text-transparent
                                     bg-gradient-to-r from-blue-400 to-purple-600"
                              style="animation-delay: 500ms">
                            "Done by Insight Engineers"
                        </span>

                        <A
                            href="/user-select"
                            class="bg-blue-600 hover:bg-blue-700 text-white py-2 px-6 rounded-full
                                   transition duration-300 hover:scale-105"
                        >
                            "Login"
                        </A>
                    </div>
                </nav>
            </header>

            <main class="container mx-auto px-6 pt-32">
                <HeroSection scroll_y=scroll_y mouse=mouse />
                <KeyFeatures />
                <WhyChoose />
                <HowItWorks />
                <ContactSection />
            </main>
        </div>
    }
}

/// Hero section with the parallax showcase card.
#[component]
fn HeroSection(
    scroll_y: ReadSignal<f64>,
    mouse: ReadSignal<(f64, f64)>,
) -> impl IntoView {
    view! {
        <section class="flex flex-col md:flex-row items-center justify-between py-20 min-h-screen">
            <div class="fade-up md:w-1/2 mb-10 md:mb-0">
                <h1 class="gradient-flow text-5xl md:text-6xl font-bold mb-6 leading-tight">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r
                                 from-blue-400 via-purple-500 to-pink-500">
                        "Next-Gen"
                    </span>
                    " Biometric Authentication"
                </h1>
                <p class="text-xl text-gray-300 mb-8">
                    "Secure your digital presence with cutting-edge facial and voice \
                     recognition technology."
                </p>
                <A
                    href="/user-select"
                    class="inline-block bg-gradient-to-r from-blue-600 to-indigo-600 text-white
                           font-bold py-3 px-8 rounded-full transition duration-300
                           hover:shadow-lg hover:scale-105"
                >
                    "Get Started"
                </A>
            </div>

            <div class="fade-up md:w-1/2 relative" style="animation-delay: 200ms">
                <div
                    class="w-full h-64 md:h-96 bg-blue-900 rounded-2xl overflow-hidden shadow-2xl
                           transition-all duration-300"
                    style:transform=move || tilt_transform(mouse.get(), viewport_size())
                >
                    <div
                        class="absolute inset-0 bg-gradient-to-br from-blue-400 to-indigo-600 opacity-75"
                        style:transform=move || parallax_shift(scroll_y.get())
                    />
                    <div class="absolute inset-0 flex items-center justify-center text-8xl">
                        "🪪"
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn KeyFeatures() -> impl IntoView {
    view! {
        <section class="pt-0 pb-20 min-h-screen flex flex-col justify-center">
            <h2 class="gradient-flow text-4xl font-bold mb-12 text-center bg-clip-text
                       text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                "Key Features"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {KEY_FEATURES.into_iter().enumerate().map(|(idx, feature)| view! {
                    <div
                        class="fade-up bg-gray-800 bg-opacity-50 p-8 rounded-2xl shadow-lg
                               hover:shadow-xl transition-all duration-300 hover:scale-105
                               hover:bg-gray-700 group"
                        style=format!("animation-delay: {}ms", idx * 200)
                    >
                        <h3 class="text-2xl font-semibold mb-4 group-hover:text-blue-400
                                   transition-colors duration-300">
                            {feature}
                        </h3>
                        <p class="text-gray-400 group-hover:text-gray-300 transition-colors duration-300">
                            "One of the features that makes our multi-factor authentication possible."
                        </p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WhyChoose() -> impl IntoView {
    view! {
        <section class="py-20 min-h-screen flex flex-col justify-center">
            <h2 class="gradient-flow text-4xl font-bold mb-12 text-center bg-clip-text
                       text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                "Why Choose Our Face Recognition Solution?"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {WHY_CHOOSE.into_iter().enumerate().map(|(idx, (title, description))| view! {
                    <div
                        class="fade-up bg-gray-800 bg-opacity-50 p-8 rounded-2xl shadow-lg
                               hover:shadow-xl transition-all duration-300 hover:scale-105
                               hover:bg-gray-700 group"
                        style=format!("animation-delay: {}ms", idx * 200)
                    >
                        <h3 class="text-2xl font-semibold mb-4 group-hover:text-blue-400
                                   transition-colors duration-300">
                            {title}
                        </h3>
                        <p class="text-gray-400 group-hover:text-gray-300 transition-colors duration-300">
                            {description}
                        </p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-20 min-h-screen flex flex-col justify-center">
            <h2 class="gradient-flow text-4xl font-bold mb-12 text-center bg-clip-text
                       text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                "How It Works"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                {HOW_IT_WORKS.into_iter().enumerate().map(|(idx, (step, description))| view! {
                    <div
                        class="fade-up bg-gray-800 bg-opacity-50 p-8 rounded-2xl shadow-lg
                               hover:shadow-xl transition-all duration-300 hover:scale-105
                               hover:bg-gray-700 group"
                        style=format!("animation-delay: {}ms", idx * 200)
                    >
                        <h3 class="text-2xl font-semibold mb-4 group-hover:text-blue-400
                                   transition-colors duration-300">
                            {step}
                        </h3>
                        <p class="text-gray-400 group-hover:text-gray-300 transition-colors duration-300">
                            {description}
                        </p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Contact form markup. Submission is decorative on this demo.
#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-20 min-h-screen flex flex-col justify-center">
            <h2 class="gradient-flow text-4xl font-bold mb-12 text-center bg-clip-text
                       text-transparent bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500">
                "Contact Us"
            </h2>
            <div class="max-w-4xl mx-auto bg-gray-800 bg-opacity-50 p-8 rounded-2xl shadow-lg">
                <form class="space-y-6" on:submit=move |ev| ev.prevent_default()>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <ContactField id="first-name" label="First Name" kind="text" />
                        <ContactField id="last-name" label="Last Name" kind="text" />
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <ContactField id="email" label="Email" kind="email" />
                        <ContactField id="phone" label="Phone" kind="tel" />
                    </div>
                    <div>
                        <label class="block text-lg font-medium text-gray-300">"Message"</label>
                        <textarea
                            id="message"
                            rows="4"
                            placeholder="Your Message..."
                            class="mt-1 block w-full bg-gray-700 border border-gray-600 rounded-md
                                   p-2 text-white focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div class="text-center">
                        <button
                            type="submit"
                            class="w-full md:w-auto bg-gradient-to-r from-blue-600 to-indigo-600
                                   text-white font-bold py-3 px-8 rounded-full transition duration-300
                                   hover:shadow-lg hover:scale-105"
                        >
                            "Submit"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[component]
fn ContactField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-lg font-medium text-gray-300">{label}</label>
            <input
                type=kind
                id=id
                placeholder=format!("Enter {}", label)
                class="mt-1 block w-full bg-gray-700 border border-gray-600 rounded-md p-2
                       text-white focus:outline-none focus:ring-2 focus:ring-blue-500"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_is_flat_at_viewport_center() {
        let t = tilt_transform((640.0, 360.0), (1280.0, 720.0));
        assert_eq!(t, "perspective(1000px) rotateY(0.00deg) rotateX(0.00deg)");
    }

    #[test]
    fn test_tilt_follows_pointer_direction() {
        // pointer right of center tilts right, above center tilts up
        let t = tilt_transform((1280.0, 0.0), (1280.0, 720.0));
        assert_eq!(t, "perspective(1000px) rotateY(12.80deg) rotateX(7.20deg)");
    }

    #[test]
    fn test_parallax_shift_scales_with_scroll() {
        assert_eq!(parallax_shift(0.0), "translateY(0.0px)");
        assert_eq!(parallax_shift(500.0), "translateY(100.0px)");
    }
}
