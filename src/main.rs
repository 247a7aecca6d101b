//! VisageAuth Demo
//!
//! Demonstration front-end for a biometric-authentication product concept,
//! built with Leptos (WASM).
//!
//! # Views
//!
//! - Landing page with animated marketing sections
//! - User selection with an optional custom image upload
//! - Mock login flow that sets the session flag
//! - Session-guarded analytics dashboard
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: the only persistent state is the
//! `faceAuth` session flag in browser local storage.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
