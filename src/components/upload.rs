//! Upload Component
//!
//! Dropzone for the custom identity image and the async file decoding it
//! relies on.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::state::selection::{validate_upload, SelectionState};

/// Decode a file into a data URI.
///
/// Wraps the browser `FileReader` in a promise so callers can await the
/// one-shot read. The load and error callbacks are handed to the browser
/// and leaked; they fire at most once per read.
pub async fn file_to_data_url(file: web_sys::File) -> Result<String, String> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                let _ = reject.call1(&JsValue::NULL, &e);
                return;
            }
        };

        let onload = {
            let reader = reader.clone();
            let resolve = resolve.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let result = reader.result().unwrap_or(JsValue::NULL);
                let _ = resolve.call1(&JsValue::NULL, &result);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = {
            let reject = reject.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        if let Err(e) = reader.read_as_data_url(&file) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let result = JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to read the selected file.".to_string())?;

    result
        .as_string()
        .ok_or_else(|| "Failed to read the selected file.".to_string())
}

/// Dropzone for uploading a referral image.
///
/// Validation failures land in `error` and leave the selection untouched;
/// a successful read replaces the custom identity and selects it.
#[component]
pub fn Dropzone(
    selection: RwSignal<SelectionState>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = input.files().and_then(|files| files.get(0));
        let file = match file {
            Some(file) => file,
            None => {
                error.set(Some("No file selected for import.".to_string()));
                return;
            }
        };

        let name = file.name();
        if let Err(message) = validate_upload(&name) {
            error.set(Some(message));
            return;
        }
        error.set(None);

        spawn_local(async move {
            match file_to_data_url(file).await {
                Ok(data_uri) => {
                    // try_* forms: the read may outlive the view, and a
                    // late result is simply discarded
                    selection.try_update(|state| state.set_custom(&name, data_uri));
                }
                Err(message) => {
                    error.try_set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center w-full mt-3">
            <label class="flex flex-col items-center justify-center w-full border-2 border-gray-500
                          border-dashed rounded-lg cursor-pointer bg-gray-700/40
                          hover:border-indigo-400 hover:bg-gray-700/70 transition duration-300">
                <div class="flex flex-col items-center justify-center py-4">
                    <span class="bob text-2xl mb-2">"📤"</span>
                    <p class="font-semibold mb-1 text-sm text-gray-300">
                        "Click to upload referral image"
                    </p>
                    <p class="text-xs text-gray-400">"PNG, JPG or JPEG"</p>
                </div>
                <input
                    type="file"
                    accept=".png, .jpg, .jpeg"
                    class="hidden"
                    on:change=on_change
                />
            </label>

            // Inline validation error
            {move || {
                error.get().map(|message| view! {
                    <p class="fade-in text-red-500 text-xs mt-2">{message}</p>
                })
            }}
        </div>
    }
}
