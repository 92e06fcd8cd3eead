//! Hero section: page title and the upload instructions dialog.

use leptos::*;

/// Instructions shown by the help control.
const HELP_TEXT: &str =
    "Upload Instructions:\n1. Select files\n2. Click Upload\n3. Wait for extraction";

#[component]
pub fn Hero() -> impl IntoView {
    let show_help = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(HELP_TEXT);
        }
    };

    view! {
        <div class="hero">
            <h1>"Upload Files for AI Extraction"</h1>
            <button class="help-button" title="How uploading works" on:click=show_help>
                "?"
            </button>
        </div>
    }
}
