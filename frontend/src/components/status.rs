//! Error and success banners.

use leptos::*;

/// Mutually exclusive status banners below the submit control.
///
/// The upload flow clears both messages at the start of every attempt, so
/// at most one of the two signals holds text at any time.
#[component]
pub fn StatusBanner(
    error: ReadSignal<Option<String>>,
    success: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || error.get().is_some()
            fallback=|| view! { }
        >
            <div class="error-message">
                <span class="banner-icon">"⚠️"</span>
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>

        <Show
            when=move || success.get().is_some()
            fallback=|| view! { }
        >
            <div class="success-message">
                <span class="banner-icon">"✅"</span>
                {move || success.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
