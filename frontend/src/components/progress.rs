//! Upload/extraction progress indicator.

use leptos::*;

use crate::UploadPhase;

/// Progress bar sized to the current percentage, with a phase caption.
///
/// Rendered only while an attempt is busy; the parent gates visibility, so
/// this component just draws whatever the signals hold.
#[component]
pub fn UploadProgress(
    phase: ReadSignal<UploadPhase>,
    progress: ReadSignal<u32>,
) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get())
                ></div>
            </div>
            <p class="progress-caption">{move || phase.get().progress_caption()}</p>
        </div>
    }
}
