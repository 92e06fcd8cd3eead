//! Upload page component.
//!
//! Owns the whole upload lifecycle: file selection, submission-time
//! validation, the multipart request with transfer progress, the simulated
//! extraction delay, and the final status banner.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{FileList, StatusBanner, UploadProgress};
use crate::services::upload_files;
use crate::validate::validate_submission;
use crate::{
    AppResult, SelectedFile, UploadPhase, UploadResponse, EXTRACTION_DELAY_MS, PICKER_ACCEPT,
};

/// Synchronous half of a submission: gate the selection and write the
/// signals for whichever outcome applies. Returns `true` when the transfer
/// may start. A rejection falls back to `Idle` with only the error banner
/// set, and no request leaves the browser.
fn stage_submission(
    metas: &[SelectedFile],
    set_phase: WriteSignal<UploadPhase>,
    set_progress: WriteSignal<u32>,
    set_error: WriteSignal<Option<String>>,
    set_success: WriteSignal<Option<String>>,
) -> bool {
    match validate_submission(metas) {
        Err(err) => {
            log::warn!("🚫 {}", err);
            set_phase.set(UploadPhase::Idle);
            set_success.set(None);
            set_error.set(Some(err.to_string()));
            false
        }
        Ok(()) => {
            set_error.set(None);
            set_success.set(None);
            set_progress.set(0);
            set_phase.set(UploadPhase::Uploading);
            true
        }
    }
}

/// Apply a settled transfer: `Extracting` on success, `Failed` with the
/// error banner otherwise. Returns the response whose text the success
/// banner shows once the extraction pause elapses.
fn settle_transfer(
    outcome: AppResult<UploadResponse>,
    set_phase: WriteSignal<UploadPhase>,
    set_error: WriteSignal<Option<String>>,
) -> Option<UploadResponse> {
    match outcome {
        Ok(response) => {
            log::info!("✅ Upload accepted, extracting...");
            set_phase.set(UploadPhase::Extracting);
            Some(response)
        }
        Err(err) => {
            log::error!("❌ Upload failed: {}", err);
            set_phase.set(UploadPhase::Failed);
            set_error.set(Some(err.to_string()));
            None
        }
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let (files, set_files) = create_signal(Vec::<File>::new());
    let (phase, set_phase) = create_signal(UploadPhase::Idle);
    let (progress, set_progress) = create_signal(0u32);
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    // Replace the selection wholesale; validation waits until submit.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            let selected: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
            log::info!("📂 {} file(s) selected", selected.len());
            set_files.set(selected);
            set_error.set(None);
        }
    };

    let on_submit = move |_| {
        let selected = files.get();
        let metas: Vec<SelectedFile> = selected.iter().map(SelectedFile::from_file).collect();
        if !stage_submission(&metas, set_phase, set_progress, set_error, set_success) {
            return;
        }
        log::info!("📤 Uploading {} file(s)...", selected.len());

        spawn_local(async move {
            let outcome = upload_files(&selected, move |percent| set_progress.set(percent)).await;
            if let Some(response) = settle_transfer(outcome, set_phase, set_error) {
                // Stand-in for the real extraction pipeline.
                TimeoutFuture::new(EXTRACTION_DELAY_MS).await;
                set_phase.set(UploadPhase::Succeeded);
                set_success.set(Some(response.success_text()));
            }
        });
    };

    view! {
        <div class="upload-zone" id="uploadZone">
            <input
                type="file"
                id="fileInput"
                class="file-input-hidden"
                multiple=true
                accept=PICKER_ACCEPT
                on:change=on_file_change
                disabled=move || phase.get().is_busy()
            />
            <label for="fileInput" class="upload-label">
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Drag and drop files here, or click to select files"</p>
                <p class="upload-hint">"Supports Excel (.xlsx), PDF, and image files (JPEG, PNG)"</p>
            </label>
        </div>

        <Show
            when=move || !files.get().is_empty()
            fallback=|| view! { }
        >
            <FileList files=files/>
        </Show>

        <button
            class="submit-button"
            on:click=on_submit
            disabled=move || phase.get().is_busy() || files.get().is_empty()
        >
            {move || phase.get().submit_label()}
            <Show
                when=move || phase.get().is_busy()
                fallback=|| view! { }
            >
                <span class="pulse-dot"></span>
            </Show>
        </button>

        <Show
            when=move || phase.get().is_busy()
            fallback=|| view! { }
        >
            <UploadProgress phase=phase progress=progress/>
        </Show>

        <StatusBanner error=error success=success/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::validate::ALLOWED_TYPES;
    use crate::AppError;

    fn selected(name: &str, content_type: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            size_bytes: 1024.0,
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn accepted_submission_zeroes_the_bar_and_enters_uploading() {
        let runtime = create_runtime();
        let (phase, set_phase) = create_signal(UploadPhase::Failed);
        let (progress, set_progress) = create_signal(57u32);
        let (error, set_error) = create_signal(Some("old error".to_string()));
        let (success, set_success) = create_signal(Some("old success".to_string()));

        let metas = vec![selected("report.xlsx", ALLOWED_TYPES[0])];
        let started = stage_submission(&metas, set_phase, set_progress, set_error, set_success);

        assert!(started);
        assert_eq!(phase.get_untracked(), UploadPhase::Uploading);
        assert_eq!(progress.get_untracked(), 0);
        assert_eq!(error.get_untracked(), None);
        assert_eq!(success.get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn empty_submission_rejects_without_starting_a_transfer() {
        let runtime = create_runtime();
        let (phase, set_phase) = create_signal(UploadPhase::Succeeded);
        let (progress, set_progress) = create_signal(100u32);
        let (error, set_error) = create_signal(None::<String>);
        let (success, set_success) =
            create_signal(Some("Data extracted successfully!".to_string()));

        let started = stage_submission(&[], set_phase, set_progress, set_error, set_success);

        assert!(!started);
        assert_eq!(phase.get_untracked(), UploadPhase::Idle);
        assert_eq!(
            error.get_untracked().as_deref(),
            Some("Please select files to upload")
        );
        // The stale success banner clears; only one banner may show.
        assert_eq!(success.get_untracked(), None);
        // The bar is redrawn only when a transfer actually starts.
        assert_eq!(progress.get_untracked(), 100);

        runtime.dispose();
    }

    #[test]
    fn invalid_selection_rejects_with_the_offending_names() {
        let runtime = create_runtime();
        let (phase, set_phase) = create_signal(UploadPhase::Idle);
        let (_progress, set_progress) = create_signal(0u32);
        let (error, set_error) = create_signal(None::<String>);
        let (success, set_success) = create_signal(None::<String>);

        let metas = vec![
            selected("report.xlsx", ALLOWED_TYPES[0]),
            selected("notes.txt", "text/plain"),
        ];
        let started = stage_submission(&metas, set_phase, set_progress, set_error, set_success);

        assert!(!started);
        assert_eq!(phase.get_untracked(), UploadPhase::Idle);
        assert_eq!(
            error.get_untracked().as_deref(),
            Some("Unsupported file format(s): notes.txt")
        );
        assert_eq!(success.get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn settled_transfer_moves_to_extracting_on_success() {
        let runtime = create_runtime();
        let (phase, set_phase) = create_signal(UploadPhase::Uploading);
        let (error, set_error) = create_signal(None::<String>);

        let carried = settle_transfer(
            Ok(UploadResponse {
                message: Some("Extracted 12 rows".to_string()),
            }),
            set_phase,
            set_error,
        );

        assert_eq!(phase.get_untracked(), UploadPhase::Extracting);
        assert_eq!(error.get_untracked(), None);
        assert_eq!(carried.unwrap().success_text(), "Extracted 12 rows");

        runtime.dispose();
    }

    #[test]
    fn settled_transfer_moves_to_failed_with_the_banner_text() {
        let runtime = create_runtime();
        let (phase, set_phase) = create_signal(UploadPhase::Uploading);
        let (error, set_error) = create_signal(None::<String>);

        let carried = settle_transfer(
            Err(AppError::TransferFailure("bad file".to_string())),
            set_phase,
            set_error,
        );

        assert!(carried.is_none());
        assert_eq!(phase.get_untracked(), UploadPhase::Failed);
        assert_eq!(error.get_untracked().as_deref(), Some("bad file"));

        runtime.dispose();
    }
}
