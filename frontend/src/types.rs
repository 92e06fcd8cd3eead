//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Selection Types** - the user's chosen files
//! - **Phase Types** - upload/extraction lifecycle
//! - **API Types** - backend response structure
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_SUCCESS_MESSAGE;

// =============================================================================
// Selection Types
// =============================================================================

/// One file chosen by the user.
///
/// A typed projection of a browser `File` handle: exactly the attributes the
/// list rendering and the validator need. The handles themselves stay in the
/// component's selection signal and are replaced wholesale on every new
/// selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name as reported by the picker.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: f64,
    /// Declared media type (empty when the browser has no mapping).
    pub content_type: String,
}

impl SelectedFile {
    /// Capture the display and validation attributes of a browser file.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size_bytes: file.size(),
            content_type: file.type_(),
        }
    }

    /// Size in mebibytes with two decimals, e.g. `5.00 MB`.
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes / 1024.0 / 1024.0)
    }
}

// =============================================================================
// Phase Types
// =============================================================================

/// Lifecycle of one upload attempt.
///
/// Exactly one phase is active at a time. The happy path walks
/// Idle → Uploading → Extracting → Succeeded; an HTTP or network failure
/// moves Uploading → Failed. Precondition failures (empty or invalid
/// selection) fall back to Idle with an error banner and never leave the
/// browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing in flight; waiting for a selection or a submission.
    Idle,
    /// The multipart request is being transferred.
    Uploading,
    /// Upload accepted; simulated extraction delay running.
    Extracting,
    /// Extraction finished; success banner visible.
    Succeeded,
    /// Upload failed; error banner visible.
    Failed,
}

impl UploadPhase {
    /// Whether an attempt is unresolved. The picker and the submit control
    /// stay disabled while this holds, which is what guarantees a single
    /// in-flight upload per component instance.
    pub fn is_busy(self) -> bool {
        matches!(self, UploadPhase::Uploading | UploadPhase::Extracting)
    }

    /// Label for the submit control.
    pub fn submit_label(self) -> &'static str {
        match self {
            UploadPhase::Uploading => "Uploading...",
            UploadPhase::Extracting => "Extracting Data...",
            _ => "Upload and Extract Data",
        }
    }

    /// Caption under the progress bar while busy.
    pub fn progress_caption(self) -> &'static str {
        match self {
            UploadPhase::Extracting => "Extracting data with AI...",
            _ => "Uploading files...",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body of the upload endpoint's JSON responses.
///
/// Success and error responses share this shape; both carry at most an
/// optional human-readable `message`. Unknown fields are ignored so the
/// backend can grow its payload without breaking the frontend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Server-provided status text, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// Success banner text: the server message when it is non-empty,
    /// otherwise the default string.
    pub fn success_text(self) -> String {
        self.message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string())
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// One variant per failure class. `Display` output is the exact banner text,
/// so callers surface errors with `to_string()` and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Submit pressed with no files selected.
    EmptySelection,
    /// One or more selected files fail the media-type allow-list; carries
    /// the offending file names in selection order.
    InvalidFileType(Vec<String>),
    /// The upload request failed at the network or HTTP-status level;
    /// carries the user-facing message.
    TransferFailure(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptySelection => write!(f, "Please select files to upload"),
            AppError::InvalidFileType(names) => {
                write!(f, "Unsupported file format(s): {}", names.join(", "))
            }
            AppError::TransferFailure(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_label_follows_the_phase() {
        assert_eq!(UploadPhase::Idle.submit_label(), "Upload and Extract Data");
        assert_eq!(UploadPhase::Uploading.submit_label(), "Uploading...");
        assert_eq!(UploadPhase::Extracting.submit_label(), "Extracting Data...");
        assert_eq!(
            UploadPhase::Succeeded.submit_label(),
            "Upload and Extract Data"
        );
        assert_eq!(UploadPhase::Failed.submit_label(), "Upload and Extract Data");
    }

    #[test]
    fn only_inflight_phases_are_busy() {
        assert!(UploadPhase::Uploading.is_busy());
        assert!(UploadPhase::Extracting.is_busy());
        assert!(!UploadPhase::Idle.is_busy());
        assert!(!UploadPhase::Succeeded.is_busy());
        assert!(!UploadPhase::Failed.is_busy());
    }

    #[test]
    fn progress_caption_distinguishes_transfer_from_extraction() {
        assert_eq!(
            UploadPhase::Uploading.progress_caption(),
            "Uploading files..."
        );
        assert_eq!(
            UploadPhase::Extracting.progress_caption(),
            "Extracting data with AI..."
        );
    }

    #[test]
    fn success_text_falls_back_to_the_default() {
        let with_message = UploadResponse {
            message: Some("Extracted 12 rows".to_string()),
        };
        assert_eq!(with_message.success_text(), "Extracted 12 rows");

        let without_message = UploadResponse { message: None };
        assert_eq!(without_message.success_text(), "Data extracted successfully!");

        // A present-but-empty message reads as no message at all.
        let blank_message = UploadResponse {
            message: Some(String::new()),
        };
        assert_eq!(blank_message.success_text(), "Data extracted successfully!");
    }

    #[test]
    fn size_display_uses_two_decimal_mebibytes() {
        let report = SelectedFile {
            name: "report.xlsx".to_string(),
            size_bytes: 5.0 * 1024.0 * 1024.0,
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                .to_string(),
        };
        assert_eq!(report.size_display(), "5.00 MB");

        let scan = SelectedFile {
            name: "scan.png".to_string(),
            size_bytes: 1_572_864.0,
            content_type: "image/png".to_string(),
        };
        assert_eq!(scan.size_display(), "1.50 MB");
    }

    #[test]
    fn error_display_is_the_banner_text() {
        assert_eq!(
            AppError::EmptySelection.to_string(),
            "Please select files to upload"
        );
        assert_eq!(
            AppError::InvalidFileType(vec!["notes.txt".to_string(), "tool.exe".to_string()])
                .to_string(),
            "Unsupported file format(s): notes.txt, tool.exe"
        );
        assert_eq!(
            AppError::TransferFailure("bad file".to_string()).to_string(),
            "bad file"
        );
    }
}
