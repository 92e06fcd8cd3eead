//! Media-type validation for the upload selection.
//!
//! Validation runs at submission time, not at selection time: the picker's
//! extension filter is advisory, and nothing stops a user from picking an
//! arbitrary file through it. The declared media type of every file is
//! checked against a closed allow-list before any network traffic happens.

use crate::types::{AppError, AppResult, SelectedFile};

/// Declared media types accepted for extraction.
///
/// Spreadsheets (`.xlsx`), PDFs, and JPEG/PNG images.
pub const ALLOWED_TYPES: [&str; 4] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/pdf",
    "image/jpeg",
    "image/png",
];

/// Whether a declared media type is on the allow-list.
pub fn is_allowed_type(content_type: &str) -> bool {
    ALLOWED_TYPES.contains(&content_type)
}

/// Check every file in the selection against the allow-list.
///
/// Rejection carries every offending file name in selection order. An empty
/// selection passes here; the submit handler reports that case separately as
/// [`AppError::EmptySelection`] before validation runs.
pub fn validate_selection(files: &[SelectedFile]) -> AppResult<()> {
    let rejected: Vec<String> = files
        .iter()
        .filter(|file| !is_allowed_type(&file.content_type))
        .map(|file| file.name.clone())
        .collect();

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidFileType(rejected))
    }
}

/// Gate one submission attempt before any network traffic.
///
/// An empty selection is rejected ahead of the allow-list check, with its
/// own message. `Ok` means the transfer may start.
pub fn validate_submission(files: &[SelectedFile]) -> AppResult<()> {
    if files.is_empty() {
        return Err(AppError::EmptySelection);
    }
    validate_selection(files)
}
