//! Application configuration.
//!
//! Centralized configuration for the Docload frontend. In development these
//! are hardcoded. In production they could be injected at build time or
//! loaded from a config file served next to the app.

/// Upload endpoint on the extraction backend.
///
/// Receives one multipart POST per submission.
pub const UPLOAD_URL: &str = "http://localhost:5000/api/upload/files";

/// Multipart field name every selected file is appended under.
pub const UPLOAD_FIELD: &str = "files";

/// Extensions offered by the browser file picker.
///
/// Advisory only; the authoritative check is the media-type allow-list in
/// [`crate::validate`].
pub const PICKER_ACCEPT: &str = ".xlsx,.pdf,.jpg,.jpeg,.png";

/// Simulated extraction delay after a successful upload (milliseconds).
///
/// Stand-in for the real extraction pipeline, which reports completion
/// out-of-band and is not part of this frontend.
pub const EXTRACTION_DELAY_MS: u32 = 5_000;

/// Success banner text when the server response carries no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Data extracted successfully!";

/// Error banner text when a failure carries no server message.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "An error occurred during file upload or extraction";
