//! UI Components for the Docload upload page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Page title with the instructions dialog
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPage`] - File selection, validation and the upload flow
//! - [`FileList`] - Current selection with per-file sizes
//! - [`UploadProgress`] - Progress bar with a phase caption
//! - [`StatusBanner`] - Mutually exclusive error/success banners

mod file_list;
mod footer;
mod hero;
mod progress;
mod status;
mod upload;

pub use file_list::*;
pub use footer::*;
pub use hero::*;
pub use progress::*;
pub use status::*;
pub use upload::*;
