//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - multipart file upload to the extraction backend
//!
//! Services are UI-agnostic: they take plain values and return results,
//! leaving all signal plumbing to the components.

pub mod upload;

pub use upload::*;
