//! Docload - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading documents (Excel spreadsheets,
//! PDFs, JPEG/PNG images) to the AI extraction backend and following the
//! upload → extraction → result lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Container                                                   │
//! │  ├── Hero (title, instructions dialog)                      │
//! │  └── UploadPage                                             │
//! │      ├── drop zone + hidden file input                      │
//! │      ├── FileList (when files are selected)                 │
//! │      ├── submit button                                      │
//! │      ├── UploadProgress (while uploading/extracting)        │
//! │      └── StatusBanner (error or success)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, UploadPhase, etc.)
//! - [`validate`] - Media-type allow-list for the selection
//! - [`components`] - UI components (Hero, UploadPage, etc.)
//! - [`services`] - Backend communication (multipart upload)

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod validate;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile,
    // Phase
    UploadPhase,
    // API
    UploadResponse,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadPage/>
        </div>

        <Footer/>
    }
}
