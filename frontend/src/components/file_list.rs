//! Selected-files panel.

use leptos::*;
use web_sys::File;

use crate::SelectedFile;

/// Lists the current selection with each file's size in mebibytes.
///
/// The parent gates visibility; an empty selection renders nothing here.
#[component]
pub fn FileList(files: ReadSignal<Vec<File>>) -> impl IntoView {
    view! {
        <div class="file-list">
            <h2>"Selected Files:"</h2>
            <ul>
                <For
                    each=move || files.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, file)| {
                        let meta = SelectedFile::from_file(&file);
                        let size = meta.size_display();
                        view! {
                            <li class="file-item">
                                <span class="file-name">{meta.name}</span>
                                <span class="file-size">{size}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
