//! File intake surface
//!
//! Drop target plus a scrollable list of pending files with per-row
//! reorder/delete/preview controls. Collapses to the drop target alone
//! while the batch is empty.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, FileList};

use crate::app::PendingFile;

#[component]
pub fn FileUpload<FA, FD, FU, FW, FP>(
    files: ReadSignal<Vec<PendingFile>, LocalStorage>,
    on_files_added: FA,
    on_delete_file: FD,
    on_move_up: FU,
    on_move_down: FW,
    on_process: FP,
) -> impl IntoView
where
    FA: Fn(Vec<web_sys::File>) + Clone + Send + 'static,
    FD: Fn(usize) + Clone + Send + Sync + 'static,
    FU: Fn(usize) + Clone + Send + Sync + 'static,
    FW: Fn(usize) + Clone + Send + Sync + 'static,
    FP: Fn(()) + Clone + Send + Sync + 'static,
{
    let (is_dragging, set_is_dragging) = signal(false);
    let (fullscreen, set_fullscreen) = signal(None::<String>);

    let handle_files = {
        let on_files_added = on_files_added.clone();
        move |list: FileList| {
            let mut collected = Vec::new();
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    collected.push(file);
                }
            }
            on_files_added(collected);
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragging.set(false);
            if let Some(dt) = ev.data_transfer() {
                if let Some(list) = dt.files() {
                    handle_files(list);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragging.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            // File picker via a transient input element
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*,application/pdf");
            input.set_multiple(true);

            let handle_files = handle_files.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(list) = picker.files() {
                    handle_files(list);
                }
            }) as Box<dyn FnMut(_)>);
            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div class="upload-stage">
            <div class="upload-panel" class:has-files=move || !files.get().is_empty()>
                <div
                    class="drop-zone"
                    class:dragover=move || is_dragging.get()
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:click=on_click
                >
                    <div class="upload-icon">"📄"</div>
                    <p class="upload-title">"Select/Drop files here"</p>
                    <p class="text-muted">"Supported formats: JPEG, PNG, PDF"</p>
                </div>

                <Show when=move || !files.get().is_empty()>
                    <div class="file-list">
                        <p class="file-count">
                            {move || {
                                let count = files.with(|f| f.len());
                                format!("{} file{} selected", count, if count > 1 { "s" } else { "" })
                            }}
                        </p>
                        <For
                            each={move || files.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, file)| (*index, file.name.clone())
                            children={
                                let on_delete_file = on_delete_file.clone();
                                let on_move_up = on_move_up.clone();
                                let on_move_down = on_move_down.clone();
                                move |(index, file): (usize, PendingFile)| {
                                    let on_delete_file = on_delete_file.clone();
                                    let on_move_up = on_move_up.clone();
                                    let on_move_down = on_move_down.clone();
                                    let preview_url = file.preview_url.clone();
                                    view! {
                                        <div class="file-row">
                                            <div class="reorder-buttons">
                                                <button
                                                    class="btn-icon"
                                                    title="Move up"
                                                    disabled={index == 0}
                                                    on:click=move |_| on_move_up(index)
                                                >
                                                    "↑"
                                                </button>
                                                <button
                                                    class="btn-icon"
                                                    title="Move down"
                                                    disabled=move || index + 1 == files.with(|f| f.len())
                                                    on:click=move |_| on_move_down(index)
                                                >
                                                    "↓"
                                                </button>
                                            </div>
                                            <img
                                                class="thumb"
                                                src=file.preview_url.clone()
                                                alt=file.name.clone()
                                                title="Full screen"
                                                on:click=move |_| set_fullscreen.set(Some(preview_url.clone()))
                                            />
                                            <div class="file-meta">
                                                <p class="file-name">{file.name.clone()}</p>
                                                <p class="file-size">
                                                    {format!("{:.1} KB", file.size / 1024.0)}
                                                </p>
                                            </div>
                                            <button
                                                class="btn-icon delete"
                                                title="Delete"
                                                on:click=move |_| on_delete_file(index)
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <Show when=move || !files.get().is_empty()>
                <div class="process-actions">
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_process = on_process.clone();
                            move |_| on_process(())
                        }
                    >
                        "Process Images"
                    </button>
                </div>
            </Show>

            <Show when=move || fullscreen.get().is_some()>
                <div class="fullscreen-overlay" on:click=move |_| set_fullscreen.set(None)>
                    <button class="btn-icon close" title="Close">"✕"</button>
                    <img
                        src=move || fullscreen.get().unwrap_or_default()
                        alt="Full preview"
                    />
                </div>
            </Show>
        </div>
    }
}
