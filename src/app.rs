//! Application root: workflow controller and stage routing
//!
//! Holds the single source of truth for the current stage and the
//! accumulated data (pending batch, processed page images, OCR results).
//! Stage renderers receive read-only signals plus callbacks; every
//! mutation of shared state goes through the handlers defined here.

use std::collections::HashSet;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Url;

use crate::api::backend::{self, OcrResult};
use crate::components::{
    app_bar::AppBar, file_upload::FileUpload, image_gallery::ImageGallery,
    ocr_results::OcrResults, processing_stage::ProcessingStage,
};
use crate::intake;
use crate::pagination;
use crate::workflow::{self, WorkflowStage};

/// A user-selected file awaiting submission.
#[derive(Clone)]
pub struct PendingFile {
    pub file: web_sys::File,
    /// Display name, unique within the batch.
    pub name: String,
    /// Size in bytes.
    pub size: f64,
    /// Object URL for thumbnail and fullscreen rendering. Created once at
    /// intake and revoked when the file leaves the batch.
    pub preview_url: String,
}

fn viewport_width() -> i32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(pagination::NARROW_VIEWPORT_PX)
}

#[component]
pub fn App() -> impl IntoView {
    // `File` handles are !Send, so the batch lives in a local signal.
    let (files, set_files) = signal_local(Vec::<PendingFile>::new());
    let (processed_images, set_processed_images) = signal(Vec::<String>::new());
    let (ocr_results, set_ocr_results) = signal(Vec::<OcrResult>::new());
    let (stage, set_stage) = signal(WorkflowStage::Upload);

    // Gallery page size tracks the viewport. One listener for the app's
    // lifetime; App itself never unmounts.
    let (per_page, set_per_page) = signal(pagination::images_per_page(viewport_width()));
    let resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let next = pagination::images_per_page(viewport_width());
        if per_page.get_untracked() != next {
            set_per_page.set(next);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    }
    resize.forget();

    let on_files_added = move |new_files: Vec<web_sys::File>| {
        if new_files.is_empty() {
            return;
        }
        set_files.update(|batch| {
            let mut names: HashSet<String> = batch.iter().map(|f| f.name.clone()).collect();
            for file in new_files {
                let name = intake::unique_file_name(&file.name(), &names);
                let preview_url = match Url::create_object_url_with_blob(&file) {
                    Ok(url) => url,
                    Err(err) => {
                        gloo::console::error!("failed to create preview URL:", err);
                        continue;
                    }
                };
                names.insert(name.clone());
                batch.push(PendingFile {
                    name,
                    size: file.size(),
                    preview_url,
                    file,
                });
            }
        });
    };

    let on_delete_file = move |index: usize| {
        set_files.update(|batch| {
            if let Some(removed) = intake::remove_at(batch, index) {
                let _ = Url::revoke_object_url(&removed.preview_url);
            }
        });
    };

    let on_move_up = move |index: usize| {
        set_files.update(|batch| {
            intake::move_up(batch, index);
        });
    };

    let on_move_down = move |index: usize| {
        set_files.update(|batch| {
            intake::move_down(batch, index);
        });
    };

    let on_process = move |_: ()| {
        let batch = files.get_untracked();
        let Some(next_stage) = workflow::submit_stage(batch.len()) else {
            return;
        };
        set_stage.set(next_stage);
        spawn_local(async move {
            let uploads: Vec<(String, web_sys::File)> = batch
                .iter()
                .map(|f| (f.name.clone(), f.file.clone()))
                .collect();
            match backend::preprocess_images(&uploads).await {
                Ok(images) => {
                    set_processed_images.set(images);
                    set_stage.set(WorkflowStage::Review);
                }
                Err(err) => {
                    gloo::console::error!(format!("preprocessing failed: {}", err));
                    gloo::dialogs::alert("Error preprocessing images. Please try again.");
                    set_stage.set(WorkflowStage::Preprocessing.failure_fallback());
                }
            }
        });
    };

    let on_back_to_upload = move |_: ()| {
        // Processed images are stale once the batch can change again;
        // the pending batch itself is kept.
        set_processed_images.set(Vec::new());
        set_stage.set(WorkflowStage::Upload);
    };

    let on_run_ocr = move |_: ()| {
        if processed_images.get_untracked().is_empty() {
            return;
        }
        set_stage.set(WorkflowStage::Ocr);
        spawn_local(async move {
            match backend::run_ocr().await {
                Ok(results) => {
                    set_ocr_results.set(results);
                    set_stage.set(WorkflowStage::Results);
                }
                Err(err) => {
                    gloo::console::error!(format!("OCR failed: {}", err));
                    gloo::dialogs::alert("Error running OCR. Please try again.");
                    set_stage.set(WorkflowStage::Ocr.failure_fallback());
                }
            }
        });
    };

    let on_download = move |_: ()| {
        if let Err(err) = backend::download_results() {
            gloo::console::error!(format!("download navigation failed: {}", err));
        }
    };

    // Explicit reset instead of a full page reload: clear all four pieces
    // of state and return to the initial stage.
    let on_reset = move |_: ()| {
        set_files.update(|batch| {
            for file in batch.drain(..) {
                let _ = Url::revoke_object_url(&file.preview_url);
            }
        });
        set_processed_images.set(Vec::new());
        set_ocr_results.set(Vec::new());
        set_stage.set(WorkflowStage::Upload);
    };

    view! {
        <AppBar on_reset=on_reset />
        <main class="stage-container" data-stage=move || stage.get().as_str()>
            {move || match stage.get() {
                WorkflowStage::Upload => view! {
                    <FileUpload
                        files=files
                        on_files_added=on_files_added
                        on_delete_file=on_delete_file
                        on_move_up=on_move_up
                        on_move_down=on_move_down
                        on_process=on_process
                    />
                }
                .into_any(),
                WorkflowStage::Preprocessing => view! {
                    <ProcessingStage message="Preprocessing images to enhance quality..." />
                }
                .into_any(),
                WorkflowStage::Review => view! {
                    <ImageGallery
                        images=processed_images
                        per_page=per_page
                        on_back_to_upload=on_back_to_upload
                        on_run_ocr=on_run_ocr
                    />
                }
                .into_any(),
                WorkflowStage::Ocr => view! {
                    <ProcessingStage message="Performing OCR on processed images..." />
                }
                .into_any(),
                WorkflowStage::Results => view! {
                    <OcrResults results=ocr_results on_download=on_download />
                }
                .into_any(),
            }}
        </main>
    }
}
