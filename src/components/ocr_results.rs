//! Results-stage browser
//!
//! One OCR record per page, source image beside extracted text, with
//! wrap-around next/previous navigation. An empty result list gets an
//! explicit message rather than an error.

use leptos::prelude::*;

use crate::api::backend::OcrResult;
use crate::pagination;

const NO_TEXT_PLACEHOLDER: &str = "No text recognized.";

#[component]
pub fn OcrResults<F>(results: ReadSignal<Vec<OcrResult>>, on_download: F) -> impl IntoView
where
    F: Fn(()) + Clone + Send + Sync + 'static,
{
    let (current_index, set_current_index) = signal(0usize);

    let handle_previous = move |_| {
        let len = results.with_untracked(|r| r.len());
        set_current_index.update(|i| *i = pagination::wrap_previous(*i, len));
    };

    let handle_next = move |_| {
        let len = results.with_untracked(|r| r.len());
        set_current_index.update(|i| *i = pagination::wrap_next(*i, len));
    };

    let current = move || results.with(|r| r.get(current_index.get()).cloned());

    view! {
        <Show
            when=move || !results.get().is_empty()
            fallback=|| view! {
                <div class="results-empty">
                    <p>"No OCR results found."</p>
                </div>
            }
        >
            <div class="results-stage">
                <div class="results-header">
                    <h2>
                        {move || {
                            format!(
                                "Page {}/{}",
                                current_index.get() + 1,
                                results.with(|r| r.len()),
                            )
                        }}
                    </h2>
                    <button
                        class="btn btn-primary"
                        on:click={
                            let on_download = on_download.clone();
                            move |_| on_download(())
                        }
                    >
                        "Download (.txt)"
                    </button>
                </div>

                <button class="nav-arrow left" title="Previous" on:click=handle_previous>
                    "←"
                </button>
                <button class="nav-arrow right" title="Next" on:click=handle_next>
                    "→"
                </button>

                {move || {
                    current()
                        .map(|result| {
                            let text = match result.ocr_text.as_deref() {
                                Some(text) if !text.is_empty() => text.to_string(),
                                _ => NO_TEXT_PLACEHOLDER.to_string(),
                            };
                            view! {
                                <div class="result-panes">
                                    <div class="result-image">
                                        <img
                                            src=format!(
                                                "data:image/jpeg;base64,{}",
                                                result.image_base64,
                                            )
                                            alt=result.filename.clone()
                                        />
                                    </div>
                                    <div class="result-text">
                                        <p class="result-filename">{result.filename.clone()}</p>
                                        <pre class="ocr-text">{text}</pre>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
