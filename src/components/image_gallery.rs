//! Review-stage gallery
//!
//! Pages through the processed page images. Page size follows the
//! viewport (one image on narrow screens, two otherwise; tracked by the
//! controller) and the current page is clamped whenever the page size
//! changes. Paging animates with a fixed transition delay; boundary
//! paging is a no-op.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

use crate::pagination;

/// Delay before the page flips, matching the slide-out animation.
const TRANSITION_MS: u32 = 300;

#[component]
pub fn ImageGallery<FB, FO>(
    images: ReadSignal<Vec<String>>,
    per_page: ReadSignal<usize>,
    on_back_to_upload: FB,
    on_run_ocr: FO,
) -> impl IntoView
where
    FB: Fn(()) + Clone + Send + 'static,
    FO: Fn(()) + Clone + Send + 'static,
{
    let (current_page, set_current_page) = signal(0usize);
    let (in_transition, set_in_transition) = signal(true);

    // Clamp the current page whenever the page size changes.
    Effect::new(move |prev: Option<usize>| {
        let size = per_page.get();
        if prev.is_some_and(|p| p != size) {
            let len = images.with_untracked(|i| i.len());
            set_current_page.update(|page| *page = pagination::clamp_page(*page, len, size));
        }
        size
    });

    let total_pages = move || pagination::total_pages(images.with(|i| i.len()), per_page.get());

    let go_to_page = move |target: usize| {
        set_in_transition.set(false);
        Timeout::new(TRANSITION_MS, move || {
            // A timer that fires after unmount is a no-op.
            let _ = set_current_page.try_set(target);
            let _ = set_in_transition.try_set(true);
        })
        .forget();
    };

    let handle_previous = move |_| {
        let page = current_page.get_untracked();
        if pagination::can_go_previous(page) {
            go_to_page(page - 1);
        }
    };

    let handle_next = move |_| {
        let page = current_page.get_untracked();
        let len = images.with_untracked(|i| i.len());
        if pagination::can_go_next(page, len, per_page.get_untracked()) {
            go_to_page(page + 1);
        }
    };

    let visible_images = move || {
        let start = current_page.get() * per_page.get();
        images.with(|imgs| {
            imgs.iter()
                .enumerate()
                .skip(start)
                .take(per_page.get())
                .map(|(i, img)| (i, img.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="gallery-stage">
            <div class="gallery-header">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_back_to_upload = on_back_to_upload.clone();
                        move |_| on_back_to_upload(())
                    }
                >
                    "← Add/Delete Files"
                </button>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_run_ocr = on_run_ocr.clone();
                        move |_| on_run_ocr(())
                    }
                >
                    "Perform OCR →"
                </button>
            </div>

            <div class="gallery-viewport">
                <button
                    class="nav-arrow left"
                    title="Previous page"
                    disabled=move || !pagination::can_go_previous(current_page.get())
                    on:click=handle_previous
                >
                    "←"
                </button>

                <div class="gallery-track" class:fading=move || !in_transition.get()>
                    <For
                        each=visible_images
                        key=|(index, _)| *index
                        children=move |(index, image): (usize, String)| {
                            view! {
                                <div class="gallery-card">
                                    <img
                                        src=format!("data:image/png;base64,{}", image)
                                        alt=format!("Page {}", index + 1)
                                    />
                                </div>
                            }
                        }
                    />
                </div>

                <button
                    class="nav-arrow right"
                    title="Next page"
                    disabled=move || {
                        !pagination::can_go_next(
                            current_page.get(),
                            images.with(|i| i.len()),
                            per_page.get(),
                        )
                    }
                    on:click=handle_next
                >
                    "→"
                </button>
            </div>

            <div class="page-dots">
                <For
                    each={move || (0..total_pages()).collect::<Vec<_>>()}
                    key=|index| *index
                    children=move |index: usize| {
                        view! {
                            <span
                                class="dot"
                                class:active=move || current_page.get() == index
                                on:click=move |_| {
                                    if current_page.get_untracked() != index {
                                        go_to_page(index);
                                    }
                                }
                            ></span>
                        }
                    }
                />
            </div>

            <p class="page-label">
                {move || format!("{} of {}", current_page.get() + 1, total_pages())}
            </p>
        </div>
    }
}
