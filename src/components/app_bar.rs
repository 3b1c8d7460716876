//! Application bar

use leptos::prelude::*;

#[component]
pub fn AppBar<F>(on_reset: F) -> impl IntoView
where
    F: Fn(()) + Clone + Send + 'static,
{
    view! {
        <header class="app-bar">
            <button
                class="btn-icon home"
                title="Start over"
                on:click=move |_| on_reset(())
            >
                "⌂"
            </button>
            <h1>"OCR Document Scanner"</h1>
        </header>
    }
}
