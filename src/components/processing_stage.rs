//! In-flight stage renderer
//!
//! Indeterminate progress plus a status message. Deliberately carries no
//! controls: the workflow is locked to the in-flight stage until the
//! request resolves.

use leptos::prelude::*;

#[component]
pub fn ProcessingStage(message: &'static str) -> impl IntoView {
    view! {
        <div class="processing-stage">
            <div class="processing-icon">"⏳"</div>
            <div class="progress-bar indeterminate">
                <div class="progress-fill"></div>
            </div>
            <p class="progress-text">{message}</p>
        </div>
    }
}
