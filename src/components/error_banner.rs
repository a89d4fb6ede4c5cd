//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Dismissable alert for the last failed request
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <Show when=move || store.last_error().get().is_some()>
            <div class="alert alert-danger" role="alert">
                <span class="error-text">{move || store.last_error().get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="close"
                    on:click=move |_| ctx.dismiss_error()
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
