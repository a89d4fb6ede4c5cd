//! Darezilla Frontend App
//!
//! Root component: owns the store and picks the top-level view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{DareClient, ReqwestTransport};
use crate::board::{root_view, RootView};
use crate::components::{DareBoard, Landing};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let client = DareClient::new(config.api_base.clone(), ReqwestTransport);
    let gate = config.session_gate;

    // Provide context to all children
    provide_context(AppContext::new(store, gate, client));

    // Memo so toggling the flag only re-renders when the choice changes
    let current_view = Memo::new(move |_| root_view(store.logged_in().get(), gate));

    view! {
        {move || match current_view.get() {
            RootView::Landing => view! { <Landing /> }.into_any(),
            RootView::Board => view! { <DareBoard /> }.into_any(),
        }}
    }
}
