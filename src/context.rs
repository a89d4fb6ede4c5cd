//! Application Context
//!
//! Actions provided to components via the Leptos Context API. Each action
//! runs its request on the event loop and hands the outcome to the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{DareClient, ReqwestTransport};
use crate::config::SessionGate;
use crate::models::LikeResponse;
use crate::store::{
    store_apply_liked, store_apply_loaded, store_begin_load, store_dismiss_error, AppStateStoreFields,
    AppStore,
};

/// App-wide actions provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single source of truth for everything rendered
    pub store: AppStore,
    /// Root view policy from config
    pub session_gate: SessionGate,
    client: StoredValue<DareClient<ReqwestTransport>>,
}

impl AppContext {
    pub fn new(store: AppStore, session_gate: SessionGate, client: DareClient<ReqwestTransport>) -> Self {
        Self {
            store,
            session_gate,
            client: StoredValue::new(client),
        }
    }

    /// Fetch the collection and replace the store's copy
    pub fn load(&self) {
        let store = self.store;
        let client = self.client.get_value();
        store_begin_load(&store);
        spawn_local(async move {
            let result = client.list_dares().await;
            match &result {
                Ok(dares) => log::info!("[BOARD] Loaded {} dares", dares.len()),
                Err(err) => log::warn!("[BOARD] Loading dares failed: {}", err),
            }
            store_apply_loaded(&store, result);
        });
    }

    /// Like dare `id`; every like fires its own request
    pub fn like(&self, id: u32) {
        let store = self.store;
        let client = self.client.get_value();
        spawn_local(async move {
            let result = client.like_dare(id).await;
            match &result {
                Ok(LikeResponse::Collection(dares)) => {
                    log::debug!("[LIKE] dare {} -> {} dares: {:?}", id, dares.len(), dares)
                }
                Ok(LikeResponse::Item(dare)) => log::debug!("[LIKE] dare {} -> {:?}", id, dare),
                Err(err) => log::warn!("[LIKE] dare {} failed: {}", id, err),
            }
            store_apply_liked(&store, id, result);
        });
    }

    pub fn sign_in(&self) {
        log::info!("[SESSION] signed in");
        self.store.logged_in().set(true);
    }

    pub fn sign_out(&self) {
        log::info!("[SESSION] signed out");
        self.store.logged_in().set(false);
    }

    pub fn dismiss_error(&self) {
        store_dismiss_error(&self.store);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
