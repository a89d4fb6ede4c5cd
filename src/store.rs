//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every network
//! completion lands here through `apply_loaded` or `apply_liked`, so the
//! board and all cards render from one collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{Dare, LikeResponse};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Session flag; only consulted by the enforced session gate
    pub logged_in: bool,
    /// Dares in server order
    pub dares: Vec<Dare>,
    /// Ids liked since the last full load
    pub liked: Vec<u32>,
    /// A collection request is in flight
    pub loading: bool,
    /// Last failure, shown on the board until dismissed
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// A collection request went out; the held collection stays until it completes
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a collection fetch.
    ///
    /// Success replaces the collection and clears liked markers; failure
    /// keeps whatever was held before.
    pub fn apply_loaded(&mut self, result: Result<Vec<Dare>, ApiError>) {
        self.loading = false;
        match result {
            Ok(dares) => {
                self.dares = dares;
                self.liked.clear();
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Apply the outcome of liking dare `id`
    pub fn apply_liked(&mut self, id: u32, result: Result<LikeResponse, ApiError>) {
        match result {
            Ok(LikeResponse::Collection(dares)) => self.dares = dares,
            Ok(LikeResponse::Item(updated)) => {
                let Some(dare) = self.dares.iter_mut().find(|d| d.id == updated.id) else {
                    log::warn!("[LIKE] dare {} is not on the board", updated.id);
                    self.last_error = Some(format!("liked dare {} is no longer listed", updated.id));
                    return;
                };
                *dare = updated;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                return;
            }
        }
        if !self.is_liked(id) {
            self.liked.push(id);
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Mark a collection request as started
pub fn store_begin_load(store: &AppStore) {
    store.update(|state| state.begin_load());
}

/// Record a finished collection request
pub fn store_apply_loaded(store: &AppStore, result: Result<Vec<Dare>, ApiError>) {
    store.update(|state| state.apply_loaded(result));
}

/// Record a finished like request
pub fn store_apply_liked(store: &AppStore, id: u32, result: Result<LikeResponse, ApiError>) {
    store.update(|state| state.apply_liked(id, result));
}

/// Hide the error banner
pub fn store_dismiss_error(store: &AppStore) {
    store.last_error().set(None);
}
