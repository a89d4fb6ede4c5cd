//! Dare Board Component
//!
//! The signed-in view: loads the collection once on mount and renders a card
//! per dare from the store.

use leptos::prelude::*;

use crate::board::card_views;
use crate::components::{DareCard, ErrorBanner};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn DareBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Load on mount
    Effect::new(move |_| {
        ctx.load();
    });

    let cards = move || card_views(&store.dares().read(), &store.liked().read());

    view! {
        <div class="container">
            <div class="col-lg-12">
                <br />
                <span class="pull-right">
                    <a on:click=move |_| ctx.sign_out()>"Log out"</a>
                </span>
                <h2>"Darezilla"</h2>
                <p>"Let's feed you with some dares!"</p>

                <ErrorBanner />

                <Show when=move || store.loading().get() && store.dares().read().is_empty()>
                    <p class="loading">"Loading dares..."</p>
                </Show>

                <div class="row">
                    <For
                        each=cards
                        // Whole card as key so changed counts or markers re-render
                        key=|card| card.clone()
                        children=move |card| view! { <DareCard card=card /> }
                    />
                </div>
            </div>
        </div>
    }
}
