//! Dare Card Component
//!
//! One dare with its like button.

use leptos::prelude::*;

use crate::board::DareCardView;
use crate::context::use_app_context;

/// A single dare panel
#[component]
pub fn DareCard(card: DareCardView) -> impl IntoView {
    let ctx = use_app_context();

    let id = card.id;
    let added_by = card.added_by.map(|name| {
        view! { <small class="added-by">{format!("added by {}", name)}</small> }
    });
    let liked_marker = card.liked.then(|| view! { <span class="liked">"Liked!"</span> });

    view! {
        <div class="col-xs-4">
            <div class="panel panel-default">
                <div class="panel-heading">{card.title}</div>
                <div class="panel-body">
                    {card.body}
                    {added_by}
                </div>
                <div class="panel-footer">
                    {card.likes_label}
                    " "
                    <a class="btn btn-default" on:click=move |_| ctx.like(id)>
                        <span class="glyphicon glyphicon-thumbs-up"></span>
                    </a>
                    {liked_marker}
                </div>
            </div>
        </div>
    }
}
