//! Landing Component
//!
//! Shown to signed-out users when the session gate is enforced.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="container">
            <div class="col-xs-8 col-xs-offset-2 jumbotron text-center">
                <h1>"Darezilla"</h1>
                <p>"A load of dares"</p>
                <p>"Sign in to get access"</p>
                <a
                    class="btn btn-primary btn-login btn-block"
                    on:click=move |_| ctx.sign_in()
                >
                    "Sign In"
                </a>
            </div>
        </div>
    }
}
