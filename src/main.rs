#![allow(async_fn_in_trait)]
//! Darezilla Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod models;
mod schema;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let href = web_sys::window().and_then(|window| window.location().href().ok());
    let (config, config_error) = match href.as_deref().map(AppConfig::from_href) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (AppConfig::default(), Some(err)),
        None => (AppConfig::default(), None),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[CONFIG] {}, using defaults", err);
    }
    log::info!("[CONFIG] api base {}, session gate {:?}", config.api_base, config.session_gate);

    mount_to_body(move || view! { <App config=config /> });
}
