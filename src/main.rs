//! Food Dashboard Entry Point

mod api;
mod app;
mod components;
mod config;
mod dashboard;
mod error;
mod logger;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    tracing::info!("food dashboard starting, backend at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
