//! E-Waste Quest Frontend Entry Point

mod app;
mod boss;
mod components;
mod config;
mod context;
mod learning;
mod markdown;
mod models;
mod pet;
mod quiz;
mod recycling;
mod scan;
mod storage;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = AppConfig::default().with_query(&query);

    if let Err(e) = rolling_logger::init(config.log_level, config.log_capacity) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] starting (log level {})", config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
