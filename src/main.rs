//! Paper Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod export;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

const APP_NAME: &str = "PaperTodo";

fn main() {
    console_error_panic_hook::set_once();
    // Everything passes until the configured level is known
    let _ = console_logger::init_logger(APP_NAME, log::LevelFilter::Trace);
    let config = config::load_config();
    log::set_max_level(config.level_filter());
    log::info!("Starting {}", APP_NAME);

    mount_to_body(move || view! { <App config=config /> });
}
