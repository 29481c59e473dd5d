//! Feedback Board Frontend Entry Point

mod storage;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }

    mount_to_body(App);
}
