use leptos::*;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
pub mod session;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Installs logging, starts the runtime config load and mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("starting Dayflow frontend");

    // The page renders with defaults until config.json arrives.
    spawn_local(config::init());

    router::mount_app();
}
