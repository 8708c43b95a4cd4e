//! Login and signup pages whose password icon watches what you type.
//!
//! The animation and form logic in `features` is target-independent and unit
//! tested on the host. Views, routing and the browser timer host only compile
//! for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Initializes logging from the loaded config and mounts the app on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use crate::app_lib::{telemetry, AppConfig};

    let config = AppConfig::load();
    telemetry::init(config.log_level);
    tracing::info!(
        commit = app_lib::build_info::git_commit_hash(),
        "starting lookout web"
    );
    leptos::prelude::mount_to_body(app::App);
}
