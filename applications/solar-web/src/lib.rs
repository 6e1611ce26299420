pub mod api;
pub mod config;
pub mod models;
pub mod refresh;
pub mod render;
pub mod schedule;
pub mod state;

pub use api::{ApiClient, ApiError, SnapshotSource};
pub use config::{ClientConfig, ElementIds};
pub use models::StatusSnapshot;
pub use refresh::{RefreshOutcome, Refresher};
pub use render::Renderer;
pub use state::ClientState;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point - called when the WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting Solar Monitor");

    let config = ClientConfig::from_env();
    log::info!(
        "Polling {} every {}s",
        config.data_url,
        config.refresh_interval.as_secs()
    );

    let renderer = match render::dom::DomRenderer::new() {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("Cannot render solar data: {}", e);
            return;
        }
    };

    let client = ApiClient::new(config.data_url.clone());
    let ticks = schedule::interval_ticks(config.refresh_interval);
    let refresher = Refresher::new(client, renderer).with_elements(config.elements);

    wasm_bindgen_futures::spawn_local(async move {
        refresher.run(ticks).await;
    });
}
