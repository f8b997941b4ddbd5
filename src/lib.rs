pub mod ai;
pub mod commands;
pub mod config;
pub mod error;
pub mod playbook;
pub mod state;

use std::sync::Arc;

use ai::gemini::GeminiProvider;
use ai::provider::AiProvider;
use state::AppState;

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("playbook_studio_lib=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    // Load persisted config (or use defaults)
    let loaded_config = config::AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {}", e);
        config::AppConfig::default()
    });

    // The credential is resolved exactly once, here. Without it the app still
    // runs, but every generate attempt fails with an API-key error.
    let provider: Option<Arc<dyn AiProvider>> = match loaded_config.resolve_api_key() {
        Some(api_key) => Some(Arc::new(GeminiProvider::new(
            api_key,
            loaded_config.model.clone(),
        ))),
        None => {
            tracing::error!("GEMINI_API_KEY not set and no key in config; generation disabled");
            None
        }
    };

    let app_state = AppState::new(loaded_config, provider);

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            commands::playbook::get_playbook_catalog,
            commands::playbook::default_selections,
            commands::playbook::generate_playbook,
            commands::playbook::classify_error,
            commands::settings::get_settings,
            commands::settings::update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
