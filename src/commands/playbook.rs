use tauri::State;

use crate::error::AppError;
use crate::playbook::catalog::{CategorySpec, Selections, CATALOG};
use crate::playbook::classify::{self, ErrorReport};
use crate::playbook::engine;
use crate::state::AppState;

/// The frontend renders the whole form from this; option data lives only in Rust.
#[tauri::command]
pub fn get_playbook_catalog() -> Vec<CategorySpec> {
    CATALOG.to_vec()
}

#[tauri::command]
pub fn default_selections() -> Selections {
    Selections::for_catalog()
}

#[tauri::command]
pub async fn generate_playbook(
    selections: Selections,
    state: State<'_, AppState>,
) -> Result<String, AppError> {
    // At most one request in flight: a submit while busy performs no second
    // outbound call. The guard clears the flag on every exit path.
    let _guard = state
        .generation
        .try_acquire()
        .ok_or(AppError::GenerationInProgress)?;

    let provider = state
        .provider
        .as_ref()
        .ok_or(AppError::MissingApiKey)?
        .clone();

    match engine::generate(provider.as_ref(), &selections).await {
        Ok(text) => {
            tracing::info!("playbook generated ({} chars)", text.len());
            Ok(text)
        }
        Err(e) => {
            tracing::warn!("playbook generation failed: {}", e);
            Err(e)
        }
    }
}

/// Display-layer classification of a propagated error message.
#[tauri::command]
pub fn classify_error(message: String) -> ErrorReport {
    classify::report(message)
}
