use tauri::State;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::AppState;

#[tauri::command]
pub fn get_settings(state: State<'_, AppState>) -> Result<AppConfig, AppError> {
    let config = state
        .config
        .lock()
        .map_err(|e| AppError::ConfigError(format!("failed to lock config: {}", e)))?;
    Ok(config.clone())
}

/// Persist to disk first, then swap the in-memory copy. The Gemini
/// credential is only read at startup, so a key saved here takes effect on
/// the next launch.
#[tauri::command]
pub fn update_settings(state: State<'_, AppState>, new_config: AppConfig) -> Result<(), AppError> {
    new_config.save()?;
    let mut config = state
        .config
        .lock()
        .map_err(|e| AppError::ConfigError(format!("failed to lock config: {}", e)))?;
    *config = new_config;
    tracing::info!("settings updated (theme: {})", config.theme);
    Ok(())
}
