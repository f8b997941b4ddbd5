use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Gemini API key not set")]
    MissingApiKey,

    #[error("Gemini API error ({status}): {body}")]
    AiProviderError { status: String, body: String },

    #[error("Network error while contacting the Gemini API: {0}")]
    Network(String),

    #[error("The API returned an empty response.")]
    EmptyResponse,

    #[error("A playbook generation is already in progress")]
    GenerationInProgress,

    #[error("Invalid selections: {0}")]
    InvalidSelections(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

// Implement Serialize manually so AppError can be returned from Tauri commands.
// Tauri requires command return errors to be Serialize. We serialize as the Display string.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
