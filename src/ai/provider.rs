use async_trait::async_trait;

use crate::error::AppError;

/// A one-shot text-generation backend.
///
/// Implementations issue exactly one outbound request with the prompt as the
/// sole content payload and await exactly one response. No streaming, no
/// multi-turn state, no retries; each call is all-or-nothing.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}
