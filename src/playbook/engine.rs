use std::sync::OnceLock;

use regex::Regex;

use crate::ai::provider::AiProvider;
use crate::error::AppError;

use super::catalog::Selections;
use super::prompt;

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:yaml|markdown)?").unwrap())
}

/// Strip fenced-code-block markers the model wraps around YAML or Markdown
/// output, then trim surrounding whitespace.
pub fn clean_generated_output(raw: &str) -> String {
    fence_pattern().replace_all(raw, "").trim().to_string()
}

/// Run one playbook generation: validate the selections, build the prompt,
/// issue a single request, and post-process the response.
///
/// Malformed or all-false selections are rejected before any network
/// activity. An empty text payload is a failure, never a success with empty
/// text.
pub async fn generate(
    provider: &dyn AiProvider,
    selections: &Selections,
) -> Result<String, AppError> {
    selections
        .matches_catalog()
        .map_err(AppError::InvalidSelections)?;
    if !selections.any_selected() {
        return Err(AppError::InvalidSelections(
            "no options selected".to_string(),
        ));
    }

    let prompt_text = prompt::build_prompt(selections);
    tracing::info!("requesting playbook generation ({} prompt chars)", prompt_text.len());

    let raw = provider.complete(&prompt_text).await?;
    if raw.trim().is_empty() {
        return Err(AppError::EmptyResponse);
    }

    Ok(clean_generated_output(&raw))
}
