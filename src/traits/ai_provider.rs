use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Display name used in error lines, e.g. "OpenAI".
    fn name(&self) -> &str;

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;
}
