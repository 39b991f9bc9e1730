use std::sync::Arc;
use crate::config::constants::{NO_SUGGESTIONS, SUGGESTION_BULLETS};
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{CodelyzerError, CodelyzerResult};
use crate::helpers::prompt_generator::{generate_question_prompt, generate_suggestions_prompt};
use crate::structs::tool_result::ToolResult;
use crate::traits::ai_provider::AiProvider;

/// Review suggestions and Q&A answers from a remote language model.
///
/// Remote failures come back as an error line or string. Only a missing
/// credential is returned as `Err`, since no request should be attempted
/// without one.
#[derive(Clone)]
pub struct SuggestionClient {
    provider: Arc<dyn AiProvider>,
}

impl SuggestionClient {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn suggestions(&self, code: &str, language: &str) -> CodelyzerResult<ToolResult> {
        let prompt = generate_suggestions_prompt(code, language);

        match self.provider.chat(String::new(), vec![prompt]).await {
            Ok(reply) => Ok(split_suggestions(&reply)),
            Err(e) => Ok(vec![self.absorb(e)?]),
        }
    }

    pub async fn answer(&self, code: &str, language: &str, question: &str) -> CodelyzerResult<String> {
        let prompt = generate_question_prompt(code, language, question);

        match self.provider.chat(String::new(), vec![prompt]).await {
            Ok(reply) => Ok(reply.trim().to_string()),
            Err(e) => self.absorb(e),
        }
    }

    fn absorb(&self, error: AiProviderError) -> CodelyzerResult<String> {
        match error {
            AiProviderError::MissingCredential { .. } => {
                log::error!("❌ {}", error);
                Err(CodelyzerError::config_error(
                    &error.to_string(),
                    Some("ai.api_key_env"),
                    Some("Export the API key or set ai.api_key in the configuration file"),
                ))
            }
            other => {
                log::warn!("⚠️ {} request failed: {}", self.provider.name(), other);
                Ok(format!("Error from {}: {}", self.provider.name(), other))
            }
        }
    }
}

/// One suggestion per non-empty line, without bullet markers.
pub fn split_suggestions(reply: &str) -> ToolResult {
    let suggestions: Vec<String> = reply
        .trim()
        .lines()
        .map(|line| {
            line.trim_start_matches(|c: char| c.is_whitespace() || SUGGESTION_BULLETS.contains(&c))
                .trim_end()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect();

    if suggestions.is_empty() {
        vec![NO_SUGGESTIONS.to_string()]
    } else {
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ai_provider::MockAiProvider;

    fn client_replying(reply: Result<String, AiProviderError>) -> SuggestionClient {
        let mut provider = MockAiProvider::new();
        provider.expect_name().return_const("OpenAI".to_string());
        provider
            .expect_chat()
            .times(1)
            .returning(move |_, _| reply.clone());
        SuggestionClient::new(Arc::new(provider))
    }

    #[test]
    fn bullets_and_whitespace_are_stripped() {
        let reply = "\n- Use descriptive names\n  • Add type hints  \n\t-   Split the function\n-\n\n";

        assert_eq!(
            split_suggestions(reply),
            vec!["Use descriptive names", "Add type hints", "Split the function"]
        );
    }

    #[test]
    fn numbered_lines_are_kept_as_is() {
        assert_eq!(split_suggestions("1. Add tests"), vec!["1. Add tests"]);
    }

    #[test]
    fn blank_reply_gives_sentinel() {
        assert_eq!(split_suggestions("  \n - \n"), vec![NO_SUGGESTIONS]);
    }

    #[tokio::test]
    async fn suggestions_send_one_user_prompt() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_chat()
            .withf(|system, prompts| {
                system.is_empty() && prompts.len() == 1 && prompts[0].contains("following java code")
            })
            .times(1)
            .returning(|_, _| Ok("- Use final fields".to_string()));
        let client = SuggestionClient::new(Arc::new(provider));

        let suggestions = client.suggestions("class A {}", "java").await.unwrap();

        assert_eq!(suggestions, vec!["Use final fields"]);
    }

    #[tokio::test]
    async fn remote_errors_become_a_single_line() {
        let client = client_replying(Err(AiProviderError::NetworkError("connection refused".to_string())));

        let suggestions = client.suggestions("x = 1", "python").await.unwrap();

        assert_eq!(suggestions, vec!["Error from OpenAI: Network Error: connection refused"]);
    }

    #[tokio::test]
    async fn answer_is_trimmed_not_split() {
        let client = client_replying(Ok("\n  Yes, it is safe.\nNo input is evaluated.  \n".to_string()));

        let answer = client.answer("def f(): pass", "python", "is this safe?").await.unwrap();

        assert_eq!(answer, "Yes, it is safe.\nNo input is evaluated.");
    }

    #[tokio::test]
    async fn answer_errors_become_a_string() {
        let client = client_replying(Err(AiProviderError::AuthenticationError("invalid key".to_string())));

        let answer = client.answer("x", "python", "why?").await.unwrap();

        assert_eq!(answer, "Error from OpenAI: Authentication Error: invalid key");
    }

    #[tokio::test]
    async fn missing_credential_is_a_configuration_error() {
        let client = client_replying(Err(AiProviderError::MissingCredential {
            provider: "OpenAI".to_string(),
            env_var: "OPENAI_API_KEY".to_string(),
        }));

        let error = client.suggestions("x = 1", "python").await.unwrap_err();

        assert!(error.is_configuration());
        assert!(error.to_string().contains("OPENAI_API_KEY"));
    }
}
