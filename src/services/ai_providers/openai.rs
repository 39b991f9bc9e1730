use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::timeout_duration_secs;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{CodelyzerError, CodelyzerResult};
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAIProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> CodelyzerResult<Self> {
        let config = AiConfig::default();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CodelyzerError::system_error("building HTTP client", &e.to_string()))?;

        Ok(Self {
            api_key,
            api_key_env: config.api_key_env,
            base_url: config.base_url,
            client,
            model: config.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// The credential is resolved here, once; a missing key only fails when a call is made.
    pub fn from_config(config: &AiConfig) -> CodelyzerResult<Self> {
        let provider = Self::new(config.resolve_api_key(), timeout_duration_secs(config.request_timeout_secs))?
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_sampling(config.max_tokens, config.temperature);

        Ok(Self { api_key_env: config.api_key_env.clone(), ..provider })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage::system(system_prompt));
        }

        for prompt in user_prompts {
            messages.push(OpenAIMessage::user(prompt));
        }

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(system_prompt, user_prompts),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    async fn make_request(&self, api_key: &str, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .bearer_auth(api_key)
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {

    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| AiProviderError::MissingCredential {
            provider: self.name().to_string(),
            env_var: self.api_key_env.clone(),
        })?;

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(api_key, url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        body.first_content()
            .map(|content| content.to_string())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}
