use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    /// Inline key; takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AiConfig {
    /// Inline key first, then the configured environment variable. Blank keys are skipped.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            base_url: ConfigHelper::default_base_url(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            api_key_env: ConfigHelper::default_api_key_env(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_key_wins_over_environment() {
        let config = AiConfig {
            api_key: Some("sk-inline".to_string()),
            api_key_env: "CODELYZER_TEST_UNUSED_KEY".to_string(),
            ..AiConfig::default()
        };

        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-inline"));
    }

    #[test]
    fn blank_or_missing_key_resolves_to_none() {
        let config = AiConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "CODELYZER_TEST_DEFINITELY_UNSET_KEY".to_string(),
            ..AiConfig::default()
        };

        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn blank_inline_key_falls_back_to_environment() {
        let env_var = "CODELYZER_TEST_BLANK_INLINE_FALLBACK_KEY";
        std::env::set_var(env_var, "sk-from-env");
        let config = AiConfig {
            api_key: Some(String::new()),
            api_key_env: env_var.to_string(),
            ..AiConfig::default()
        };

        let resolved = config.resolve_api_key();
        std::env::remove_var(env_var);

        assert_eq!(resolved.as_deref(), Some("sk-from-env"));
    }
}
