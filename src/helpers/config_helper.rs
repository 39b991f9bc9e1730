use crate::config::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TOOL_TIMEOUT_SECS, OPENAI_API_KEY_ENV, OPENAI_BASE_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        "gpt-3.5-turbo".to_string()
    }

    pub fn default_base_url() -> String {
        OPENAI_BASE_URL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        256
    }

    pub fn default_temperature() -> f32 {
        0.2
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_tool_timeout_secs() -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }

    pub fn default_pylint() -> String {
        "pylint".to_string()
    }

    pub fn default_bandit() -> String {
        "bandit".to_string()
    }

    pub fn default_checkstyle() -> String {
        "checkstyle".to_string()
    }

    pub fn default_checkstyle_config() -> String {
        "/google_checks.xml".to_string()
    }
}
