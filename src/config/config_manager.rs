use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, SUPPORTED_AI_PROVIDERS};
use crate::errors::{CodelyzerError, CodelyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist; the default location falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> CodelyzerResult<Config> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(default_path) if default_path.exists() => Self::load_from(&default_path),
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> CodelyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| CodelyzerError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CodelyzerError::config_file_error(&path.display().to_string(), e.message()))?;
        Ok(config)
    }

    pub fn validate_config(config: &Config) -> CodelyzerResult<()> {
        if config.server.port == 0 {
            return Err(CodelyzerError::config_error(
                "Server port must be greater than 0",
                Some("server.port"),
                Some("Use a free port such as 5000"),
            ));
        }

        if config.tools.timeout_secs == 0 {
            return Err(CodelyzerError::config_error(
                "Tool timeout must be at least one second",
                Some("tools.timeout_secs"),
                None,
            ));
        }

        if !SUPPORTED_AI_PROVIDERS.contains(&config.ai.provider.as_str()) {
            return Err(CodelyzerError::config_error(
                &format!("Unsupported AI provider '{}'", config.ai.provider),
                Some("ai.provider"),
                Some(&format!("Supported providers: {}", SUPPORTED_AI_PROVIDERS.join(", "))),
            ));
        }

        if config.ai.max_tokens == 0 {
            return Err(CodelyzerError::config_error(
                "max_tokens must be greater than 0",
                Some("ai.max_tokens"),
                None,
            ));
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            return Err(CodelyzerError::config_error(
                "temperature must be between 0.0 and 2.0",
                Some("ai.temperature"),
                None,
            ));
        }

        if config.ai.request_timeout_secs == 0 {
            return Err(CodelyzerError::config_error(
                "Request timeout must be at least one second",
                Some("ai.request_timeout_secs"),
                None,
            ));
        }

        Ok(())
    }

    pub fn create_sample_config(path: &Path) -> CodelyzerResult<()> {
        let sample_config = r#"# Codelyzer configuration

[server]
host = "127.0.0.1"
port = 5000
# Allowed browser origins; leave empty to allow any origin
cors_origins = []

[ai]
provider = "openai"
model = "gpt-3.5-turbo"
base_url = "https://api.openai.com/v1"
max_tokens = 256
temperature = 0.2
request_timeout_secs = 30
# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"

[tools]
# Seconds before an external tool is killed
timeout_secs = 10
pylint = "pylint"
bandit = "bandit"
checkstyle = "checkstyle"
checkstyle_config = "/google_checks.xml"
"#;

        if path.exists() {
            return Err(CodelyzerError::config_file_error(
                &path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, sample_config)?;

        log::info!("📝 Sample configuration created at: {}", path.display());

        Ok(())
    }
}
