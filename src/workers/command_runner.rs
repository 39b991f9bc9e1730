use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{DEFAULT_LANGUAGE, SUPPORTED_FILE_EXTENSIONS};
use crate::enums::commands::Commands;
use crate::errors::{CodelyzerError, CodelyzerResult};
use crate::services::code_analyzer::CodeAnalyzer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::ui::analysis_server::AnalysisServer;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> CodelyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Analyze { file, language, prompt } => self.analyze_command(&file, language, prompt).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> CodelyzerResult<Config> {
        let config = match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'codelyzer init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> CodelyzerResult<()> {
        let mut config = self.load_config()?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        ConfigManager::validate_config(&config)?;

        let analyzer = Arc::new(CodeAnalyzer::from_config(&config)?);
        let server = AnalysisServer::new(analyzer, config.server);

        server
            .run_until(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("❌ Failed to listen for shutdown signal: {}", e);
                    return;
                }
                log::info!("🛑 Shutting down analysis server...");
            })
            .await
    }

    async fn analyze_command(&self, file: &Path, language: Option<String>, prompt: Option<String>) -> CodelyzerResult<()> {
        let config = self.load_config()?;
        let code = std::fs::read_to_string(file).map_err(|e| CodelyzerError::SystemError {
            operation: format!("reading {}", file.display()),
            reason: e.to_string(),
        })?;

        let language = language.unwrap_or_else(|| Self::language_for(file).to_string());
        log::info!("🔍 Analyzing {} as {}", file.display(), language);

        let analyzer = CodeAnalyzer::from_config(&config)?;
        let report = analyzer
            .analyze(&AnalysisRequest::new(Some(code), Some(language), prompt))
            .await?;

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn init_command(&self) -> CodelyzerResult<()> {
        log::info!("🚀 Initializing codelyzer configuration...");

        let path = match self.config_path.clone().or_else(ConfigManager::default_path) {
            Some(path) => path,
            None => {
                return Err(CodelyzerError::config_error(
                    "Cannot determine the home directory",
                    None,
                    Some("Pass --config <path> to choose where the file is written"),
                ))
            }
        };

        match ConfigManager::create_sample_config(&path) {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Run 'codelyzer validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> CodelyzerResult<()> {
        let config = self.load_config()?;
        log::info!("✅ Configuration is valid");

        if config.ai.resolve_api_key().is_some() {
            log::info!("🔑 {} API key found", config.ai.provider);
        } else {
            log::warn!("⚠️ No API key set in ${}", config.ai.api_key_env);
        }

        Ok(())
    }

    /// Falls back to python for unknown or missing extensions.
    fn language_for(file: &Path) -> &'static str {
        file.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| {
                SUPPORTED_FILE_EXTENSIONS
                    .iter()
                    .find(|(known, _)| known.eq_ignore_ascii_case(ext))
                    .map(|(_, language)| *language)
            })
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}
