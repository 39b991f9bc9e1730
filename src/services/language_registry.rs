use std::collections::HashMap;
use std::sync::Arc;
use crate::config::constants::{timeout_duration_secs, JAVA_SECURITY_NOT_IMPLEMENTED};
use crate::services::tools::external_tool::ExternalTool;
use crate::services::tools::unconfigured_tool::UnconfiguredTool;
use crate::structs::config::tools_config::ToolsConfig;
use crate::traits::tool_runner::ToolRunner;

/// The quality and security checkers for one language.
#[derive(Clone)]
pub struct LanguageTools {
    pub quality: Arc<dyn ToolRunner>,
    pub security: Arc<dyn ToolRunner>,
}

impl LanguageTools {
    pub fn new(quality: Arc<dyn ToolRunner>, security: Arc<dyn ToolRunner>) -> Self {
        Self { quality, security }
    }

    fn unconfigured(language: &str) -> Self {
        Self::new(
            Arc::new(UnconfiguredTool::linter_for(language)),
            Arc::new(UnconfiguredTool::scanner_for(language)),
        )
    }
}

/// Maps a language tag to its checkers. Tags match exactly.
#[derive(Clone, Default)]
pub struct LanguageRegistry {
    entries: HashMap<String, LanguageTools>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// python: pylint + bandit; java: checkstyle with no security scanner.
    pub fn from_config(config: &ToolsConfig) -> Self {
        let timeout = timeout_duration_secs(config.timeout_secs);

        Self::new()
            .with_language(
                "python",
                LanguageTools::new(
                    Arc::new(ExternalTool::pylint(&config.pylint, timeout)),
                    Arc::new(ExternalTool::bandit(&config.bandit, timeout)),
                ),
            )
            .with_language(
                "java",
                LanguageTools::new(
                    Arc::new(ExternalTool::checkstyle(&config.checkstyle, &config.checkstyle_config, timeout)),
                    Arc::new(UnconfiguredTool::new("security scanner", JAVA_SECURITY_NOT_IMPLEMENTED)),
                ),
            )
    }

    pub fn with_language(mut self, language: &str, tools: LanguageTools) -> Self {
        self.entries.insert(language.to_string(), tools);
        self
    }

    pub fn lookup(&self, language: &str) -> LanguageTools {
        self.entries
            .get(language)
            .cloned()
            .unwrap_or_else(|| LanguageTools::unconfigured(language))
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        languages.sort_unstable();
        languages
    }
}
