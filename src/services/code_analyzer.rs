use std::sync::Arc;
use std::time::Instant;
use crate::errors::CodelyzerResult;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::language_registry::LanguageRegistry;
use crate::services::suggestion_client::SuggestionClient;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;

/// Fans one request out to the language's checkers and the suggestion
/// client, then assembles the report.
pub struct CodeAnalyzer {
    registry: LanguageRegistry,
    suggestion_client: SuggestionClient,
}

impl CodeAnalyzer {
    pub fn new(registry: LanguageRegistry, suggestion_client: SuggestionClient) -> Self {
        Self {
            registry,
            suggestion_client,
        }
    }

    pub fn from_config(config: &Config) -> CodelyzerResult<Self> {
        let provider = OpenAIProvider::from_config(&config.ai)?;
        if !provider.has_credential() {
            log::warn!(
                "⚠️ No API key found in ${}; analysis requests will fail until it is set",
                config.ai.api_key_env
            );
        }

        Ok(Self::new(
            LanguageRegistry::from_config(&config.tools),
            SuggestionClient::new(Arc::new(provider)),
        ))
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Checkers, suggestions and the optional answer run concurrently.
    pub async fn analyze(&self, request: &AnalysisRequest) -> CodelyzerResult<AnalysisReport> {
        let started = Instant::now();
        let tools = self.registry.lookup(&request.language);
        let code = request.code.as_str();
        let language = request.language.as_str();

        log::info!(
            "🔍 Analyzing {} bytes of {} with {} and {}",
            code.len(),
            language,
            tools.quality.name(),
            tools.security.name()
        );

        let answer = async {
            match request.question.as_deref() {
                Some(question) => self.suggestion_client.answer(code, language, question).await.map(Some),
                None => Ok(None),
            }
        };

        let (quality, security, suggestions, answer) = futures::join!(
            tools.quality.run(code),
            tools.security.run(code),
            self.suggestion_client.suggestions(code, language),
            answer
        );

        let report = AnalysisReport {
            quality,
            security,
            suggestions: suggestions?,
            answer: answer?,
        };

        log::info!("✅ Analysis finished in {:.2}s", started.elapsed().as_secs_f64());

        Ok(report)
    }
}
