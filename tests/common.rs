use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;

use codelyzer::enums::ai_provider_error::AiProviderError;
use codelyzer::services::code_analyzer::CodeAnalyzer;
use codelyzer::services::language_registry::{LanguageRegistry, LanguageTools};
use codelyzer::services::suggestion_client::SuggestionClient;
use codelyzer::services::tools::unconfigured_tool::UnconfiguredTool;
use codelyzer::structs::tool_result::ToolResult;
use codelyzer::traits::ai_provider::AiProvider;
use codelyzer::traits::tool_runner::ToolRunner;

/// Returns canned lines and counts how often it ran.
pub struct FakeTool {
    name: String,
    lines: ToolResult,
    pub calls: AtomicUsize,
}

impl FakeTool {
    pub fn new(name: &str, lines: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ToolRunner for FakeTool {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, _code: &str) -> ToolResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lines.clone()
    }
}

pub enum Reply {
    Text(&'static str),
    Fail(AiProviderError),
}

/// Answers questions with a fixed reply and everything else with `suggestions`.
pub struct FakeProvider {
    suggestions: Reply,
    answer: Reply,
    pub prompts: std::sync::Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(suggestions: Reply, answer: Reply) -> Arc<Self> {
        Arc::new(Self {
            suggestions,
            answer,
            prompts: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn replying(suggestions: &'static str) -> Arc<Self> {
        Self::new(Reply::Text(suggestions), Reply::Text("It looks fine."))
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn chat(&self, _system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let prompt = user_prompts.join("\n");
        let reply = if prompt.contains("\n\nQuestion: ") { &self.answer } else { &self.suggestions };
        self.prompts.lock().unwrap().push(prompt);

        match reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail(error) => Err(error.clone()),
        }
    }
}

/// python and java wired to fakes that report nothing, mirroring the real
/// tools on an empty snippet.
pub fn registry() -> LanguageRegistry {
    LanguageRegistry::new()
        .with_language(
            "python",
            LanguageTools::new(
                FakeTool::new("Pylint", &["No issues found."]),
                FakeTool::new("Bandit", &["No security risks detected."]),
            ),
        )
        .with_language(
            "java",
            LanguageTools::new(
                FakeTool::new("Checkstyle", &["No issues found."]),
                Arc::new(UnconfiguredTool::new("security scanner", "Java security scanning not implemented.")),
            ),
        )
}

pub fn analyzer(provider: Arc<FakeProvider>) -> Arc<CodeAnalyzer> {
    Arc::new(CodeAnalyzer::new(registry(), SuggestionClient::new(provider)))
}
