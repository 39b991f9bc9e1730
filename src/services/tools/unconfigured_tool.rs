use async_trait::async_trait;
use crate::structs::tool_result::ToolResult;
use crate::traits::tool_runner::ToolRunner;

/// Stands in for a checker a language does not have. Never runs anything.
#[derive(Debug, Clone)]
pub struct UnconfiguredTool {
    name: String,
    message: String,
}

impl UnconfiguredTool {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn linter_for(language: &str) -> Self {
        Self::new("linter", &format!("No linter configured for {}.", language))
    }

    pub fn scanner_for(language: &str) -> Self {
        Self::new("security scanner", &format!("No security scanner configured for {}.", language))
    }
}

#[async_trait]
impl ToolRunner for UnconfiguredTool {

    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, _code: &str) -> ToolResult {
        vec![self.message.clone()]
    }
}
