use serde::{Deserialize, Serialize};
use crate::structs::tool_result::ToolResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub quality: ToolResult,
    pub security: ToolResult,
    pub suggestions: ToolResult,
    #[serde(rename = "custom_ai_response")]
    pub answer: Option<String>,
}
