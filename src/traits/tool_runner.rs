use async_trait::async_trait;
use crate::structs::tool_result::ToolResult;

/// One quality or security checker. Implementations never fail: problems
/// with the underlying tool are reported as a line in the result.
#[async_trait]
pub trait ToolRunner: Send + Sync {

    fn name(&self) -> &str;

    async fn run(&self, code: &str) -> ToolResult;
}
