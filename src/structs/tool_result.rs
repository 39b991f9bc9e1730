/// Ordered message lines from one checker. Never empty: a sentinel line
/// stands in when there is nothing to report.
pub type ToolResult = Vec<String>;
