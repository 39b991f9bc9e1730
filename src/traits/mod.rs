pub mod ai_provider;
pub mod tool_runner;
