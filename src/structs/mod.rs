pub mod ai;
pub mod analysis_report;
pub mod analysis_request;
pub mod analyze_request_body;
pub mod cli;
pub mod config;
pub mod tool_result;
