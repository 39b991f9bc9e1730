pub mod ai_providers;
pub mod code_analyzer;
pub mod language_registry;
pub mod staged_file;
pub mod suggestion_client;
pub mod tools;
