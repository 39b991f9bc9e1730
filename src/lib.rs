//! Combines external linters, a security scanner and LLM review feedback
//! into one report for a code snippet, served over `POST /analyze`.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
