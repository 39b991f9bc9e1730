//! Integration tests for the analysis endpoint and the external tool runner.

mod common;
