use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::constants::{
    timeout_duration_secs, BANDIT_BANNER_PREFIXES, CHECKSTYLE_BANNER_PREFIXES,
    DEFAULT_TOOL_TIMEOUT_SECS, NO_ISSUES_FOUND, NO_SECURITY_RISKS, PYLINT_BANNER_PREFIXES,
};
use crate::enums::tool_error::ToolError;
use crate::services::staged_file::StagedFile;
use crate::structs::tool_result::ToolResult;
use crate::traits::tool_runner::ToolRunner;

/// Argument replaced by the staged file's path.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// A command-line checker that reads the snippet from a staged file and
/// reports findings on stdout.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    name: String,
    program: String,
    args: Vec<String>,
    extension: String,
    banner_prefixes: Vec<String>,
    sentinel: String,
    timeout: Duration,
}

impl ExternalTool {
    pub fn new(name: &str, program: &str, extension: &str) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: vec![FILE_PLACEHOLDER.to_string()],
            extension: extension.to_string(),
            banner_prefixes: Vec::new(),
            sentinel: NO_ISSUES_FOUND.to_string(),
            timeout: timeout_duration_secs(DEFAULT_TOOL_TIMEOUT_SECS),
        }
    }

    pub fn pylint(program: &str, timeout: Duration) -> Self {
        Self::new("Pylint", program, "py")
            .with_args(&[FILE_PLACEHOLDER, "--disable=all", "--enable=E,W,C,R", "--output-format=text", "--score=n"])
            .with_banner_prefixes(PYLINT_BANNER_PREFIXES)
            .with_timeout(timeout)
    }

    pub fn bandit(program: &str, timeout: Duration) -> Self {
        Self::new("Bandit", program, "py")
            .with_args(&["-q", "-r", FILE_PLACEHOLDER, "--format", "short"])
            .with_banner_prefixes(BANDIT_BANNER_PREFIXES)
            .with_sentinel(NO_SECURITY_RISKS)
            .with_timeout(timeout)
    }

    pub fn checkstyle(program: &str, rules: &str, timeout: Duration) -> Self {
        Self::new("Checkstyle", program, "java")
            .with_args(&["-c", rules, FILE_PLACEHOLDER])
            .with_banner_prefixes(CHECKSTYLE_BANNER_PREFIXES)
            .with_timeout(timeout)
    }

    pub fn with_args(mut self, args: &[&str]) -> Self {
        self.args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_banner_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.banner_prefixes = prefixes.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_sentinel(mut self, sentinel: &str) -> Self {
        self.sentinel = sentinel.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn execute(&self, code: &str) -> Result<String, ToolError> {
        let staged = StagedFile::stage(code, &self.extension).map_err(ToolError::Staging)?;
        let result = self.invoke(staged.path()).await;
        staged.close();
        result
    }

    async fn invoke(&self, path: &Path) -> Result<String, ToolError> {
        let args: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                if arg == FILE_PLACEHOLDER {
                    path.as_os_str().to_owned()
                } else {
                    OsString::from(arg)
                }
            })
            .collect();

        log::debug!("🔧 Running {} {:?}", self.program, args);

        let mut command = Command::new(&self.program);
        command.args(&args).stdin(Stdio::null()).kill_on_drop(true);

        // Dropping the output future on timeout kills the child.
        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| ToolError::Timeout(self.timeout))?
            .map_err(|e| ToolError::spawn(&self.program, e))?;

        if !output.status.success() {
            log::debug!("{} exited with {}", self.name, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ToolRunner for ExternalTool {

    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, code: &str) -> ToolResult {
        match self.execute(code).await {
            Ok(stdout) => normalize_output(&stdout, &self.banner_prefixes, &self.sentinel),
            Err(e) => {
                log::warn!("⚠️ {} failed: {}", self.name, e);
                vec![format!("{} error: {}", self.name, e)]
            }
        }
    }
}

/// Drops blank lines and lines starting with a banner prefix; falls back to
/// `sentinel` when nothing is left.
pub fn normalize_output(stdout: &str, banner_prefixes: &[String], sentinel: &str) -> ToolResult {
    let messages: Vec<String> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !banner_prefixes.iter().any(|prefix| line.starts_with(prefix.as_str())))
        .map(|line| line.to_string())
        .collect();

    if messages.is_empty() {
        vec![sentinel.to_string()]
    } else {
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn pylint_banners_are_dropped() {
        let stdout = "************* Module snippet\n\
                      /tmp/codelyzer-ab12.py:1:0: C0114: Missing module docstring (missing-module-docstring)\n\
                      \n\
                      ------------------------------------------------------------------\n\
                      Your code has been rated at 5.00/10\n";

        let lines = normalize_output(stdout, &prefixes(PYLINT_BANNER_PREFIXES), NO_ISSUES_FOUND);

        assert_eq!(
            lines,
            vec!["/tmp/codelyzer-ab12.py:1:0: C0114: Missing module docstring (missing-module-docstring)"]
        );
    }

    #[test]
    fn bandit_summary_lines_are_dropped() {
        let stdout = "Run started:2024-01-01\n\
                      Test results:\n\
                      >> Issue: [B307:blacklist] Use of possibly insecure function - consider using safer ast.literal_eval.\n\
                      Code scanned:\n\
                      Total issues (by severity):\n";

        let lines = normalize_output(stdout, &prefixes(BANDIT_BANNER_PREFIXES), NO_SECURITY_RISKS);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(">> Issue: [B307:blacklist]"));
    }

    #[test]
    fn empty_output_yields_sentinel() {
        assert_eq!(normalize_output("", &[], NO_ISSUES_FOUND), vec![NO_ISSUES_FOUND]);
        assert_eq!(
            normalize_output("  \n\t\n", &prefixes(BANDIT_BANNER_PREFIXES), NO_SECURITY_RISKS),
            vec![NO_SECURITY_RISKS]
        );
    }

    #[test]
    fn prefixes_only_match_at_line_start() {
        let stdout = "  Your code is fine\n[WARN] Starting audit of Main.java\n";
        let lines = normalize_output(stdout, &prefixes(&["Your code", "Starting audit"]), NO_ISSUES_FOUND);

        assert_eq!(lines, vec!["  Your code is fine", "[WARN] Starting audit of Main.java"]);
    }

    #[test]
    fn builtin_tools_place_the_file_argument() {
        let pylint = ExternalTool::pylint("pylint", Duration::from_secs(10));
        let bandit = ExternalTool::bandit("bandit", Duration::from_secs(10));
        let checkstyle = ExternalTool::checkstyle("checkstyle", "/google_checks.xml", Duration::from_secs(10));

        assert_eq!(pylint.args[0], FILE_PLACEHOLDER);
        assert_eq!(pylint.extension, "py");
        assert_eq!(bandit.args, vec!["-q", "-r", FILE_PLACEHOLDER, "--format", "short"]);
        assert_eq!(bandit.sentinel, NO_SECURITY_RISKS);
        assert_eq!(checkstyle.args, vec!["-c", "/google_checks.xml", FILE_PLACEHOLDER]);
        assert_eq!(checkstyle.extension, "java");
    }
}
