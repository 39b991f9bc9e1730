use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_LANGUAGE: &str = "python";
/// Language tag used when a request sends `"language": null`.
pub const NULL_LANGUAGE: &str = "null";
pub const MAX_REQUEST_BODY_BYTES: u64 = 1024 * 1024;

pub const CONFIG_DIR_NAME: &str = "codelyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const SUPPORTED_AI_PROVIDERS: &[&str] = &["openai"];

pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const STAGED_FILE_PREFIX: &str = "codelyzer-";

pub const PYLINT_BANNER_PREFIXES: &[&str] = &[
    "*********",
    "Your code",
    "------------------------------------------------------------------",
];
pub const BANDIT_BANNER_PREFIXES: &[&str] = &["Run started", "Test results", "Code scanned", "Total issues"];
pub const CHECKSTYLE_BANNER_PREFIXES: &[&str] = &["Starting audit", "Audit done"];

pub const NO_ISSUES_FOUND: &str = "No issues found.";
pub const NO_SECURITY_RISKS: &str = "No security risks detected.";
pub const NO_SUGGESTIONS: &str = "No suggestions at this time.";
pub const JAVA_SECURITY_NOT_IMPLEMENTED: &str = "Java security scanning not implemented.";

/// Bullet markers stripped, with whitespace, from the start of suggestion lines.
pub const SUGGESTION_BULLETS: &[char] = &['-', '•'];

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("java", "java"),
    ("rs", "rust"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("go", "go"),
    ("rb", "ruby"),
    ("php", "php"),
    ("c", "c"),
    ("cpp", "cpp"),
];

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
