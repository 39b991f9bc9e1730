use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToolsConfig {
    #[serde(default = "ConfigHelper::default_tool_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_pylint")]
    pub pylint: String,

    #[serde(default = "ConfigHelper::default_bandit")]
    pub bandit: String,

    #[serde(default = "ConfigHelper::default_checkstyle")]
    pub checkstyle: String,

    #[serde(default = "ConfigHelper::default_checkstyle_config")]
    pub checkstyle_config: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_tool_timeout_secs(),
            pylint: ConfigHelper::default_pylint(),
            bandit: ConfigHelper::default_bandit(),
            checkstyle: ConfigHelper::default_checkstyle(),
            checkstyle_config: ConfigHelper::default_checkstyle_config(),
        }
    }
}
