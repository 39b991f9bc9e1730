pub mod external_tool;
pub mod unconfigured_tool;
