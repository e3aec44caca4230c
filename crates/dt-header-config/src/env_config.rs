use serde::Deserialize;

/// Header configuration using environment variables
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct EnvConfig {
    pub macro_prefix: Option<String>,
    pub include_guard: Option<String>,
}

impl EnvConfig {
    /// Retrieves configuration from environment variables prefixed with `DT_HEADER_`
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("DT_HEADER_").from_env()
    }
}
