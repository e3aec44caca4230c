//! Layered configuration for header generation.

#[cfg(feature = "cli")]
use cli_config::CliConfig;
use dt_header::{RenderOptions, DEFAULT_MACRO_PREFIX};
use env_config::EnvConfig;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub mod cli_config;
pub mod env_config;
mod search;
pub mod toml_config;

/// Helper macro for getting a field from structs.
///
/// First argument must be `cli,` or `@without_cli`. The former automatically removes itself when the `cli` feature is not enabled.
macro_rules! config_field {
  ($cli:ident, $($rest:ident),+; $field:ident) => {
    {
        #[cfg(feature = "cli")]
        { config_field!(@without_cli $cli, $($rest),+; $field) }
        #[cfg(not(feature = "cli"))]
        { config_field!(@without_cli $($rest),+; $field) }
    }
  };
  (@without_cli $start:ident$(, $fallback:ident)*; $field:ident) => {
      $start.as_ref().and_then(|value| value.$field.clone())
        $(
        .or_else(|| $fallback.as_ref().and_then(|value| value.$field.clone()))
        )*
  };
}

/// A composite configuration from multiple sources with following ordering:
///
/// - [`CliConfig`] (if `cli` feature is enabled)
/// - [`EnvConfig`]
/// - [`TomlConfig`]
#[derive(Debug, PartialEq)]
pub struct CombinedConfig {
    pub macro_prefix: String,
    pub include_guard: Option<String>,
}

impl Default for CombinedConfig {
    fn default() -> Self {
        Self::merge(
            #[cfg(feature = "cli")]
            None,
            None,
            None,
        )
    }
}

impl CombinedConfig {
    /// Merges [`CliConfig`] (if `cli` feature is enabled), [`EnvConfig`] and [`TomlConfig`]
    #[must_use]
    pub fn merge(
        #[cfg(feature = "cli")] cli: Option<CliConfig>,
        env: Option<EnvConfig>,
        toml: Option<TomlConfig>,
    ) -> Self {
        Self {
            macro_prefix: config_field!(cli, env, toml; macro_prefix)
                .unwrap_or_else(|| DEFAULT_MACRO_PREFIX.to_owned()),
            include_guard: config_field!(cli, env, toml; include_guard),
        }
    }
}

impl From<CombinedConfig> for RenderOptions {
    fn from(config: CombinedConfig) -> Self {
        Self {
            macro_prefix: config.macro_prefix,
            include_guard: config.include_guard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge() {
        #[cfg(feature = "cli")]
        let cli = CliConfig {
            macro_prefix: Some("CLI".to_owned()),
            include_guard: None,
        };
        let env = EnvConfig {
            macro_prefix: Some("ENV".to_owned()),
            include_guard: None,
        };
        let toml = TomlConfig {
            macro_prefix: Some("TOML".to_owned()),
            include_guard: Some("TOML_H".to_owned()),
        };

        assert_eq!(
            CombinedConfig {
                macro_prefix: if cfg!(feature = "cli") { "CLI" } else { "ENV" }.to_owned(),
                include_guard: Some("TOML_H".to_owned()),
            },
            CombinedConfig::merge(
                #[cfg(feature = "cli")]
                Some(cli),
                Some(env),
                Some(toml),
            )
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(
            RenderOptions::from(CombinedConfig::default()),
            RenderOptions::default()
        );
    }

    #[test]
    fn empty_sources_fall_through() {
        let merged = CombinedConfig::merge(
            #[cfg(feature = "cli")]
            Some(CliConfig::default()),
            Some(EnvConfig::default()),
            Some(TomlConfig {
                macro_prefix: None,
                include_guard: Some("G".to_owned()),
            }),
        );
        assert_eq!(merged.macro_prefix, "DT");
        assert_eq!(merged.include_guard.as_deref(), Some("G"));
    }
}
