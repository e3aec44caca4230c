use std::path::Path;

use dt_header::{Header, RenderOptions};
use dt_header_config::{
    cli_config::CliConfig,
    env_config::EnvConfig,
    toml_config::{ConfigError, TomlConfig},
    CombinedConfig,
};
use tracing::{debug, info, warn};

/// An error returned while generating a header file.
#[derive(thiserror::Error, Debug, displaydoc::Display)]
pub enum GenerateError {
    /// Failed to read the input
    Read(#[source] std::io::Error),

    /// Failed to write the output
    Write(#[source] std::io::Error),

    /// Failed to load the config file
    Config(#[from] ConfigError),

    /// Invalid configuration in environment variables
    Env(#[from] envy::Error),
}

/// Resolves the render options for `input`.
///
/// `config_file` replaces the search for a `.dt-header.toml` next to `input` or in its
/// ancestors.
pub fn load_options(
    input: &Path,
    config_file: Option<&Path>,
    cli: CliConfig,
) -> Result<RenderOptions, GenerateError> {
    let toml = match config_file {
        Some(path) => Some(TomlConfig::load(path)?),
        None => TomlConfig::discover(input)?,
    };
    debug!(?toml, "loaded config file");
    let env = EnvConfig::from_env()?;
    Ok(CombinedConfig::merge(Some(cli), Some(env), toml).into())
}

/// Reads `input`, converts it and writes the header to `output`.
///
/// Nothing is written unless the input could be read.
pub fn generate(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), GenerateError> {
    let text = fs_err::read_to_string(input).map_err(GenerateError::Read)?;

    let nodes = dt_header::parse(&text);
    let header = Header::with_options(&nodes, options);
    for name in header.collisions() {
        warn!(name, "macro is defined more than once");
    }

    fs_err::write(output, header.to_string()).map_err(GenerateError::Write)?;
    info!(
        nodes = nodes.len(),
        sections = header.sections.len(),
        output = %output.display(),
        "wrote header"
    );
    Ok(())
}
