use clap::Args;

/// Command-line interface (CLI) header configuration
#[derive(Debug, Default, PartialEq, Args)]
pub struct CliConfig {
    /// First segment of every generated macro name [default: DT]
    #[arg(long, value_name = "PREFIX")]
    pub macro_prefix: Option<String>,

    /// Wrap the header in `#ifndef GUARD` / `#define GUARD` / `#endif`
    #[arg(long, value_name = "GUARD")]
    pub include_guard: Option<String>,
}
