use std::{error::Error as _, path::PathBuf, process::ExitCode};

use clap::{
    builder::{
        styling::{AnsiColor, Style},
        Styles,
    },
    Parser,
};
use dt_header_config::cli_config::CliConfig;
use owo_colors::OwoColorize as _;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod generate;

fn styles() -> Styles {
    Styles::styled()
        .header(Style::new().bold())
        .usage(Style::new().bold())
        .literal(AnsiColor::Blue.on_default().bold())
        .placeholder(AnsiColor::White.on_default().dimmed())
}

const HELP_TEMPLATE: &str = "\
{before-help}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}\
    ";

/// dt-header turns Devicetree nodes into C `#define`s for firmware builds.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None, styles = styles(), help_template = HELP_TEMPLATE)]
struct Cli {
    /// If provided, displays info log messages
    ///
    /// This can be overridden by the `RUST_LOG` environment variable
    #[arg(short, long)]
    verbose: bool,

    /// The DTS file to read
    input: PathBuf,

    /// The header file to write
    output: PathBuf,

    /// Config file to use instead of searching for `.dt-header.toml`
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    header: CliConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(
                    if cli.verbose {
                        LevelFilter::INFO
                    } else {
                        LevelFilter::WARN
                    }
                    .into(),
                )
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = generate::load_options(&cli.input, cli.config.as_deref(), cli.header)
        .and_then(|options| generate::generate(&cli.input, &cli.output, &options));

    match result {
        Ok(()) => {
            println!(
                "{} {}",
                "Header generated at".green(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}: {err}", "error".red().bold());
            let mut source = err.source();
            while let Some(cause) = source {
                eprint!(": {cause}");
                source = cause.source();
            }
            eprintln!();
            ExitCode::FAILURE
        }
    }
}
