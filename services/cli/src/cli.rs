use crate::sort::{self, SortArgs};
use clap::{Parser, ValueEnum};
use name_sorter::config::{AppConfig, OutputFormat};
use name_sorter::error::AppError;
use name_sorter::telemetry;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "name-sorter",
    about = "Sort a list of names by last name, then by up to three given names",
    version
)]
pub(crate) struct Cli {
    /// Text file with one name per line
    pub(crate) input: PathBuf,
    /// Override the configured output file
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
    /// Override the configured console format
    #[arg(long, value_enum)]
    pub(crate) format: Option<FormatArg>,
    /// Override the configured log level or filter
    #[arg(long)]
    pub(crate) log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormatArg {
    #[value(alias = "plain")]
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Folds command-line overrides into the loaded configuration.
    pub(crate) fn into_parts(self, mut config: AppConfig) -> (SortArgs, AppConfig) {
        if let Some(output) = self.output {
            config.output.path = output;
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(log_level) = self.log_level {
            config.telemetry.log_level = log_level;
        }

        (SortArgs { input: self.input }, config)
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let (args, config) = cli.into_parts(AppConfig::load()?);

    telemetry::init(&config.telemetry)?;
    debug!(?config, "configuration resolved");

    let stdout = io::stdout();
    sort::run(args, &config.output, &mut stdout.lock())?;
    Ok(())
}
