use crate::config::ConfigError;
use crate::lines::LinesError;
use crate::names::NameFormatError;
use crate::telemetry::TelemetryError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Lines(LinesError),
    Names(NameFormatError),
    Output(std::io::Error),
    NoNames { path: PathBuf },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Lines(err) => write!(f, "{}", err),
            AppError::Names(err) => write!(f, "{}", err),
            AppError::Output(err) => write!(f, "failed to write to console: {}", err),
            AppError::NoNames { path } => {
                write!(f, "no names found in the input file {}", path.display())
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Lines(err) => Some(err),
            AppError::Names(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::NoNames { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<LinesError> for AppError {
    fn from(value: LinesError) -> Self {
        Self::Lines(value)
    }
}

impl From<NameFormatError> for AppError {
    fn from(value: NameFormatError) -> Self {
        Self::Names(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}
