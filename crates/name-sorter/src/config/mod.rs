use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "sorted-names-list.txt";

/// How sorted names are echoed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Top-level configuration for the sorter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = env::var("NAME_SORTER_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let format = match env::var("NAME_SORTER_FORMAT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("NAME_SORTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            output: OutputConfig { path, format },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the sorted list is persisted and how it is echoed.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFormat { value } => {
                write!(f, "output format '{value}' is not one of 'text' or 'json'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
