//! Run configuration from command-line arguments and environment.

use thiserror::Error;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const FORMAT_VAR: &str = "GILDED_ROSE_FORMAT";
pub const DEFAULT_DAYS: u64 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid day count '{0}': expected a non-negative integer")]
    InvalidDays(String),

    #[error("invalid output format '{0}': expected 'text' or 'json'")]
    InvalidFormat(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days to simulate after printing the initial state.
    pub days: u64,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Read from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Arguments take precedence over environment variables.
    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut days_arg = None;
        let mut json_flag = false;

        for arg in args {
            if arg == "--json" {
                json_flag = true;
            } else if arg.starts_with("--") || days_arg.is_some() {
                return Err(ConfigError::UnexpectedArgument(arg));
            } else {
                days_arg = Some(arg);
            }
        }

        let days = match days_arg.or_else(|| env(DAYS_VAR)) {
            Some(raw) => parse_days(&raw)?,
            None => DEFAULT_DAYS,
        };

        let format = if json_flag {
            OutputFormat::Json
        } else {
            match env(FORMAT_VAR) {
                Some(raw) => raw.parse()?,
                None => OutputFormat::Text,
            }
        };

        Ok(Self { days, format })
    }
}

fn parse_days(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDays(raw.to_string()))
}
