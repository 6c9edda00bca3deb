//! Environment-driven observability settings.
//!
//! - `RUST_LOG`: `EnvFilter` directives (default `info`)
//! - `LOG_FORMAT`: `json` (default), `pretty` or `compact`

use core::str::FromStr;

use thiserror::Error;

pub const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when `LOG_FORMAT` held something unrecognised and the default was used.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup("LOG_FORMAT") {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => (format, None),
                Err(e) => (LogFormat::default(), Some(e)),
            },
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
