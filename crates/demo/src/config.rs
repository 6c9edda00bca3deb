//! Demo settings, read from `CATALOG_DEMO_OUTPUT` (`text` or `json`).

use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format: {other}"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub output: OutputFormat,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("CATALOG_DEMO_OUTPUT") {
            None => OutputFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using text output");
                OutputFormat::default()
            }),
        };
        Self { output }
    }
}
