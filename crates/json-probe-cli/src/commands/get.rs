use anyhow::{Context, Result};
use json_probe_core::{ClientConfig, Document, HttpSource, KeyPath, Source};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Get command output format
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

pub async fn run(
    url: &str,
    path: Option<&str>,
    config_path: Option<&str>,
    timeout: Option<u64>,
    format: &str,
) -> Result<()> {
    let mut config = match config_path {
        Some(p) => ClientConfig::from_yaml_file(Path::new(p))
            .with_context(|| format!("Failed to load config file: {}", p))?,
        None => ClientConfig::default(),
    };
    if let Some(secs) = timeout {
        config.timeout_secs = secs;
    }

    let source = HttpSource::new(url, &config)?;
    info!("Fetching {}", source.describe());
    let body = source.load().await?;
    let document = Document::from_slice(&body).context("Response body is not valid JSON")?;

    let value = match path {
        Some(raw) => {
            let key_path: KeyPath = raw.parse()?;
            document.get(&key_path)?
        }
        None => document.root(),
    };

    print_value(value, OutputFormat::from_str(format))
}

fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => match value {
            // Scalars print bare, containers as pretty JSON
            Value::Null => println!("null"),
            Value::Bool(b) => println!("{}", b),
            Value::Number(n) => println!("{}", n),
            Value::String(s) => println!("{}", s),
            other => println!("{}", serde_json::to_string_pretty(other)?),
        },
    }

    Ok(())
}
