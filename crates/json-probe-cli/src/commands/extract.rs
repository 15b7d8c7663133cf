use anyhow::{Context, Result};
use json_probe_core::{Document, KeyPath};
use serde_json::Value;
use std::io::Read;
use tracing::info;

/// Extract command output format
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

pub async fn run(file: Option<&str>, path: &str, format: &str) -> Result<()> {
    let data = match file {
        Some(p) => std::fs::read(p).with_context(|| format!("Failed to read {}", p))?,
        None => {
            info!("Reading document from stdin");
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let document = Document::from_slice(&data).context("Input is not valid JSON")?;
    let key_path: KeyPath = path.parse()?;
    let value = document.get(&key_path)?;

    print_value(value, OutputFormat::from_str(format))
}

fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => match value {
            Value::Null => println!("null"),
            Value::Bool(b) => println!("{}", b),
            Value::Number(n) => println!("{}", n),
            Value::String(s) => println!("{}", s),
            other => println!("{}", serde_json::to_string_pretty(other)?),
        },
    }

    Ok(())
}
