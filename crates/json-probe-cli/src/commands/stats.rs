use anyhow::{bail, Context, Result};
use json_probe_core::{ClientConfig, Document, DocumentStats, FileSource, HttpSource, Source};
use std::path::Path;
use tracing::info;

/// Stats command output format
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
    url: Option<&str>,
    file: Option<&str>,
    config_path: Option<&str>,
    format: &str,
) -> Result<()> {
    let source: Box<dyn Source> = match (url, file) {
        (Some(url), None) => {
            let config = match config_path {
                Some(p) => ClientConfig::from_yaml_file(Path::new(p))
                    .with_context(|| format!("Failed to load config file: {}", p))?,
                None => ClientConfig::default(),
            };
            Box::new(HttpSource::new(url, &config)?)
        }
        (None, Some(path)) => Box::new(FileSource::new(path)),
        (Some(_), Some(_)) => bail!("Specify either --url or --file, not both"),
        (None, None) => bail!("One of --url or --file is required"),
    };

    let origin = source.describe();
    info!("Loading {}", origin);
    let body = source.load().await?;
    let document = Document::from_slice(&body).context("Document is not valid JSON")?;
    let stats = document.stats();

    match OutputFormat::from_str(format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => print_stats_text(stats, &origin),
    }

    Ok(())
}

fn print_stats_text(stats: &DocumentStats, origin: &str) {
    let inspected = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║{:^66}║", "DOCUMENT STATISTICS");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ {:<12} {:<51} ║", "Source:", origin);
    println!("║ {:<12} {:<51} ║", "Inspected:", inspected);
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ {:<12} {:<51} ║", "Total nodes:", stats.total_nodes);
    println!("║ {:<12} {:<51} ║", "Max depth:", stats.max_depth);
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ {:<12} {:<51} ║", "Objects:", stats.objects);
    println!("║ {:<12} {:<51} ║", "Arrays:", stats.arrays);
    println!("║ {:<12} {:<51} ║", "Strings:", stats.strings);
    println!("║ {:<12} {:<51} ║", "Numbers:", stats.numbers);
    println!("║ {:<12} {:<51} ║", "Booleans:", stats.booleans);
    println!("║ {:<12} {:<51} ║", "Nulls:", stats.nulls);
    println!("╚══════════════════════════════════════════════════════════════════╝");
}
