use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "json-probe")]
#[command(about = "Fetch, traverse and summarize JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a JSON document over HTTP and print the value at a key path
    Get {
        /// URL of the JSON document
        #[arg(short, long)]
        url: String,

        /// Dotted key path to extract (prints the whole document if omitted)
        #[arg(short, long)]
        path: Option<String>,

        /// Path to a client configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Request timeout in seconds (overrides the config file)
        #[arg(long)]
        timeout: Option<u64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Extract a value from a local JSON document
    Extract {
        /// Path to the JSON file (reads stdin if omitted)
        #[arg(long)]
        file: Option<String>,

        /// Dotted key path to extract
        #[arg(short, long)]
        path: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Summarize the structure of a JSON document
    Stats {
        /// URL of the JSON document
        #[arg(long)]
        url: Option<String>,

        /// Path to a local JSON file
        #[arg(long)]
        file: Option<String>,

        /// Path to a client configuration file (YAML, used with --url)
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // Priority: RUST_LOG env var > verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Get {
            url,
            path,
            config,
            timeout,
            format,
        } => {
            commands::get::run(&url, path.as_deref(), config.as_deref(), timeout, &format).await?;
        }
        Commands::Extract { file, path, format } => {
            commands::extract::run(file.as_deref(), &path, &format).await?;
        }
        Commands::Stats {
            url,
            file,
            config,
            format,
        } => {
            commands::stats::run(url.as_deref(), file.as_deref(), config.as_deref(), &format)
                .await?;
        }
    }

    Ok(())
}
