//! Command-line interface for blobtab
//!
//! # Usage Examples
//!
//! ## Fetch
//! ```bash
//! # Fetch CSV blobs from S3 into one table, printed as CSV
//! blobtab fetch \
//!   --container reports --prefix daily_ \
//!   --access-key-id AKIA... --secret-access-key ... \
//!   --region eu-west-1
//!
//! # Fetch from an S3-compatible endpoint, printed as JSON lines
//! blobtab fetch \
//!   --container reports --prefix daily_ \
//!   --endpoint-url http://localhost:9000 \
//!   --format json --limit 20
//!
//! # Fetch from a local directory tree (containers are subdirectories)
//! blobtab fetch --local-root ./data --container reports --prefix daily_ \
//!   --encoding latin-1 --delimiter ';'
//! ```
//!
//! ## Join
//! ```bash
//! # Join items with a cycling delimiter sequence
//! blobtab join --delimiters "-+=" apple banana cherry date
//! # -> apple-banana+cherry=date
//! ```

use anyhow::Context;
use blobtab::{
    interleave_join, load_csv_from_blobs, load_csv_prefix, LoadOptions, LocalStore,
    StoreCredentials, Table,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blobtab")]
#[command(about = "A tool for fetching CSV blobs from object storage into in-memory tables")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every CSV blob matching a name prefix and print the combined table
    Fetch {
        /// Container (bucket) holding the blobs
        #[arg(long)]
        container: String,

        /// Blob name prefix to match
        #[arg(long)]
        prefix: String,

        /// Store connection options
        #[command(flatten)]
        store_opts: StoreOpts,

        /// CSV reading options
        #[command(flatten)]
        csv_opts: CsvOpts,

        /// Output format for the combined table
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Print at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Join items with a repeating sequence of delimiter characters
    Join {
        /// Delimiter characters, consumed round-robin
        #[arg(long)]
        delimiters: String,

        /// Items to join, in order
        items: Vec<String>,
    },
}

#[derive(Args)]
struct StoreOpts {
    /// S3 access key id
    #[arg(long, env = "BLOBTAB_ACCESS_KEY_ID")]
    access_key_id: Option<String>,

    /// S3 secret access key
    #[arg(long, env = "BLOBTAB_SECRET_ACCESS_KEY")]
    secret_access_key: Option<String>,

    /// S3 region
    #[arg(long, env = "BLOBTAB_REGION")]
    region: Option<String>,

    /// Custom endpoint URL, for S3-compatible stores
    #[arg(long, env = "BLOBTAB_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Serve blobs from this local directory instead of S3
    /// (containers are its subdirectories)
    #[arg(long)]
    local_root: Option<PathBuf>,
}

#[derive(Args)]
struct CsvOpts {
    /// Character encoding of the blob content
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Treat the first row as data, not as a header
    #[arg(long)]
    no_headers: bool,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    /// CSV with a header row
    Csv,
    /// One JSON object per row
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            container,
            prefix,
            store_opts,
            csv_opts,
            format,
            limit,
        } => {
            let options = load_options(&csv_opts)?;

            let table = if let Some(root) = store_opts.local_root {
                let store = LocalStore::new(root);
                load_csv_prefix(&store, &container, &prefix, &options).await?
            } else {
                let credentials = StoreCredentials {
                    access_key_id: store_opts
                        .access_key_id
                        .context("--access-key-id (or BLOBTAB_ACCESS_KEY_ID) is required for S3")?,
                    secret_access_key: store_opts.secret_access_key.context(
                        "--secret-access-key (or BLOBTAB_SECRET_ACCESS_KEY) is required for S3",
                    )?,
                    region: store_opts.region,
                    endpoint_url: store_opts.endpoint_url,
                };
                load_csv_from_blobs(&credentials, &container, &prefix, &options).await?
            };

            print_table(&table, format, limit)?;
        }

        Commands::Join { delimiters, items } => {
            let delimiters: Vec<char> = delimiters.chars().collect();
            let joined = interleave_join(&items, &delimiters)?;
            println!("{joined}");
        }
    }

    Ok(())
}

fn load_options(csv_opts: &CsvOpts) -> anyhow::Result<LoadOptions> {
    anyhow::ensure!(
        csv_opts.delimiter.is_ascii(),
        "CSV delimiter must be a single ASCII character"
    );

    Ok(LoadOptions {
        encoding: csv_opts
            .encoding
            .parse()
            .with_context(|| format!("unsupported encoding '{}'", csv_opts.encoding))?,
        has_headers: !csv_opts.no_headers,
        delimiter: csv_opts.delimiter as u8,
        ..LoadOptions::default()
    })
}

fn print_table(table: &Table, format: OutputFormat, limit: Option<usize>) -> anyhow::Result<()> {
    let row_count = limit.unwrap_or(table.num_rows()).min(table.num_rows());

    match format {
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(table.columns())?;
            for row in &table.rows()[..row_count] {
                writer.write_record(row.iter().map(|value| value.to_string()))?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            use std::io::Write;

            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for row in &table.rows()[..row_count] {
                let object: serde_json::Map<String, serde_json::Value> = table
                    .columns()
                    .iter()
                    .zip(row)
                    .map(|(column, value)| Ok((column.clone(), serde_json::to_value(value)?)))
                    .collect::<anyhow::Result<_>>()?;
                serde_json::to_writer(&mut handle, &object)?;
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}
