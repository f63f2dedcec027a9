//! magdb: Magnetic transition-temperature database builder.
//! Entry point for the command-line binary.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use magdb_common::RecordType;
use magdb_db::{EntryStore, JsonLinesStore, MemoryStore};
use magdb_ingestion::normalise::normalise_temperature;
use magdb_ingestion::pipeline::{run_build, BuildJob};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "magdb", version, about = "Build a database of Néel and Curie temperatures")]
struct Cli {
    /// Path to magdb.toml (overrides MAGDB_CONFIG)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build entries from a directory of extracted-document JSON files
    Build {
        /// Directory of extracted documents (defaults to ingestion.input_dir)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Record types to build; repeat to select several (defaults to ingestion.record_types)
        #[arg(long = "record-type", value_parser = parse_record_type)]
        record_types: Vec<RecordType>,

        /// Build into memory only, without writing the collection
        #[arg(long)]
        dry_run: bool,
    },
    /// Normalise one temperature value to Kelvin and print the result
    Normalise {
        #[arg(allow_hyphen_values = true)]
        value: String,
        units: Option<String>,
    },
    /// Print the number of entries in the configured collection
    Count,
}

fn parse_record_type(s: &str) -> Result<RecordType, String> {
    match s.to_lowercase().as_str() {
        "neel" | "néel" => Ok(RecordType::Neel),
        "curie"         => Ok(RecordType::Curie),
        other => Err(format!("unknown record type '{other}' (expected neel or curie)")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("magdb=debug,info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Build { input, record_types, dry_run } => {
            let job = BuildJob {
                input_dir: input.unwrap_or_else(|| PathBuf::from(&config.ingestion.input_dir)),
                record_types: if record_types.is_empty() {
                    config.ingestion.record_types.clone()
                } else {
                    record_types
                },
            };
            info!("Version: {}", env!("CARGO_PKG_VERSION"));

            let result = if dry_run {
                info!("Dry run: entries are kept in memory");
                run_build(&job, &MemoryStore::new()).await?
            } else {
                let store =
                    JsonLinesStore::open(&config.database.path, &config.database.collection).await?;
                info!("Writing to {}", store.path().display());
                run_build(&job, &store).await?
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Normalise { value, units } => {
            let normalised = normalise_temperature(&value, units.as_deref());
            println!("{}", serde_json::to_string(&normalised)?);
        }
        Command::Count => {
            let store =
                JsonLinesStore::open(&config.database.path, &config.database.collection).await?;
            println!("{}", store.count().await?);
        }
    }

    Ok(())
}
