use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use varstar_catalog::{Gcvs4Catalog, RECORD_SIZE};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "query-gcvs")]
#[command(about = "Query the GCVS variable-star catalog")]
struct Cli {
    /// Path to the gcvs4.dat data file
    #[arg(long)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print catalog information
    Info,
    /// Look up a star by designation or catalog number
    Lookup {
        /// Designation ("R Cyg", "V0500 Cyg") or number ("GCVS 240012")
        name: String,
        /// Print query timing
        #[arg(long)]
        timing: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = Gcvs4Catalog::from_data_file(&cli.catalog);

    match cli.command {
        Commands::Info => {
            let records = catalog
                .record_count()
                .with_context(|| format!("Failed to read catalog file: {:?}", cli.catalog))?;
            let size_mb = records as f64 * RECORD_SIZE as f64 / 1_048_576.0;
            println!("Data file: {}", catalog.data_path().display());
            println!("Records: {}", records);
            println!("Record size: {} bytes", RECORD_SIZE);
            println!("Data size: {:.2} MB", size_mb);
            println!("Constellations indexed: {}", catalog.index().len());
        }
        Commands::Lookup {
            name,
            timing,
            format,
        } => {
            let start = timing.then(Instant::now);

            let target = catalog.get_target(&name)?;

            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!("Query completed in {:.2} ms", elapsed.as_secs_f64() * 1000.0);
            }

            match target {
                Some(target) => match format {
                    OutputFormat::Table => println!("{}", target),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&target)?),
                },
                None => println!("Not found: {}", name),
            }
        }
    }

    Ok(())
}
