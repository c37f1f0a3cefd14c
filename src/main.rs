//! Seed Phrase Converter CLI
//!
//! Converts seed phrase files to wallets and pulls private keys back out of
//! exported wallet tables. Nothing leaves the machine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use seedphrase_converter::{
    extract_keys, BatchProcessor, BatchResult, Config, ExportFile, Exportable, ExtractionResult,
    MnemonicDeriver, Session, SessionError,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seedphrase-converter")]
#[command(about = "Convert seed phrases to wallets and extract private keys from wallet tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file of seed phrases (one per line) into a wallet table
    Convert {
        /// Text file with one seed phrase per line
        input: PathBuf,

        /// Output path (default: wallet_addresses.csv in the output dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print private keys instead of masking them
        #[arg(long)]
        reveal: bool,

        /// Print the summary as JSON (counts and skipped lines only)
        #[arg(long)]
        json: bool,
    },

    /// Extract private keys from a wallet table
    Extract {
        /// CSV file whose last column holds the private keys
        input: PathBuf,

        /// Output path (default: Private_Keys.txt in the output dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Convert { input, output, reveal, json } => {
            convert(&config, &input, output.as_deref(), reveal, json).await?
        }
        Commands::Extract { input, output } => extract(&config, &input, output.as_deref()).await?,
    }

    Ok(())
}

/// Write the session's export, or report why there is nothing to write
async fn save<T: Exportable>(
    config: &Config,
    session: &Session<T>,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let ExportFile { file_name, content } = match session.export() {
        Ok(file) => file,
        Err(SessionError::NothingToExport(msg)) => {
            println!("{}", msg.yellow());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let path = config.output_path(explicit, file_name);
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved {}", path.display());

    Ok(Some(path))
}

async fn convert(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let mut session: Session<BatchResult> = Session::new();
    session.load_file(input).await?;

    let processor = BatchProcessor::new(MnemonicDeriver::new()).with_preview_chars(config.log_preview_chars);
    let result = session.run(|text| processor.process(text))?;

    if json {
        let summary = json!({
            "total_lines": result.total_lines,
            "converted": result.converted_count(),
            "skipped": result.skipped_count,
            "rejections": result.rejections,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_batch_summary(result, reveal);
    }

    if let Some(path) = save(config, &session, output).await? {
        println!("Wallet table saved to {}", path.display().to_string().green());
    }

    Ok(())
}

async fn extract(config: &Config, input: &Path, output: Option<&Path>) -> Result<()> {
    let mut session: Session<ExtractionResult> = Session::new();
    session.load_file(input).await?;

    let result = session.run(extract_keys)?;
    println!("\nExtracted {} private keys", result.len().to_string().bold());

    if let Some(path) = save(config, &session, output).await? {
        println!("Private keys saved to {}", path.display().to_string().green());
    }

    Ok(())
}

fn print_batch_summary(result: &BatchResult, reveal: bool) {
    println!("\n{}", "=".repeat(70));
    println!("  SEED PHRASE CONVERSION");
    println!(
        "  Lines: {} | Converted: {} | Skipped: {}",
        result.total_lines,
        result.converted_count().to_string().green(),
        if result.skipped_count > 0 {
            result.skipped_count.to_string().red()
        } else {
            result.skipped_count.to_string().normal()
        }
    );
    println!("{}\n", "=".repeat(70));

    for rejection in &result.rejections {
        println!("  {} line {}: {}", "SKIP".red(), rejection.line_number, rejection.reason);
    }
    if !result.rejections.is_empty() {
        println!();
    }

    for (i, record) in result.records.iter().enumerate() {
        let key = if reveal {
            record.private_key.clone()
        } else {
            mask(&record.private_key)
        };
        println!("{:>4}. {}  {}", i + 1, record.address.cyan(), key);
    }

    if !result.records.is_empty() {
        println!();
    }
}

/// `0x1234...abcd` style mask for on-screen listing
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
