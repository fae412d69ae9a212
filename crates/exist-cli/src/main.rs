//! `exist2sql` — turn an Exist JSON export into SQL Server import scripts.
//!
//! # Usage
//!
//! ```
//! exist2sql --input-folder ~/exist-export
//! exist2sql -i ~/exist-export -o import.sql -d drop.sql
//! EXIST2SQL_INPUT_FOLDER=~/exist-export exist2sql
//! ```

use std::{io, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use exist_cli::{ExportConfig, Overrides};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate T-SQL import scripts from an Exist export")]
struct Cli {
  /// Folder holding the exported `*.json` files (default: current directory).
  #[arg(short, long, value_name = "DIR")]
  input_folder: Option<PathBuf>,

  /// Create script path (default: `<input-folder>/ImportExistJson.sql`).
  #[arg(short, long, value_name = "FILE")]
  output_file: Option<PathBuf>,

  /// Drop script path (default: `DropExistTables.sql` beside the create script).
  #[arg(short, long, value_name = "FILE")]
  drop_file: Option<PathBuf>,

  /// Path to an optional TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "exist2sql.toml")]
  config: PathBuf,
}

fn main() -> anyhow::Result<()> {
  // Diagnostics go to stderr.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let overrides = Overrides {
    input_folder: cli.input_folder,
    output_file:  cli.output_file,
    drop_file:    cli.drop_file,
  };
  let config = ExportConfig::load(&cli.config, &overrides)
    .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

  tracing::info!("Input folder: {}", config.input_folder.display());
  tracing::info!("Create script: {}", config.create_script_path().display());
  tracing::info!("Drop script: {}", config.drop_script_path().display());

  let scripts = exist_cli::run(&config).with_context(|| {
    format!("failed to convert export in {}", config.input_folder.display())
  })?;

  tracing::info!(
    tables = scripts.tables.len(),
    skipped = scripts.skipped,
    "done"
  );

  Ok(())
}
