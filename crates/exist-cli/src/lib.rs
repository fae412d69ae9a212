//! Filesystem front end for the Exist export converter.
//!
//! [`run`] enumerates the export folder, classifies every file, assembles the
//! create and drop scripts, and writes both to disk.

pub mod error;
pub mod folder;
pub mod settings;


pub use error::{Error, Result};
use exist_core::classify_all;
use exist_script::{Scripts, assemble};
pub use folder::{enumerate_json_files, write_script};
pub use settings::{ExportConfig, Overrides};

/// Convert the export described by `config` and write both scripts.
///
/// The input folder is made absolute first: SQL Server resolves `BULK` paths
/// on its own side, so a relative path in the script would not load.
/// Unusable input files are skipped and counted in [`Scripts::skipped`].
pub fn run(config: &ExportConfig) -> Result<Scripts> {
  let input_folder =
    std::path::absolute(&config.input_folder).map_err(|source| Error::ReadDir {
      path: config.input_folder.clone(),
      source,
    })?;
  let config = ExportConfig {
    input_folder,
    ..config.clone()
  };

  let files = enumerate_json_files(&config.input_folder)?;
  tracing::debug!(
    folder = %config.input_folder.display(),
    files = files.len(),
    "enumerated export files"
  );

  let results = classify_all(&files);
  let scripts = assemble(&results);

  let create_path = config.create_script_path();
  let drop_path = config.drop_script_path();
  write_script(&create_path, &scripts.create)?;
  write_script(&drop_path, &scripts.drop)?;

  tracing::info!(
    create = %create_path.display(),
    drop = %drop_path.display(),
    "wrote scripts"
  );

  Ok(scripts)
}
