//! Layered run configuration.
//!
//! Precedence, lowest first: built-in defaults, the optional config file,
//! `EXIST2SQL_*` environment variables, explicit command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;

pub const ENV_PREFIX: &str = "EXIST2SQL";
pub const DEFAULT_CREATE_SCRIPT: &str = "ImportExistJson.sql";
pub const DEFAULT_DROP_SCRIPT: &str = "DropExistTables.sql";

/// Where to read the export from and where to write the two scripts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
  pub input_folder: PathBuf,
  #[serde(default)]
  pub output_file:  Option<PathBuf>,
  #[serde(default)]
  pub drop_file:    Option<PathBuf>,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub input_folder: Option<PathBuf>,
  pub output_file:  Option<PathBuf>,
  pub drop_file:    Option<PathBuf>,
}

impl ExportConfig {
  /// Load from `config_file` (optional on disk), the process environment and
  /// `overrides`.
  pub fn load(config_file: &Path, overrides: &Overrides) -> Result<Self> {
    Self::load_with_env(
      config_file,
      config::Environment::with_prefix(ENV_PREFIX),
      overrides,
    )
  }

  pub(crate) fn load_with_env(
    config_file: &Path,
    env: config::Environment,
    overrides: &Overrides,
  ) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("input_folder", ".")?
      .add_source(config::File::from(config_file.to_path_buf()).required(false))
      .add_source(env)
      .set_override_option("input_folder", overrides.input_folder.as_deref().map(path_value))?
      .set_override_option("output_file", overrides.output_file.as_deref().map(path_value))?
      .set_override_option("drop_file", overrides.drop_file.as_deref().map(path_value))?
      .build()?;

    Ok(settings.try_deserialize()?)
  }

  /// Create script path; defaults to `<input_folder>/ImportExistJson.sql`.
  pub fn create_script_path(&self) -> PathBuf {
    self
      .output_file
      .clone()
      .unwrap_or_else(|| self.input_folder.join(DEFAULT_CREATE_SCRIPT))
  }

  /// Drop script path; defaults to `DropExistTables.sql` beside the create
  /// script.
  pub fn drop_script_path(&self) -> PathBuf {
    self
      .drop_file
      .clone()
      .unwrap_or_else(|| self.create_script_path().with_file_name(DEFAULT_DROP_SCRIPT))
  }
}

fn path_value(path: &Path) -> String { path.to_string_lossy().into_owned() }
