//! Reading the export folder and writing the generated scripts.

use std::{
  fs,
  path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Name fragments of tool-generated JSON that can sit beside an export.
const IGNORED_FRAGMENTS: [&str; 2] = [".deps", ".runtimeconfig"];

/// Regular `*.json` files directly inside `folder`, sorted by file name.
///
/// The extension match ignores case. Subdirectories are not entered.
pub fn enumerate_json_files(folder: &Path) -> Result<Vec<PathBuf>> {
  let read_dir_err = |source| Error::ReadDir {
    path: folder.to_path_buf(),
    source,
  };

  let mut files = Vec::new();
  for entry in fs::read_dir(folder).map_err(read_dir_err)? {
    let entry = entry.map_err(read_dir_err)?;
    if !entry.file_type().map_err(read_dir_err)?.is_file() {
      continue;
    }
    let path = entry.path();
    if is_export_file(&path) {
      files.push(path);
    }
  }

  files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  Ok(files)
}

fn is_export_file(path: &Path) -> bool {
  let is_json = path
    .extension()
    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
  let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
  is_json && !IGNORED_FRAGMENTS.iter().any(|f| name.contains(f))
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_script(path: &Path, contents: &str) -> Result<()> {
  let write_err = |source| Error::Write {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).map_err(write_err)?;
  }
  fs::write(path, contents).map_err(write_err)
}
