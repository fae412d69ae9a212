//! Whole-run script assembly.
//!
//! Files are visited in the order given. The first file for a table drops and
//! re-creates it; every later file for the same table appends. Helper tables
//! and views follow once all imports are in place.

use std::collections::HashSet;

use exist_core::{AttributeFile, FileError, group_tables};

use crate::{helpers, render, views};

// ─── Drop tracking ───────────────────────────────────────────────────────────

/// Tables that already received their DROP + CREATE in this run.
///
/// A table moves from "drop pending" to "drop emitted" the first time it is
/// seen and never moves back.
#[derive(Debug, Default)]
pub struct DropTracker {
  dropped: HashSet<String>,
}

impl DropTracker {
  /// Record `table` as seen. Returns `true` only on the first encounter.
  pub fn first_encounter(&mut self, table: &str) -> bool {
    self.dropped.insert(table.to_string())
  }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// The two generated artifacts plus a summary of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripts {
  /// Import script: DROP/CREATE/INSERT per table, helpers, views.
  pub create:  String,
  /// Teardown script: one DROP per table, helpers, views.
  pub drop:    String,
  /// Distinct destination tables in encounter order.
  pub tables:  Vec<String>,
  /// Files left out because they could not be classified.
  pub skipped: usize,
}

pub const SCRIPT_START: &str = "DECLARE @JSON VARCHAR(MAX)\n";

// ─── Assembly ────────────────────────────────────────────────────────────────

/// Build both scripts from per-file classification results.
///
/// Failed files are logged and contribute nothing. The run itself never
/// fails.
pub fn assemble<'a, I>(results: I) -> Scripts
where
  I: IntoIterator<Item = &'a Result<AttributeFile, FileError>>,
{
  let results: Vec<&'a Result<AttributeFile, FileError>> =
    results.into_iter().collect();

  let groups =
    group_tables(results.iter().copied().filter_map(|r| r.as_ref().ok()));

  let mut tracker = DropTracker::default();
  let mut scripts = Scripts {
    create: SCRIPT_START.to_string(),
    ..Scripts::default()
  };

  for result in &results {
    match result {
      Ok(file) => append_import(&mut scripts, &mut tracker, file),
      Err(err) => {
        tracing::warn!(
          file = %err.path.display(),
          reason = %err.source,
          "script not generated"
        );
        scripts.skipped += 1;
      }
    }
  }

  scripts.create.push_str(&helpers::create_helper_tables());
  scripts.drop.push_str(&helpers::drop_helper_tables());

  scripts.create.push_str(&views::create_views(&groups));
  scripts.drop.push_str(&views::drop_views());

  scripts.create = normalize_newlines(&scripts.create);
  scripts.drop = normalize_newlines(&scripts.drop);

  tracing::info!(
    tables = scripts.tables.len(),
    custom_tags = groups.iter().filter(|g| g.is_boolean_trait).count(),
    integer_traits = groups.iter().filter(|g| g.is_integer_trait).count(),
    skipped = scripts.skipped,
    "assembled scripts"
  );

  scripts
}

/// Append one file's import, dropping its table first if this is the first
/// time the table is seen.
pub fn append_import(
  scripts: &mut Scripts,
  tracker: &mut DropTracker,
  file: &AttributeFile,
) {
  let drop_table_first = tracker.first_encounter(&file.table_name);
  if drop_table_first {
    scripts.tables.push(file.table_name.clone());
    scripts.drop.push_str(&render::drop_table(&file.table_name));
    scripts.drop.push('\n');
  }

  scripts
    .create
    .push_str(&render::import_script(file, drop_table_first));

  tracing::info!(
    file = %file.parts.file_name,
    table = %file.table_name,
    kind = %file.kind,
    custom_tag = file.looks_like_bool,
    drop_table_first,
    "created script"
  );
}

fn normalize_newlines(s: &str) -> String { s.replace("\r\n", "\n") }

#[cfg(test)]
mod tests {
  use exist_core::FileNameParts;

  use super::*;

  fn file(name: &str, json: &str) -> AttributeFile {
    AttributeFile::from_json(FileNameParts::parse(name).unwrap(), json).unwrap()
  }

  #[test]
  fn tracker_reports_first_encounter_once() {
    let mut tracker = DropTracker::default();
    assert!(tracker.first_encounter("mood"));
    assert!(!tracker.first_encounter("mood"));
    assert!(!tracker.first_encounter("mood"));
    assert!(tracker.first_encounter("sleep"));
    assert!(tracker.first_encounter("steps"));
    assert_eq!(tracker.dropped.len(), 3);
  }

  #[test]
  fn append_import_switches_to_insert_after_first_file() {
    let mut scripts = Scripts::default();
    let mut tracker = DropTracker::default();

    append_import(&mut scripts, &mut tracker, &file("mood_2020.json", r#"[{"value":5}]"#));
    append_import(&mut scripts, &mut tracker, &file("mood_2021.json", r#"[{"value":7}]"#));

    assert_eq!(scripts.tables, ["mood"]);
    assert_eq!(scripts.drop, "DROP TABLE IF EXISTS [mood]\n");
    assert_eq!(scripts.create.matches("DROP TABLE IF EXISTS [mood]").count(), 1);
    assert_eq!(scripts.create.matches("INSERT INTO [mood]").count(), 1);
  }

  #[test]
  fn line_endings_are_normalised() {
    assert_eq!(normalize_newlines("a\r\nb\nc\r\n"), "a\nb\nc\n");
  }

  #[test]
  fn empty_run_is_still_well_formed() {
    let results: Vec<Result<AttributeFile, FileError>> = Vec::new();
    let scripts = assemble(&results);
    assert!(scripts.create.starts_with(SCRIPT_START));
    assert!(scripts.tables.is_empty());
    assert_eq!(scripts.skipped, 0);
    assert_eq!(scripts.create.matches("CREATE VIEW").count(), 4);
    assert!(!scripts.create.contains("UNION ALL"));
    assert!(scripts.drop.starts_with("DROP TABLE IF EXISTS [location_geo]\n"));
  }
}
