//! T-SQL text for single statements and per-file imports.
//!
//! Everything here is pure string building; no decision logic beyond the
//! `drop_table_first` switch lives in this module.

use exist_core::{AttributeFile, Column, SchemaKind};

// ─── Quoting ─────────────────────────────────────────────────────────────────

/// Bracket-quote an identifier, stripping any brackets already present.
pub fn in_brackets(name: &str) -> String {
  format!("[{}]", name.replace(['[', ']'], ""))
}

/// Single-quoted string literal with embedded quotes doubled.
pub fn quote_literal(s: &str) -> String { format!("'{}'", s.replace('\'', "''")) }

// ─── Statements ──────────────────────────────────────────────────────────────

/// A progress message printed by the server while the script runs.
/// `%` is doubled because RAISERROR treats the message as a format string.
pub fn log_message(message: &str) -> String {
  format!(
    "RAISERROR({}, 0, 1) WITH NOWAIT",
    quote_literal(&message.replace('%', "%%"))
  )
}

pub fn drop_table(table: &str) -> String {
  format!("DROP TABLE IF EXISTS {}", in_brackets(table))
}

pub fn drop_view(view: &str) -> String {
  format!("DROP VIEW IF EXISTS {}", in_brackets(view))
}

/// The `WITH (…)` projection that shreds an `OPENJSON` document.
pub fn openjson_with(kind: &SchemaKind) -> String {
  let columns: Vec<String> = kind.columns().iter().map(column_def).collect();
  format!("WITH ({})", columns.join(", "))
}

fn column_def(column: &Column) -> String {
  match column.json_path {
    Some(path) => format!(
      "{} {} {}",
      in_brackets(column.name),
      column.sql_type,
      quote_literal(path)
    ),
    None => format!("{} {}", in_brackets(column.name), column.sql_type),
  }
}

// ─── Per-file import ─────────────────────────────────────────────────────────

/// Import statement for one classified file.
///
/// With `drop_table_first` the destination is dropped and re-created through
/// `SELECT … INTO`. Without it the rows are appended to the table an earlier
/// file created.
pub fn import_script(file: &AttributeFile, drop_table_first: bool) -> String {
  let path = file.file_path().display().to_string();
  let table = in_brackets(&file.table_name);
  let with = openjson_with(&file.kind);

  let load = if drop_table_first {
    format!(
      "{drop}\nSELECT *\nINTO {table}\nFROM OPENJSON(@JSON)\n{with}",
      drop = drop_table(&file.table_name),
    )
  } else {
    format!("INSERT INTO {table}\nSELECT * FROM OPENJSON(@JSON)\n{with}")
  };

  format!(
    "\n{log}\nSELECT @JSON = BulkColumn\nFROM OPENROWSET(BULK {bulk}, SINGLE_CLOB) AS j\n\n{load}\n",
    log = log_message(&format!("Importing {path}")),
    bulk = quote_literal(&path),
  )
}
