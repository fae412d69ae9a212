//! Classified export files.
//!
//! An [`AttributeFile`] is one export file whose destination table and column
//! shape are known. Classification reads the file exactly once.

use std::path::Path;

use serde_json::Value;

use crate::{
  Error, FileError, Result,
  file_name::FileNameParts,
  infer::infer_value_type,
  schema::SchemaKind,
};

/// A successfully classified export file. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFile {
  pub parts:           FileNameParts,
  pub kind:            SchemaKind,
  /// Destination table (complex kinds carry their type prefix).
  pub table_name:      String,
  /// 0/1 integer series; a candidate for the custom-tag views.
  pub looks_like_bool: bool,
  pub integer_valued:  bool,
  pub all_zeros:       bool,
}

impl AttributeFile {
  /// Read and classify the export file at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let parts = FileNameParts::parse(path)?;
    let text = std::fs::read_to_string(path)?;
    Self::from_json(parts, &text)
  }

  /// Classify an export file from its name and already-read contents.
  ///
  /// `Averages` and `Correlations` files are only checked to be an array of
  /// records; their fields are never inspected. `Simple` files have every
  /// record's `value` sampled.
  pub fn from_json(parts: FileNameParts, json: &str) -> Result<Self> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
      return Err(Error::NotAnArray);
    };

    let (kind, inference) = match SchemaKind::complex_type(&parts.type_name) {
      Some(complex) => (SchemaKind::from_complex(complex), None),
      None => {
        let inference = infer_value_type(value_samples(&records)?)?;
        (SchemaKind::Simple(inference.value_type), Some(inference))
      }
    };

    let table_name = kind.table_name(&parts);
    tracing::debug!(
      file = %parts.file_name,
      table = %table_name,
      kind = %kind,
      records = records.len(),
      "classified export file"
    );

    Ok(Self {
      looks_like_bool: inference.is_some_and(|i| i.looks_like_bool),
      integer_valued: inference.is_some_and(|i| i.integer_valued),
      all_zeros: inference.is_some_and(|i| i.all_zeros),
      parts,
      kind,
      table_name,
    })
  }

  /// Path the generated script reads the JSON from.
  pub fn file_path(&self) -> &Path { &self.parts.file_path }
}

/// The `value` node of every record, in file order.
fn value_samples(records: &[Value]) -> Result<Vec<&Value>> {
  records
    .iter()
    .enumerate()
    .map(|(index, record)| {
      record
        .as_object()
        .ok_or(Error::RecordNotObject { index })?
        .get("value")
        .ok_or(Error::MissingValue { index })
    })
    .collect()
}

/// Classify every path, keeping input order. Each failure is local to its
/// file.
pub fn classify_all<I, P>(paths: I) -> Vec<Result<AttributeFile, FileError>>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  paths
    .into_iter()
    .map(|path| {
      let path = path.as_ref();
      AttributeFile::load(path).map_err(|e| FileError::new(path, e))
    })
    .collect()
}
