//! Table shapes an export file can map to.
//!
//! Most files are a plain `(date, value)` series. A small closed vocabulary of
//! "complex" type names carries a fixed, wider column list instead.

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::file_name::FileNameParts;

// ─── Scalar value types ──────────────────────────────────────────────────────

/// The SQL scalar type inferred for a `Simple` file's `value` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
  Boolean,
  Integer,
  Float,
  String,
}

impl ValueType {
  /// T-SQL column type.
  pub fn sql_type(self) -> &'static str {
    match self {
      Self::Boolean => "BIT",
      Self::Integer => "INT",
      Self::Float => "FLOAT",
      Self::String => "NVARCHAR(MAX)",
    }
  }
}

// ─── Columns ─────────────────────────────────────────────────────────────────

/// One column of an `OPENJSON … WITH (…)` projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
  pub name:      &'static str,
  pub sql_type:  &'static str,
  /// Explicit JSON path when the column is not a top-level property of the
  /// same name.
  pub json_path: Option<&'static str>,
}

impl Column {
  pub const fn new(name: &'static str, sql_type: &'static str) -> Self {
    Self { name, sql_type, json_path: None }
  }

  pub const fn at(
    name: &'static str,
    sql_type: &'static str,
    json_path: &'static str,
  ) -> Self {
    Self { name, sql_type, json_path: Some(json_path) }
  }
}

const NAME: &str = "NVARCHAR(255)";

static SIMPLE_BOOLEAN: &[Column] =
  &[Column::new("date", "DATE"), Column::new("value", "BIT")];
static SIMPLE_INTEGER: &[Column] =
  &[Column::new("date", "DATE"), Column::new("value", "INT")];
static SIMPLE_FLOAT: &[Column] =
  &[Column::new("date", "DATE"), Column::new("value", "FLOAT")];
static SIMPLE_STRING: &[Column] =
  &[Column::new("date", "DATE"), Column::new("value", "NVARCHAR(MAX)")];

pub static AVERAGES_COLUMNS: &[Column] = &[
  Column::new("attribute", NAME),
  Column::new("date", "DATE"),
  Column::new("overall", "FLOAT"),
  Column::new("monday", "FLOAT"),
  Column::new("tuesday", "FLOAT"),
  Column::new("wednesday", "FLOAT"),
  Column::new("thursday", "FLOAT"),
  Column::new("friday", "FLOAT"),
  Column::new("saturday", "FLOAT"),
  Column::new("sunday", "FLOAT"),
];

/// `second_person_elements` is a three-element array; each slot becomes its
/// own column.
pub static CORRELATIONS_COLUMNS: &[Column] = &[
  Column::new("date", "DATE"),
  Column::new("period", "INT"),
  Column::new("offset", "INT"),
  Column::new("attribute", NAME),
  Column::new("attribute2", NAME),
  Column::new("value", "FLOAT"),
  Column::new("p", "FLOAT"),
  Column::new("percentage", "FLOAT"),
  Column::new("stars", "INT"),
  Column::new("second_person", NAME),
  Column::at("second_person_first", NAME, "$.second_person_elements[0]"),
  Column::at("second_person_link", NAME, "$.second_person_elements[1]"),
  Column::at("second_person_second", NAME, "$.second_person_elements[2]"),
  Column::new("attribute_category", NAME),
  Column::new("strength_description", NAME),
  Column::new("stars_description", NAME),
  Column::new("description", "NVARCHAR(MAX)"),
  Column::new("occurrence", NAME),
  Column::new("rating", NAME),
];

// ─── Complex-type vocabulary ─────────────────────────────────────────────────

/// File type names that carry a fixed schema instead of `(date, value)`.
/// Matched case-insensitively against the first file-name segment.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ComplexType {
  Averages,
  Correlations,
}

// ─── SchemaKind ──────────────────────────────────────────────────────────────

/// The shape of a destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
  Simple(ValueType),
  Averages,
  Correlations,
}

impl SchemaKind {
  /// The complex type selected by `type_name`, if any. `None` means the file
  /// is a `Simple` series whose value type still has to be inferred.
  pub fn complex_type(type_name: &str) -> Option<ComplexType> {
    type_name.parse().ok()
  }

  pub fn from_complex(complex: ComplexType) -> Self {
    match complex {
      ComplexType::Averages => Self::Averages,
      ComplexType::Correlations => Self::Correlations,
    }
  }

  pub fn is_complex(&self) -> bool { !matches!(self, Self::Simple(_)) }

  /// The fixed `OPENJSON` column list for this kind.
  pub fn columns(&self) -> &'static [Column] {
    match self {
      Self::Simple(ValueType::Boolean) => SIMPLE_BOOLEAN,
      Self::Simple(ValueType::Integer) => SIMPLE_INTEGER,
      Self::Simple(ValueType::Float) => SIMPLE_FLOAT,
      Self::Simple(ValueType::String) => SIMPLE_STRING,
      Self::Averages => AVERAGES_COLUMNS,
      Self::Correlations => CORRELATIONS_COLUMNS,
    }
  }

  /// Destination table for a file of this kind. Complex tables are prefixed
  /// with their type so `averages_mood` never collides with `mood`.
  pub fn table_name(&self, parts: &FileNameParts) -> String {
    if self.is_complex() && parts.has_name_segments() {
      format!("{}_{}", parts.type_name, parts.table_name)
    } else {
      parts.table_name.clone()
    }
  }
}

impl std::fmt::Display for SchemaKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Simple(vt) => write!(f, "simple({vt})"),
      Self::Averages => f.write_str("averages"),
      Self::Correlations => f.write_str("correlations"),
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn complex_vocabulary_is_case_insensitive() {
    assert_eq!(SchemaKind::complex_type("averages"), Some(ComplexType::Averages));
    assert_eq!(
      SchemaKind::complex_type("Correlations"),
      Some(ComplexType::Correlations)
    );
    assert_eq!(SchemaKind::complex_type("mood"), None);
    assert_eq!(SchemaKind::complex_type(""), None);
  }

  #[test]
  fn every_complex_type_has_a_schema() {
    for ct in ComplexType::iter() {
      let kind = SchemaKind::from_complex(ct);
      assert!(kind.is_complex());
      assert!(!kind.columns().is_empty(), "{ct} has no columns");
      assert_eq!(kind.to_string(), ct.as_ref());
    }
  }

  #[test]
  fn averages_has_fixed_nine_value_columns() {
    let names: Vec<_> =
      SchemaKind::Averages.columns().iter().map(|c| c.name).collect();
    assert_eq!(
      names,
      [
        "attribute", "date", "overall", "monday", "tuesday", "wednesday",
        "thursday", "friday", "saturday", "sunday"
      ]
    );
  }

  #[test]
  fn correlations_projects_second_person_elements_by_index() {
    let paths: Vec<_> = SchemaKind::Correlations
      .columns()
      .iter()
      .filter_map(|c| c.json_path)
      .collect();
    assert_eq!(
      paths,
      [
        "$.second_person_elements[0]",
        "$.second_person_elements[1]",
        "$.second_person_elements[2]"
      ]
    );
  }

  #[test]
  fn simple_value_column_follows_value_type() {
    for (vt, sql) in [
      (ValueType::Boolean, "BIT"),
      (ValueType::Integer, "INT"),
      (ValueType::Float, "FLOAT"),
      (ValueType::String, "NVARCHAR(MAX)"),
    ] {
      let cols = SchemaKind::Simple(vt).columns();
      assert_eq!(cols[0], Column::new("date", "DATE"));
      assert_eq!(cols[1].sql_type, sql);
      assert_eq!(vt.sql_type(), sql);
    }
  }

  #[test]
  fn complex_tables_are_prefixed_with_type() {
    let parts = FileNameParts::parse("averages_mood_2020.json").unwrap();
    assert_eq!(SchemaKind::Averages.table_name(&parts), "averages_mood");

    let parts = FileNameParts::parse("correlations.json").unwrap();
    assert_eq!(SchemaKind::Correlations.table_name(&parts), "correlations");

    let parts = FileNameParts::parse("averages_averages_2020.json").unwrap();
    assert_eq!(SchemaKind::Averages.table_name(&parts), "averages_averages");
    let parts = FileNameParts::parse("averages_2020.json").unwrap();
    assert_eq!(SchemaKind::Averages.table_name(&parts), "averages");

    let parts = FileNameParts::parse("custom_mood_2020.json").unwrap();
    assert_eq!(
      SchemaKind::Simple(ValueType::Integer).table_name(&parts),
      "mood"
    );
  }
}
