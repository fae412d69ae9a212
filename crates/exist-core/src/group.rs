//! Grouping classified files by destination table.
//!
//! Yearly exports of the same attribute land in one table. Whether that table
//! is a custom tag (or an integer trait) is decided over the whole group,
//! never per file.

use std::collections::HashMap;

use crate::attribute::AttributeFile;

/// All classified files writing to one table, plus facts derived from them.
#[derive(Debug, Clone)]
pub struct TableGroup<'a> {
  pub table_name:       String,
  /// Member files in encounter order.
  pub files:            Vec<&'a AttributeFile>,
  /// Every file is a 0/1 series and at least one file is not all zeros.
  pub is_boolean_trait: bool,
  /// Every file is integer valued and at least one file is not all zeros.
  pub is_integer_trait: bool,
}

impl<'a> TableGroup<'a> {
  fn new(table_name: String, files: Vec<&'a AttributeFile>) -> Self {
    let all_zeros = files.iter().all(|f| f.all_zeros);
    let is_boolean_trait = files.iter().all(|f| f.looks_like_bool) && !all_zeros;
    let is_integer_trait = files.iter().all(|f| f.integer_valued) && !all_zeros;
    Self {
      table_name,
      files,
      is_boolean_trait,
      is_integer_trait,
    }
  }
}

/// Group `files` by table name. Groups come back in the order their table was
/// first seen; an empty input yields no groups.
pub fn group_tables<'a, I>(files: I) -> Vec<TableGroup<'a>>
where
  I: IntoIterator<Item = &'a AttributeFile>,
{
  let mut order: Vec<(String, Vec<&'a AttributeFile>)> = Vec::new();
  let mut index: HashMap<&'a str, usize> = HashMap::new();

  for file in files {
    match index.get(file.table_name.as_str()) {
      Some(&i) => order[i].1.push(file),
      None => {
        index.insert(file.table_name.as_str(), order.len());
        order.push((file.table_name.clone(), vec![file]));
      }
    }
  }

  order
    .into_iter()
    .map(|(table_name, files)| TableGroup::new(table_name, files))
    .collect()
}
