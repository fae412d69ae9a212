//! Export file-name convention.
//!
//! Exist names its export files `<type>_<name parts…>[_<year>].json`, e.g.
//! `averages_mood_2021.json`. The first segment selects the schema kind, the
//! middle segments name the destination table and an optional trailing year
//! splits one attribute across several files.

use std::{
  ops::RangeInclusive,
  path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Years accepted as a trailing file-name segment.
pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2099;

/// The parsed pieces of an export file name. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameParts {
  /// Lowercased file stem, e.g. `averages_mood_2021`.
  pub file_name:  String,
  pub file_path:  PathBuf,
  /// First underscore segment, lowercased.
  pub type_name:  String,
  /// Remaining segments without the year. Falls back to `type_name` when
  /// nothing remains (`mood_2020` → `mood`).
  pub table_name: String,
  pub year:       Option<i32>,
  /// Segments remained after the type and year were taken off.
  named:          bool,
}

impl FileNameParts {
  /// Split the file stem of `path` into type, table and year.
  pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let file_name = path
      .file_stem()
      .map(|s| s.to_string_lossy().to_lowercase())
      .unwrap_or_default();

    let segments: Vec<&str> = file_name.split('_').collect();
    let (type_name, mut rest) = match segments.split_first() {
      Some((first, rest)) if !first.is_empty() => (*first, rest),
      _ => return Err(Error::MalformedFileName(file_name.clone())),
    };

    let mut year = None;
    if let Some((last, init)) = rest.split_last()
      && let Ok(candidate) = last.parse::<i32>()
      && YEAR_RANGE.contains(&candidate)
    {
      year = Some(candidate);
      rest = init;
    }

    let named = !rest.is_empty();
    let table_name = if !named {
      type_name.to_string()
    } else {
      rest.join("_")
    };
    if table_name.trim_matches('_').is_empty() {
      return Err(Error::MalformedFileName(file_name.clone()));
    }

    Ok(Self {
      type_name: type_name.to_string(),
      table_name,
      year,
      named,
      file_path: path.to_path_buf(),
      file_name,
    })
  }

  /// True when the name carried segments beyond the type (and year).
  pub fn has_name_segments(&self) -> bool { self.named }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parts(name: &str) -> FileNameParts {
    FileNameParts::parse(name).expect("parse file name")
  }

  #[test]
  fn trailing_year_is_split_off() {
    let p = parts("/export/custom_went_running_2021.json");
    assert_eq!(p.file_name, "custom_went_running_2021");
    assert_eq!(p.type_name, "custom");
    assert_eq!(p.table_name, "went_running");
    assert_eq!(p.year, Some(2021));
    assert_eq!(p.file_path, PathBuf::from("/export/custom_went_running_2021.json"));
  }

  #[test]
  fn no_year_keeps_all_segments() {
    let p = parts("attribute_sleep_end.json");
    assert_eq!(p.type_name, "attribute");
    assert_eq!(p.table_name, "sleep_end");
    assert_eq!(p.year, None);
  }

  #[test]
  fn out_of_range_number_is_part_of_the_name() {
    let p = parts("custom_top_100.json");
    assert_eq!(p.table_name, "top_100");
    assert_eq!(p.year, None);

    let p = parts("custom_year_2100.json");
    assert_eq!(p.table_name, "year_2100");
    assert_eq!(p.year, None);
  }

  #[test]
  fn range_bounds_are_inclusive() {
    assert_eq!(parts("x_y_1900.json").year, Some(1900));
    assert_eq!(parts("x_y_2099.json").year, Some(2099));
    assert_eq!(parts("x_y_1899.json").year, None);
  }

  #[test]
  fn type_only_name_falls_back_to_type() {
    let p = parts("Mood_2020.JSON");
    assert_eq!(p.type_name, "mood");
    assert_eq!(p.table_name, "mood");
    assert_eq!(p.year, Some(2020));
    assert!(!p.has_name_segments());

    let p = parts("correlations.json");
    assert_eq!(p.table_name, "correlations");
    assert_eq!(p.year, None);
  }

  #[test]
  fn name_equal_to_type_still_counts_as_segments() {
    let p = parts("averages_averages_2020.json");
    assert_eq!(p.type_name, "averages");
    assert_eq!(p.table_name, "averages");
    assert!(p.has_name_segments());

    assert!(!parts("averages_2020.json").has_name_segments());
  }

  #[test]
  fn name_is_lowercased() {
    let p = parts("Averages_Mood_2020.json");
    assert_eq!(p.type_name, "averages");
    assert_eq!(p.table_name, "mood");
    assert!(p.has_name_segments());
  }

  #[test]
  fn empty_segments_are_malformed() {
    assert!(matches!(
      FileNameParts::parse("_mood.json"),
      Err(Error::MalformedFileName(_))
    ));
    assert!(matches!(
      FileNameParts::parse("mood_.json"),
      Err(Error::MalformedFileName(_))
    ));
    assert!(matches!(
      FileNameParts::parse("__2020.json"),
      Err(Error::MalformedFileName(_))
    ));
  }
}
