//! Helper tables derived from well-known attributes.
//!
//! Each helper is rebuilt after all imports ran, and only when its source
//! table exists in the target database.

use crate::render::{drop_table, in_brackets, log_message, quote_literal};

/// A table computed from one imported attribute table.
#[derive(Debug, Clone, Copy)]
pub struct HelperTable {
  pub name:        &'static str,
  pub source:      &'static str,
  pub description: &'static str,
  /// Select list evaluated against `source`.
  pub select:      &'static str,
}

pub static HELPER_TABLES: &[HelperTable] = &[
  HelperTable {
    name:        "location_geo",
    source:      "location",
    description: "Helper table 'location_geo' enhances source table \
                  'location' by storing coordinates in SQL Server's native \
                  GEOGRAPHY data type",
    select:      "[date], [value], \
                  SUBSTRING(value, CHARINDEX(',', value) + 1, 255) AS lon, \
                  SUBSTRING(value, 0, CHARINDEX(',', value)) AS lat,\n\
                  CAST('POINT(' + SUBSTRING(value, CHARINDEX(',', value) + 1, 255) + ' ' \
                  + SUBSTRING(value, 0, CHARINDEX(',', value)) + ')' AS GEOGRAPHY) AS geo,\n\
                  CAST('POINT(' + SUBSTRING(value, CHARINDEX(',', value) + 1, 255) + ' ' \
                  + SUBSTRING(value, 0, CHARINDEX(',', value)) + ')' AS GEOGRAPHY).STAsText() AS geotext",
  },
  HelperTable {
    name:        "sleep_end_ex",
    source:      "sleep_end",
    description: "Helper table 'sleep_end_ex' enhances source table \
                  'sleep_end' by normalizing the 'minutes from midnight as \
                  integer' data to TIME and DATETIME",
    select:      "[date], [value], \
                  DATEADD(MINUTE, value, CAST('' AS TIME)) AS TimeWake, \
                  DATEADD(MINUTE, value, CAST(date AS DATETIME)) AS DateTimeWake",
  },
  HelperTable {
    name:        "sleep_start_ex",
    source:      "sleep_start",
    description: "Helper table 'sleep_start_ex' enhances source table \
                  'sleep_start' by normalizing the 'minutes from midday as \
                  integer' data to TIME and DATETIME",
    select:      "[date], [value], \
                  DATEADD(MINUTE, value, CAST('12:00' AS TIME)) AS TimeSleep, \
                  DATEADD(MINUTE, value + 720, CAST(date AS DATETIME)) AS DateTimeSleep",
  },
];

impl HelperTable {
  /// Drop, then re-create when `source` exists.
  pub fn create_script(&self) -> String {
    format!(
      "\n{log}\n{drop}\nIF OBJECT_ID({source_id}, N'U') IS NOT NULL\nBEGIN\n\
       SELECT {select}\nINTO {name}\nFROM {source}\nEND\n",
      log = log_message(self.description),
      drop = drop_table(self.name),
      source_id = format!("N{}", quote_literal(&in_brackets(self.source))),
      select = self.select,
      name = in_brackets(self.name),
      source = in_brackets(self.source),
    )
  }
}

/// All helper tables, in dependency-free order.
pub fn create_helper_tables() -> String {
  let mut out = format!("\n{}\n", log_message("Creating helper tables"));
  for helper in HELPER_TABLES {
    out.push_str(&helper.create_script());
  }
  out
}

pub fn drop_helper_tables() -> String {
  HELPER_TABLES
    .iter()
    .map(|h| drop_table(h.name) + "\n")
    .collect()
}
