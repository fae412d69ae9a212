//! Aggregate views over custom-tag and integer-trait tables.
//!
//! `LastTag` and `TagUsePast60Days` read only `AllCustomTags`. Integer
//! traits get their own union view but no aggregates: "value = 1 means it
//! happened" has no meaning for them.

use exist_core::TableGroup;

use crate::render::{drop_view, in_brackets, quote_literal};

pub const ALL_CUSTOM_TAGS: &str = "AllCustomTags";
pub const ALL_INTEGER_TRAITS: &str = "AllIntegerTraits";
pub const LAST_TAG: &str = "LastTag";
pub const TAG_USE_PAST_60_DAYS: &str = "TagUsePast60Days";

/// Every view, in creation order.
pub const VIEWS: [&str; 4] =
  [ALL_CUSTOM_TAGS, ALL_INTEGER_TRAITS, LAST_TAG, TAG_USE_PAST_60_DAYS];

/// `CREATE VIEW` must start its own batch, hence the leading `GO`s.
pub fn create_view(name: &str, query: &str) -> String {
  format!(
    "GO\n{drop}\nGO\nCREATE VIEW {name}\nAS\n{query}\n",
    drop = drop_view(name),
    name = in_brackets(name),
  )
}

/// `(name, date, value)` rows from every table, or a typed empty result
/// when there are none. A bare empty `UNION ALL` would not parse.
pub fn union_query(tables: &[&str], value_sql_type: &str) -> String {
  if tables.is_empty() {
    return format!(
      "SELECT CAST(NULL AS NVARCHAR(255)) AS [name], CAST(NULL AS DATE) AS \
       [date], CAST(NULL AS {value_sql_type}) AS [value]\nWHERE 1 = 0"
    );
  }
  tables
    .iter()
    .map(|t| {
      format!(
        "SELECT {} AS [name], [date], [value] FROM {}",
        quote_literal(t),
        in_brackets(t)
      )
    })
    .collect::<Vec<_>>()
    .join("\nUNION ALL\n")
}

pub fn last_tag_query() -> String {
  format!(
    "SELECT [name], MAX([date]) AS LastOccurrence\nFROM {}\nWHERE [value] = 1\n\
     GROUP BY [name]",
    in_brackets(ALL_CUSTOM_TAGS)
  )
}

/// Occurrences of each tag in a 60-row window ending at the current row.
pub fn tag_use_past_60_days_query() -> String {
  format!(
    "SELECT [name], [date], [value], SUM(CAST([value] AS INT)) OVER\n  \
     (PARTITION BY [name] ORDER BY [date] ASC ROWS BETWEEN 59 PRECEDING AND \
     CURRENT ROW)\n  AS TagCount\nFROM {}",
    in_brackets(ALL_CUSTOM_TAGS)
  )
}

/// All four views over `groups`, in table-iteration order.
pub fn create_views(groups: &[TableGroup<'_>]) -> String {
  let tags: Vec<&str> = groups
    .iter()
    .filter(|g| g.is_boolean_trait)
    .map(|g| g.table_name.as_str())
    .collect();
  let traits: Vec<&str> = groups
    .iter()
    .filter(|g| g.is_integer_trait)
    .map(|g| g.table_name.as_str())
    .collect();

  [
    create_view(
      ALL_CUSTOM_TAGS,
      &format!("-- union of all custom tags\n{}", union_query(&tags, "BIT")),
    ),
    create_view(
      ALL_INTEGER_TRAITS,
      &format!(
        "-- union of all integer traits\n{}",
        union_query(&traits, "INT")
      ),
    ),
    create_view(LAST_TAG, &last_tag_query()),
    create_view(
      TAG_USE_PAST_60_DAYS,
      &format!(
        "-- rolling count of occurrences of a tag\n{}",
        tag_use_past_60_days_query()
      ),
    ),
  ]
  .concat()
}

pub fn drop_views() -> String {
  VIEWS.iter().map(|v| drop_view(v) + "\n").collect()
}
