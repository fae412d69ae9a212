//! Value-type inference for `(date, value)` series.
//!
//! Classification looks at every non-null sample in the file, never just the
//! first one: a single `2.5` late in an otherwise integral series makes the
//! whole column `FLOAT`.

use serde_json::Value;

use crate::{Error, Result, schema::ValueType};

/// What sampling a file's `value` column found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inference {
  pub value_type:      ValueType,
  /// Every sample is the integer `0` or `1`: a habit-tracker style custom
  /// tag. Distinct from a JSON `true`/`false` column.
  pub looks_like_bool: bool,
  /// Every sample is an integer that fits in 32 bits (0/1 files included).
  pub integer_valued:  bool,
  /// Every sample is the integer `0`.
  pub all_zeros:       bool,
}

impl Inference {
  fn plain(value_type: ValueType) -> Self {
    Self {
      value_type,
      looks_like_bool: false,
      integer_valued: false,
      all_zeros: false,
    }
  }
}

/// Infer the SQL type of a sequence of JSON `value` nodes, in file order.
///
/// Nulls are ignored. Fails with [`Error::AllNull`] when nothing else is left
/// and with [`Error::UnsupportedShape`] when any sample is an array or object.
pub fn infer_value_type<'a, I>(values: I) -> Result<Inference>
where
  I: IntoIterator<Item = &'a Value>,
{
  let mut samples: Vec<&Value> = Vec::new();
  for (index, value) in values.into_iter().enumerate() {
    match value {
      Value::Null => {}
      Value::Array(_) | Value::Object(_) => {
        return Err(Error::UnsupportedShape { index });
      }
      other => samples.push(other),
    }
  }

  if samples.is_empty() {
    return Err(Error::AllNull);
  }

  if samples.iter().all(|v| v.is_boolean()) {
    return Ok(Inference::plain(ValueType::Boolean));
  }

  if samples.iter().all(|v| v.is_number()) {
    let integers: Option<Vec<i32>> = samples.iter().map(|v| as_i32(v)).collect();
    let Some(integers) = integers else {
      return Ok(Inference::plain(ValueType::Float));
    };

    let looks_like_bool = integers.iter().all(|i| matches!(i, 0 | 1));
    return Ok(Inference {
      value_type: if looks_like_bool {
        ValueType::Boolean
      } else {
        ValueType::Integer
      },
      looks_like_bool,
      integer_valued: true,
      all_zeros: integers.iter().all(|&i| i == 0),
    });
  }

  Ok(Inference::plain(ValueType::String))
}

/// A JSON number written as an integer literal that fits in `i32`.
/// `5.0`, `1e3` and anything beyond 32 bits do not qualify.
fn as_i32(value: &Value) -> Option<i32> {
  value.as_i64().and_then(|i| i32::try_from(i).ok())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn infer(values: Value) -> Result<Inference> {
    let Value::Array(items) = values else {
      panic!("test input must be an array")
    };
    infer_value_type(&items)
  }

  #[test]
  fn all_null_fails() {
    assert!(matches!(infer(json!([null, null])), Err(Error::AllNull)));
    assert!(matches!(infer(json!([])), Err(Error::AllNull)));
  }

  #[test]
  fn nested_values_are_unsupported() {
    assert!(matches!(
      infer(json!([1, null, [1, 2]])),
      Err(Error::UnsupportedShape { index: 2 })
    ));
    assert!(matches!(
      infer(json!([{ "a": 1 }])),
      Err(Error::UnsupportedShape { index: 0 })
    ));
  }

  #[test]
  fn json_booleans_are_a_real_bit_column() {
    let inf = infer(json!([true, null, false])).unwrap();
    assert_eq!(inf.value_type, ValueType::Boolean);
    assert!(!inf.looks_like_bool);
    assert!(!inf.integer_valued);
  }

  #[test]
  fn zero_one_integers_are_a_custom_tag() {
    let inf = infer(json!([1, 0, null, 1])).unwrap();
    assert_eq!(inf.value_type, ValueType::Boolean);
    assert!(inf.looks_like_bool);
    assert!(inf.integer_valued);
    assert!(!inf.all_zeros);
  }

  #[test]
  fn all_zero_series_is_flagged() {
    let inf = infer(json!([0, null, 0])).unwrap();
    assert_eq!(inf.value_type, ValueType::Boolean);
    assert!(inf.looks_like_bool);
    assert!(inf.all_zeros);
  }

  #[test]
  fn other_integers_are_int() {
    let inf = infer(json!([5, 7, -3, 0])).unwrap();
    assert_eq!(inf.value_type, ValueType::Integer);
    assert!(!inf.looks_like_bool);
    assert!(inf.integer_valued);
    assert!(!inf.all_zeros);
  }

  #[test]
  fn one_decimal_anywhere_makes_float() {
    for position in 0..4 {
      let mut values = vec![json!(1), json!(2), json!(3), json!(4)];
      values[position] = json!(2.5);
      let inf = infer_value_type(&values).unwrap();
      assert_eq!(inf.value_type, ValueType::Float, "decimal at {position}");
      assert!(!inf.integer_valued);
    }
  }

  #[test]
  fn integral_looking_floats_are_float() {
    let inf = infer(json!([1, 2.0])).unwrap();
    assert_eq!(inf.value_type, ValueType::Float);
  }

  #[test]
  fn integers_beyond_32_bits_are_float() {
    let inf = infer(json!([1, 3_000_000_000_i64])).unwrap();
    assert_eq!(inf.value_type, ValueType::Float);
  }

  #[test]
  fn strings_and_mixtures_fall_back_to_string() {
    let inf = infer(json!(["51.5,-0.12", null])).unwrap();
    assert_eq!(inf.value_type, ValueType::String);

    let inf = infer(json!([1, "two"])).unwrap();
    assert_eq!(inf.value_type, ValueType::String);

    let inf = infer(json!([true, 1])).unwrap();
    assert_eq!(inf.value_type, ValueType::String);
  }
}
