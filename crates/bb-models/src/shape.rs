/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Flattening of JSON responses into [`Table`]s

use crate::table::Table;
use bb_core::{Error, Result};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

/// Per-endpoint description of how a response becomes a table.
///
/// Built with `const` methods so endpoint catalogues can live in statics:
///
/// ```
/// use bb_models::ShapeConfig;
///
/// const STATEMENT: ShapeConfig = ShapeConfig::new()
///   .main_list("transactions")
///   .insert(&["governmentProgramCode"])
///   .explode(&["expensesDocuments"])
///   .rename(&[("value", "Valor")]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeConfig {
  /// Nested object to shape instead of the whole response
  pub root_key: Option<&'static str>,
  /// Field holding the array that becomes the rows
  pub main_list_key: Option<&'static str>,
  /// Keys renamed on the shaped object before anything else
  pub key_aliases: &'static [(&'static str, &'static str)],
  /// Sibling fields broadcast onto every row
  pub insertable_keys: &'static [&'static str],
  /// List columns expanded into one row per element, in order
  pub explodeable_keys: &'static [&'static str],
  /// Source field name to display name
  pub rename_map: &'static [(&'static str, &'static str)],
  /// Top-level fields broadcast after renaming, as (source, display name)
  pub parent_insertables: &'static [(&'static str, &'static str)],
}

impl ShapeConfig {
  /// A configuration that turns an object into a single row
  pub const fn new() -> Self {
    ShapeConfig {
      root_key: None,
      main_list_key: None,
      key_aliases: &[],
      insertable_keys: &[],
      explodeable_keys: &[],
      rename_map: &[],
      parent_insertables: &[],
    }
  }

  /// Shape the object found under `key`
  pub const fn root(mut self, key: &'static str) -> Self {
    self.root_key = Some(key);
    self
  }

  /// Take the rows from the array under `key`
  pub const fn main_list(mut self, key: &'static str) -> Self {
    self.main_list_key = Some(key);
    self
  }

  /// Rename keys of the shaped object before extracting rows
  pub const fn alias(mut self, aliases: &'static [(&'static str, &'static str)]) -> Self {
    self.key_aliases = aliases;
    self
  }

  /// Broadcast these sibling fields onto every row
  pub const fn insert(mut self, keys: &'static [&'static str]) -> Self {
    self.insertable_keys = keys;
    self
  }

  /// Explode these list columns, one after the other
  pub const fn explode(mut self, keys: &'static [&'static str]) -> Self {
    self.explodeable_keys = keys;
    self
  }

  /// Display names for the columns
  pub const fn rename(mut self, labels: &'static [(&'static str, &'static str)]) -> Self {
    self.rename_map = labels;
    self
  }

  /// Broadcast top-level fields under display names once renaming is done
  pub const fn insert_from_parent(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
    self.parent_insertables = pairs;
    self
  }
}

/// Turn a JSON response into a table according to `config`.
///
/// Steps, in order: pick the root object and apply key aliases, extract the
/// rows, broadcast insertable fields, explode list columns, rename columns,
/// broadcast parent fields. A configured key missing from the response is an
/// [`Error::MissingField`].
pub fn shape(json: &Value, config: &ShapeConfig) -> Result<Table> {
  let mut source = match config.root_key {
    Some(key) => Cow::Borrowed(field(json, key)?),
    None => Cow::Borrowed(json),
  };

  if !config.key_aliases.is_empty() {
    let object = source
      .to_mut()
      .as_object_mut()
      .ok_or_else(|| Error::InvalidResponse("expected a JSON object".to_string()))?;

    for (from, to) in config.key_aliases {
      let value = object.shift_remove(*from).ok_or_else(|| Error::MissingField(from.to_string()))?;
      object.insert(to.to_string(), value);
    }
  }

  let source: &Value = &source;

  let mut table = match config.main_list_key {
    Some(key) => {
      let items = field(source, key)?
        .as_array()
        .ok_or_else(|| Error::InvalidResponse(format!("'{}' is not a list", key)))?;

      let records = items.iter().map(|item| record(item, key)).collect::<Result<Vec<_>>>()?;

      Table::from_records(records)
    }
    None => Table::from_records([object(source)?]),
  };

  for key in config.insertable_keys {
    table.insert_constant(key, field(source, key)?.clone());
  }

  for key in config.explodeable_keys {
    if !table.has_column(key) {
      debug!(column = %key, "explode column absent, skipping");
      continue;
    }
    table.explode(key);
  }

  table.rename(config.rename_map);

  for (key, label) in config.parent_insertables {
    table.insert_constant(label, field(json, key)?.clone());
  }

  debug!(rows = table.len(), columns = table.columns().len(), "shaped response");

  Ok(table)
}

fn object(value: &Value) -> Result<&Map<String, Value>> {
  value.as_object().ok_or_else(|| Error::InvalidResponse("expected a JSON object".to_string()))
}

fn field<'a>(value: &'a Value, key: &str) -> Result<&'a Value> {
  object(value)?.get(key).ok_or_else(|| Error::MissingField(key.to_string()))
}

fn record<'a>(item: &'a Value, list: &str) -> Result<&'a Map<String, Value>> {
  item
    .as_object()
    .ok_or_else(|| Error::InvalidResponse(format!("'{}' holds an element that is not an object", list)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::collections::HashSet;

  #[test]
  fn test_main_list_becomes_rows() {
    let config = ShapeConfig::new().main_list("items");

    let table = shape(&json!({"items": [{"a": 1}, {"a": 2}]}), &config).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.column("a").unwrap(), vec![&json!(1), &json!(2)]);
  }

  #[test]
  fn test_without_main_list_the_object_is_one_row() {
    let table =
      shape(&json!({"dataSaldo": "2024-01-31", "valorDisponibilidade": 10.5}), &ShapeConfig::new())
        .unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.columns(), ["dataSaldo", "valorDisponibilidade"]);
  }

  #[test]
  fn test_insertables_are_broadcast() {
    let config = ShapeConfig::new().main_list("items").insert(&["total"]);

    let table = shape(&json!({"items": [{"a": 1}, {"a": 2}], "total": 5}), &config).unwrap();

    assert_eq!(table.column("total").unwrap(), vec![&json!(5), &json!(5)]);
  }

  #[test]
  fn test_missing_insertable_is_an_error() {
    let config = ShapeConfig::new().main_list("items").insert(&["total"]);

    let err = shape(&json!({"items": []}), &config).unwrap_err();

    assert!(matches!(err, Error::MissingField(ref key) if key == "total"));
  }

  #[test]
  fn test_missing_main_list_is_an_error() {
    let config = ShapeConfig::new().main_list("items");

    assert!(matches!(shape(&json!({}), &config), Err(Error::MissingField(_))));
    assert!(matches!(shape(&json!({"items": 3}), &config), Err(Error::InvalidResponse(_))));
    assert!(matches!(shape(&json!({"items": [1]}), &config), Err(Error::InvalidResponse(_))));
  }

  #[test]
  fn test_explode_semantics() {
    let config = ShapeConfig::new().main_list("rows").explode(&["b"]);

    let table = shape(
      &json!({"rows": [
        {"a": 1, "b": [10, 20]},
        {"a": 2, "b": []},
        {"a": 3, "b": 99}
      ]}),
      &config,
    )
    .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.column("a").unwrap(), vec![&json!(1), &json!(1), &json!(3)]);
    assert_eq!(table.column("b").unwrap(), vec![&json!(10), &json!(20), &json!(99)]);
  }

  #[test]
  fn test_absent_explode_column_keeps_rows() {
    let config = ShapeConfig::new().main_list("rows").explode(&["docs"]);

    let table =
      shape(&json!({"rows": [{"a": 1, "nested": {"x": [1, 2]}}, {"a": 2}]}), &config).unwrap();

    assert_eq!(table.len(), 2);
    assert!(!table.has_column("docs"));
    assert_eq!(table.get(0, "nested"), Some(&json!({"x": [1, 2]})));
  }

  #[test]
  fn test_sequential_explode_multiplies_rows() {
    let config = ShapeConfig::new().main_list("rows").explode(&["b", "c"]);

    let table =
      shape(&json!({"rows": [{"a": "x", "b": [1, 2], "c": ["p", "q", "r"]}]}), &config).unwrap();

    assert_eq!(table.len(), 6);
    let pairs: HashSet<String> = (0..table.len())
      .map(|i| format!("{}/{}", table.get(i, "b").unwrap(), table.get(i, "c").unwrap()))
      .collect();
    assert_eq!(pairs.len(), 6);
    assert!(pairs.contains("2/\"r\""));
    assert!(table.column("a").unwrap().iter().all(|v| **v == json!("x")));
  }

  #[test]
  fn test_rename_only_touches_present_columns() {
    const LABELS: &[(&str, &str)] = &[("a", "Alfa"), ("missing", "Ausente")];
    let config = ShapeConfig::new().main_list("items").rename(LABELS);

    let table = shape(&json!({"items": [{"a": 1, "b": 2}]}), &config).unwrap();

    assert_eq!(table.columns(), ["Alfa", "b"]);
  }

  #[test]
  fn test_empty_main_list_yields_only_configured_columns() {
    let config = ShapeConfig::new()
      .main_list("items")
      .insert(&["total"])
      .explode(&["docs"])
      .rename(&[("total", "Total"), ("a", "A")]);

    let table = shape(&json!({"items": [], "total": 0}), &config).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.columns(), ["Total"]);
  }

  #[test]
  fn test_nested_objects_stay_opaque() {
    let config = ShapeConfig::new().main_list("items");

    let table = shape(&json!({"items": [{"a": {"x": 1}}]}), &config).unwrap();

    assert_eq!(table.get(0, "a"), Some(&json!({"x": 1})));
  }

  #[test]
  fn test_root_alias_and_parent_insertables() {
    let config = ShapeConfig::new()
      .root("extrato")
      .main_list("lancamentos")
      .alias(&[("valorCota", "valorCotaExtrato")])
      .insert(&["valorCotaExtrato"])
      .rename(&[("valorCota", "Valor Cota Lançamento"), ("valorCotaExtrato", "Valor Cota Extrato")])
      .insert_from_parent(&[("codigoProgramaGoverno", "Código Programa Governo")]);

    let response = json!({
      "codigoProgramaGoverno": 7,
      "extrato": {
        "valorCota": 1.5,
        "lancamentos": [{"valorCota": 2.0}, {"valorCota": 3.0}]
      }
    });

    let table = shape(&response, &config).unwrap();

    assert_eq!(
      table.columns(),
      ["Valor Cota Lançamento", "Valor Cota Extrato", "Código Programa Governo"]
    );
    assert_eq!(table.get(1, "Valor Cota Lançamento"), Some(&json!(3.0)));
    assert_eq!(table.get(1, "Valor Cota Extrato"), Some(&json!(1.5)));
    assert_eq!(table.get(0, "Código Programa Governo"), Some(&json!(7)));

    let missing_alias = shape(&json!({"extrato": {"lancamentos": []}}), &config).unwrap_err();
    assert!(matches!(missing_alias, Error::MissingField(ref key) if key == "valorCota"));
  }
}
