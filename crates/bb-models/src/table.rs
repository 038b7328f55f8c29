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

//! In-memory table holding a shaped API response

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value};

/// Named columns over rows of JSON cells, in source order.
///
/// Column names may repeat: two source fields can share a display label.
/// Lookups by name resolve to the first matching column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
  columns: Vec<String>,
  rows: Vec<Vec<Value>>,
}

impl Table {
  /// An empty table with no columns and no rows
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a table with one row per record.
  ///
  /// Columns appear in first-seen order across all records; cells a record
  /// does not carry are `null`.
  pub fn from_records<'a, I>(records: I) -> Self
  where
    I: IntoIterator<Item = &'a Map<String, Value>>,
  {
    let mut table = Table::new();

    for record in records {
      let mut row = vec![Value::Null; table.columns.len()];

      for (key, value) in record {
        match table.position(key) {
          Some(index) => row[index] = value.clone(),
          None => {
            table.columns.push(key.clone());
            table.rows.iter_mut().for_each(|r| r.push(Value::Null));
            row.push(value.clone());
          }
        }
      }

      table.rows.push(row);
    }

    table
  }

  /// Column names in display order
  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  /// Rows, each aligned with [`Table::columns`]
  pub fn rows(&self) -> &[Vec<Value>] {
    &self.rows
  }

  /// Number of rows
  pub fn len(&self) -> usize {
    self.rows.len()
  }

  /// True when the table has no rows
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Index of the first column called `name`
  pub fn position(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c == name)
  }

  /// Whether a column called `name` exists
  pub fn has_column(&self, name: &str) -> bool {
    self.position(name).is_some()
  }

  /// All cells of the first column called `name`
  pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
    let index = self.position(name)?;
    Some(self.rows.iter().map(|row| &row[index]).collect())
  }

  /// Cell at `row` in the first column called `name`
  pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
    let index = self.position(name)?;
    self.rows.get(row).map(|r| &r[index])
  }

  /// Set `name` to `value` on every row, adding the column if needed.
  ///
  /// A table without rows still gains the column.
  pub fn insert_constant(&mut self, name: &str, value: Value) {
    match self.position(name) {
      Some(index) => self.rows.iter_mut().for_each(|row| row[index] = value.clone()),
      None => {
        self.columns.push(name.to_string());
        self.rows.iter_mut().for_each(|row| row.push(value.clone()));
      }
    }
  }

  /// Expand list cells of column `name` into one row per element.
  ///
  /// Other cells are duplicated onto every produced row. A row holding an
  /// empty list disappears, a row holding anything but a list is kept as is,
  /// and a missing column leaves the table untouched.
  pub fn explode(&mut self, name: &str) {
    let Some(index) = self.position(name) else {
      return;
    };

    let rows = std::mem::take(&mut self.rows);

    for mut row in rows {
      match std::mem::take(&mut row[index]) {
        Value::Array(items) => {
          for item in items {
            let mut exploded = row.clone();
            exploded[index] = item;
            self.rows.push(exploded);
          }
        }
        other => {
          row[index] = other;
          self.rows.push(row);
        }
      }
    }
  }

  /// Replace column names found in `labels`; unknown columns keep their name
  pub fn rename(&mut self, labels: &[(&str, &str)]) {
    for column in self.columns.iter_mut() {
      if let Some((_, label)) = labels.iter().find(|(source, _)| *source == column.as_str()) {
        *column = label.to_string();
      }
    }
  }
}

struct Record<'a> {
  columns: &'a [String],
  cells: &'a [Value],
}

impl Serialize for Record<'_> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.columns.len()))?;
    for (column, cell) in self.columns.iter().zip(self.cells) {
      map.serialize_entry(column, cell)?;
    }
    map.end()
  }
}

/// Serialises as a list of records, one object per row.
impl Serialize for Table {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
    for row in &self.rows {
      seq.serialize_element(&Record { columns: &self.columns, cells: row })?;
    }
    seq.end()
  }
}
