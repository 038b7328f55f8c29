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

//! Printing of shaped tables

use anyhow::Result;
use bb_models::Table;
use clap::ValueEnum;
use prettytable::{Cell, Row};
use serde_json::{Map, Value};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Aligned text table
  Table,
  /// Comma separated values with a header row
  Csv,
  /// Pretty printed JSON records
  Json,
}

/// A table with the name it is printed under
pub struct Titled {
  pub title: &'static str,
  pub table: Table,
}

impl Titled {
  pub fn new(title: &'static str, table: Table) -> Self {
    Self { title, table }
  }
}

pub fn print(tables: &[Titled], format: OutputFormat) -> Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();

  match format {
    OutputFormat::Table => {
      for (i, titled) in tables.iter().enumerate() {
        if tables.len() > 1 {
          if i > 0 {
            writeln!(out)?;
          }
          writeln!(out, "{}", titled.title)?;
        }
        text_table(&titled.table).print(&mut out)?;
        writeln!(out, "{} row(s)", titled.table.len())?;
      }
    }
    OutputFormat::Csv => {
      for (i, titled) in tables.iter().enumerate() {
        if i > 0 {
          writeln!(out)?;
        }
        write_csv(&titled.table, &mut out)?;
      }
    }
    OutputFormat::Json => {
      let json = match tables {
        [single] => serde_json::to_value(&single.table)?,
        _ => {
          let mut map = Map::new();
          for titled in tables {
            map.insert(titled.title.to_string(), serde_json::to_value(&titled.table)?);
          }
          Value::Object(map)
        }
      };
      serde_json::to_writer_pretty(&mut out, &json)?;
      writeln!(out)?;
    }
  }

  Ok(())
}

fn text_table(table: &Table) -> prettytable::Table {
  let mut text = prettytable::Table::new();
  text.set_titles(Row::new(table.columns().iter().map(|column| Cell::new(column)).collect()));

  for row in table.rows() {
    text.add_row(Row::new(row.iter().map(|cell| Cell::new(&display(cell))).collect()));
  }

  text
}

fn write_csv<W: Write>(table: &Table, out: W) -> Result<()> {
  let mut writer = csv::Writer::from_writer(out);

  writer.write_record(table.columns())?;
  for row in table.rows() {
    writer.write_record(row.iter().map(display))?;
  }
  writer.flush()?;

  Ok(())
}

/// Text form of a cell: strings unquoted, null empty, anything else as JSON
fn display(cell: &Value) -> String {
  match cell {
    Value::Null => String::new(),
    Value::String(text) => text.clone(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn sample() -> Table {
    let record = json!({"Nome": "Centro", "Código": 12, "Sugerida": null});
    Table::from_records([record.as_object().unwrap()])
  }

  #[test]
  fn test_display_cells() {
    assert_eq!(display(&json!("texto")), "texto");
    assert_eq!(display(&Value::Null), "");
    assert_eq!(display(&json!(1.5)), "1.5");
    assert_eq!(display(&json!([1, 2])), "[1,2]");
  }

  #[test]
  fn test_csv_output() {
    let mut buffer = Vec::new();

    write_csv(&sample(), &mut buffer).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), "Nome,Código,Sugerida\nCentro,12,\n");
  }

  #[test]
  fn test_text_table_has_one_line_per_row() {
    let text = text_table(&sample());

    assert_eq!(text.len(), 1);
    assert!(text.to_string().contains("Centro"));
  }
}
